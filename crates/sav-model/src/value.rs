//! Category value shapes.
//!
//! A dictionary category holds one of three structurally different shapes:
//! a file-level scalar or sequence, a per-variable flat mapping, or a
//! per-variable nested mapping (variable -> sub-key -> value). The shapes
//! are modelled as a tagged enum so the report renderer dispatches over
//! them exhaustively instead of probing at runtime.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A leaf value inside a dictionary category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// Free text (labels, format strings, attribute values).
    Text(String),
    /// Integer metadata (variable types, column widths).
    Int(i64),
    /// Numeric metadata (missing-value bounds, counted values).
    Number(f64),
}

impl Scalar {
    /// True for the empty-text scalar, which renders as no line at all.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Int(n) => write!(f, "{n}"),
            // Integral floats keep one fractional digit (-9.0, not -9).
            Scalar::Number(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Scalar::Number(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

/// The value of one flat-mapping entry (variable name -> value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VarValue {
    /// A simple per-variable value.
    Scalar(Scalar),
    /// A per-variable list, e.g. the member variables of a variable set.
    List(Vec<String>),
}

impl From<Scalar> for VarValue {
    fn from(value: Scalar) -> Self {
        VarValue::Scalar(value)
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::Scalar(value.into())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::Scalar(value.into())
    }
}

impl From<i64> for VarValue {
    fn from(value: i64) -> Self {
        VarValue::Scalar(value.into())
    }
}

impl From<f64> for VarValue {
    fn from(value: f64) -> Self {
        VarValue::Scalar(value.into())
    }
}

/// The inner value of one nested-mapping entry
/// (variable name -> sub-key -> value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubValue {
    /// A scalar payload, e.g. a value label or an attribute value.
    Scalar(Scalar),
    /// A sequence payload, e.g. discrete missing values or the member
    /// variables of a multiple-response set.
    List(Vec<Scalar>),
}

impl fmt::Display for SubValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubValue::Scalar(scalar) => scalar.fmt(f),
            SubValue::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

impl From<Scalar> for SubValue {
    fn from(value: Scalar) -> Self {
        SubValue::Scalar(value)
    }
}

impl From<&str> for SubValue {
    fn from(value: &str) -> Self {
        SubValue::Scalar(value.into())
    }
}

impl From<String> for SubValue {
    fn from(value: String) -> Self {
        SubValue::Scalar(value.into())
    }
}

impl From<i64> for SubValue {
    fn from(value: i64) -> Self {
        SubValue::Scalar(value.into())
    }
}

impl From<f64> for SubValue {
    fn from(value: f64) -> Self {
        SubValue::Scalar(value.into())
    }
}

/// The value of one dictionary category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CategoryValue {
    /// A file-level scalar (file label, case-weight variable name).
    Scalar(String),
    /// A file-level sequence (variable names).
    List(Vec<String>),
    /// A flat mapping from variable name to a simple value.
    VarMap(BTreeMap<String, VarValue>),
    /// A nested mapping from variable name to sub-key to value.
    NestedMap(BTreeMap<String, BTreeMap<String, SubValue>>),
}

impl CategoryValue {
    /// An empty file-level scalar, the neutral value for unset categories
    /// such as a missing file label.
    pub fn empty() -> Self {
        CategoryValue::Scalar(String::new())
    }

    /// Build a flat mapping from an iterator of entries.
    pub fn var_map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<VarValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        CategoryValue::VarMap(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a nested mapping from an iterator of
    /// `(variable, [(sub-key, value)])` entries.
    pub fn nested_map<K, S, V, E, I>(entries: I) -> Self
    where
        K: Into<String>,
        S: Into<String>,
        V: Into<SubValue>,
        E: IntoIterator<Item = (S, V)>,
        I: IntoIterator<Item = (K, E)>,
    {
        CategoryValue::NestedMap(
            entries
                .into_iter()
                .map(|(k, inner)| {
                    (
                        k.into(),
                        inner
                            .into_iter()
                            .map(|(s, v)| (s.into(), v.into()))
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}
