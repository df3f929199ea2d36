//! SPSS data dictionary model definitions.
//!
//! An SPSS data file carries a data dictionary (its "header"): variable
//! names, types, labels, formats, missing-value rules, measurement levels
//! and similar per-variable or per-file metadata. This crate models that
//! dictionary as a closed set of named categories ([`Category`]), each
//! holding one of three value shapes ([`CategoryValue`]), aggregated into
//! either a mapping ([`DictionaryMap`]) or an immutable record
//! ([`Dictionary`]).

pub mod category;
pub mod dictionary;
pub mod error;
pub mod value;

pub use category::Category;
pub use dictionary::{Dictionary, DictionaryMap, empty_dictionary_map};
pub use error::{DictionaryError, Result};
pub use value::{CategoryValue, Scalar, SubValue, VarValue};
