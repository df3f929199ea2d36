//! The closed set of dictionary item categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One named slice of file-level or variable-level metadata.
///
/// The set is closed: an SPSS data dictionary consists of exactly these
/// sixteen items. Variants are declared in lexicographic order of their
/// dictionary name, so the derived `Ord` (and iteration order of any
/// `BTreeMap` keyed by `Category`) is also report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Cell alignment per variable (left, right, center).
    Alignments,
    /// Name of the case-weight variable, if one is set.
    CaseWeightVar,
    /// Display column width per variable.
    ColumnWidths,
    /// File-level custom attributes.
    FileAttributes,
    /// The file label.
    FileLabel,
    /// Print/write format per variable (e.g. `F8.2`, `A10`).
    Formats,
    /// Measurement level per variable (nominal, ordinal, scale).
    MeasureLevels,
    /// Missing-value rules per variable.
    MissingValues,
    /// Multiple-response-set definitions.
    MultRespDefs,
    /// Value labels per variable.
    ValueLabels,
    /// Custom attributes per variable.
    VarAttributes,
    /// Variable labels.
    VarLabels,
    /// Variable names, in file order.
    VarNames,
    /// Variable roles (input, target, both, ...).
    VarRoles,
    /// Named variable sets.
    VarSets,
    /// Variable types (0 for numeric, string length otherwise).
    VarTypes,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 16] = [
        Category::Alignments,
        Category::CaseWeightVar,
        Category::ColumnWidths,
        Category::FileAttributes,
        Category::FileLabel,
        Category::Formats,
        Category::MeasureLevels,
        Category::MissingValues,
        Category::MultRespDefs,
        Category::ValueLabels,
        Category::VarAttributes,
        Category::VarLabels,
        Category::VarNames,
        Category::VarRoles,
        Category::VarSets,
        Category::VarTypes,
    ];

    /// The dictionary name of this category, as used in report headers.
    pub fn name(self) -> &'static str {
        match self {
            Category::Alignments => "alignments",
            Category::CaseWeightVar => "caseWeightVar",
            Category::ColumnWidths => "columnWidths",
            Category::FileAttributes => "fileAttributes",
            Category::FileLabel => "fileLabel",
            Category::Formats => "formats",
            Category::MeasureLevels => "measureLevels",
            Category::MissingValues => "missingValues",
            Category::MultRespDefs => "multRespDefs",
            Category::ValueLabels => "valueLabels",
            Category::VarAttributes => "varAttributes",
            Category::VarLabels => "varLabels",
            Category::VarNames => "varNames",
            Category::VarRoles => "varRoles",
            Category::VarSets => "varSets",
            Category::VarTypes => "varTypes",
        }
    }

    /// Look up a category by its dictionary name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Whether sequence-valued sub-entries of this category render as a
    /// single lowercased, comma-joined line.
    ///
    /// Missing-value rules and multiple-response-set definitions store
    /// per-sub-key sequences (rule payloads, member variable lists); all
    /// other nested categories hold scalar sub-values.
    pub fn is_list_style(self) -> bool {
        matches!(self, Category::MissingValues | Category::MultRespDefs)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
