//! The aggregated data dictionary.
//!
//! Two views over the same data: [`DictionaryMap`], a mapping from
//! [`Category`] to [`CategoryValue`], and [`Dictionary`], an immutable
//! record with one named field per category for attribute-style access.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::DictionaryError;
use crate::value::CategoryValue;

/// Mapping view of the data dictionary.
///
/// When produced by the aggregator it holds exactly one entry per
/// [`Category`]. Iteration order is report order (see [`Category`]).
pub type DictionaryMap = BTreeMap<Category, CategoryValue>;

/// Record view of the data dictionary: one named field per category.
///
/// Built once from a complete [`DictionaryMap`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub alignments: CategoryValue,
    pub case_weight_var: CategoryValue,
    pub column_widths: CategoryValue,
    pub file_attributes: CategoryValue,
    pub file_label: CategoryValue,
    pub formats: CategoryValue,
    pub measure_levels: CategoryValue,
    pub missing_values: CategoryValue,
    pub mult_resp_defs: CategoryValue,
    pub value_labels: CategoryValue,
    pub var_attributes: CategoryValue,
    pub var_labels: CategoryValue,
    pub var_names: CategoryValue,
    pub var_roles: CategoryValue,
    pub var_sets: CategoryValue,
    pub var_types: CategoryValue,
}

impl Dictionary {
    /// Build the record view from a mapping.
    ///
    /// Fails with [`DictionaryError::MissingCategory`] if any of the
    /// sixteen categories is absent; a partial dictionary is unusable.
    pub fn from_map(mut map: DictionaryMap) -> Result<Self, DictionaryError> {
        let mut take = |category: Category| {
            map.remove(&category)
                .ok_or(DictionaryError::MissingCategory { category })
        };
        Ok(Self {
            alignments: take(Category::Alignments)?,
            case_weight_var: take(Category::CaseWeightVar)?,
            column_widths: take(Category::ColumnWidths)?,
            file_attributes: take(Category::FileAttributes)?,
            file_label: take(Category::FileLabel)?,
            formats: take(Category::Formats)?,
            measure_levels: take(Category::MeasureLevels)?,
            missing_values: take(Category::MissingValues)?,
            mult_resp_defs: take(Category::MultRespDefs)?,
            value_labels: take(Category::ValueLabels)?,
            var_attributes: take(Category::VarAttributes)?,
            var_labels: take(Category::VarLabels)?,
            var_names: take(Category::VarNames)?,
            var_roles: take(Category::VarRoles)?,
            var_sets: take(Category::VarSets)?,
            var_types: take(Category::VarTypes)?,
        })
    }

    /// Access a category value by name.
    pub fn get(&self, category: Category) -> &CategoryValue {
        match category {
            Category::Alignments => &self.alignments,
            Category::CaseWeightVar => &self.case_weight_var,
            Category::ColumnWidths => &self.column_widths,
            Category::FileAttributes => &self.file_attributes,
            Category::FileLabel => &self.file_label,
            Category::Formats => &self.formats,
            Category::MeasureLevels => &self.measure_levels,
            Category::MissingValues => &self.missing_values,
            Category::MultRespDefs => &self.mult_resp_defs,
            Category::ValueLabels => &self.value_labels,
            Category::VarAttributes => &self.var_attributes,
            Category::VarLabels => &self.var_labels,
            Category::VarNames => &self.var_names,
            Category::VarRoles => &self.var_roles,
            Category::VarSets => &self.var_sets,
            Category::VarTypes => &self.var_types,
        }
    }

    /// Convert back into the mapping view.
    pub fn into_map(self) -> DictionaryMap {
        let mut map = DictionaryMap::new();
        map.insert(Category::Alignments, self.alignments);
        map.insert(Category::CaseWeightVar, self.case_weight_var);
        map.insert(Category::ColumnWidths, self.column_widths);
        map.insert(Category::FileAttributes, self.file_attributes);
        map.insert(Category::FileLabel, self.file_label);
        map.insert(Category::Formats, self.formats);
        map.insert(Category::MeasureLevels, self.measure_levels);
        map.insert(Category::MissingValues, self.missing_values);
        map.insert(Category::MultRespDefs, self.mult_resp_defs);
        map.insert(Category::ValueLabels, self.value_labels);
        map.insert(Category::VarAttributes, self.var_attributes);
        map.insert(Category::VarLabels, self.var_labels);
        map.insert(Category::VarNames, self.var_names);
        map.insert(Category::VarRoles, self.var_roles);
        map.insert(Category::VarSets, self.var_sets);
        map.insert(Category::VarTypes, self.var_types);
        map
    }
}

/// A complete dictionary with every category empty.
///
/// Useful as a fixture base; real dictionaries come from the aggregator.
pub fn empty_dictionary_map() -> DictionaryMap {
    Category::ALL
        .into_iter()
        .map(|category| (category, CategoryValue::empty()))
        .collect()
}
