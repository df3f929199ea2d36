//! In-memory dictionary provider.

use sav_model::{Category, CategoryValue, DictionaryMap, empty_dictionary_map};

use crate::error::{HeaderError, Result};
use crate::provider::DictionaryProvider;

/// A provider backed by an in-memory [`DictionaryMap`].
///
/// The reference implementation of the provider contract, for tests and
/// for embedders that already hold the metadata. Categories may be left
/// deliberately absent (via [`MemoryProvider::new`]) to exercise the
/// missing-category failure path.
#[derive(Debug, Clone)]
pub struct MemoryProvider {
    entries: DictionaryMap,
    text_info: Option<String>,
    file_encoding: String,
    number_of_cases: i64,
    released: bool,
}

impl MemoryProvider {
    /// A provider with no categories at all.
    pub fn new() -> Self {
        Self {
            entries: DictionaryMap::new(),
            text_info: None,
            file_encoding: "utf-8".to_string(),
            number_of_cases: -1,
            released: false,
        }
    }

    /// A provider exposing every category, each with an empty value.
    pub fn complete() -> Self {
        Self::from_map(empty_dictionary_map())
    }

    /// A provider backed by the given mapping.
    pub fn from_map(entries: DictionaryMap) -> Self {
        Self {
            entries,
            ..Self::new()
        }
    }

    /// Set one category value.
    pub fn with(mut self, category: Category, value: CategoryValue) -> Self {
        self.entries.insert(category, value);
        self
    }

    /// Set the session banner.
    pub fn with_text_info(mut self, text_info: impl Into<String>) -> Self {
        self.text_info = Some(text_info.into());
        self
    }

    /// Set the declared file encoding.
    pub fn with_file_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.file_encoding = encoding.into();
        self
    }

    /// Set the case count.
    pub fn with_number_of_cases(mut self, cases: i64) -> Self {
        self.number_of_cases = cases;
        self
    }

    /// Whether the provider's resource has been released.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryProvider for MemoryProvider {
    fn category(&self, category: Category) -> Result<CategoryValue> {
        if self.released {
            return Err(HeaderError::SessionClosed);
        }
        self.entries
            .get(&category)
            .cloned()
            .ok_or(HeaderError::CategoryUnavailable { category })
    }

    fn text_info(&self) -> Option<&str> {
        self.text_info.as_deref()
    }

    fn file_encoding(&self) -> &str {
        &self.file_encoding
    }

    fn number_of_cases(&self) -> i64 {
        self.number_of_cases
    }

    fn release(&mut self) -> Result<()> {
        self.released = true;
        Ok(())
    }
}
