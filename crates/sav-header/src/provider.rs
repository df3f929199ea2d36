//! The dictionary provider contract.

use sav_model::{Category, CategoryValue};

use crate::error::Result;

/// The seam to the file-format collaborator.
///
/// A provider owns the underlying file resource and exposes one read
/// accessor per dictionary [`Category`]. Reads are idempotent and cheap;
/// no caching is imposed here. A provider that cannot supply a category
/// returns [`HeaderError::CategoryUnavailable`](crate::HeaderError::CategoryUnavailable),
/// which the aggregator propagates rather than building a partial
/// dictionary.
pub trait DictionaryProvider {
    /// Read one dictionary category.
    fn category(&self, category: Category) -> Result<CategoryValue>;

    /// Free-text session banner, prepended to the header report when
    /// present.
    fn text_info(&self) -> Option<&str> {
        None
    }

    /// Declared character encoding of the source file. Informational only;
    /// decoding is the provider's concern.
    fn file_encoding(&self) -> &str {
        "utf-8"
    }

    /// Number of variables defined in the file.
    fn number_of_variables(&self) -> usize {
        match self.category(Category::VarNames) {
            Ok(CategoryValue::List(names)) => names.len(),
            _ => 0,
        }
    }

    /// Number of cases in the file, or -1 when unknown.
    fn number_of_cases(&self) -> i64 {
        -1
    }

    /// Release the underlying resource. Must be idempotent: releasing an
    /// already-released resource is a no-op.
    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}
