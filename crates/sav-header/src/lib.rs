//! SPSS data dictionary reading.
//!
//! This crate defines the contract to the file-format collaborator
//! ([`DictionaryProvider`]), the aggregation step that gathers all sixteen
//! dictionary categories into one [`sav_model::DictionaryMap`], and the
//! [`HeaderReader`] session that caches the aggregated dictionary and
//! manages release of the underlying file resource.
//!
//! # Example
//!
//! ```
//! use sav_header::{HeaderReader, MemoryProvider};
//! use sav_model::{Category, CategoryValue};
//!
//! let provider = MemoryProvider::complete()
//!     .with(Category::FileLabel, CategoryValue::Scalar("Demo file".into()));
//! let mut reader = HeaderReader::new(provider);
//! let dictionary = reader.dictionary().unwrap();
//! assert_eq!(dictionary.len(), 16);
//! reader.close().unwrap();
//! ```

mod collect;
mod error;
mod memory;
mod provider;
mod reader;

pub use collect::{collect_dictionary, collect_record};
pub use error::{HeaderError, Result};
pub use memory::MemoryProvider;
pub use provider::DictionaryProvider;
pub use reader::HeaderReader;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
