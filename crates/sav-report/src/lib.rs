//! SPSS data dictionary report generation.
//!
//! Renders an aggregated data dictionary into the deterministic text
//! report produced by the SPSS `DISPLAY DICTIONARY` command:
//!
//! - one `#NAME` header line per category, in lexicographic name order;
//! - flat categories as verbatim lines, per-variable categories as
//!   `name -- value` lines, nested categories as `name: key -- value`
//!   lines with sorted sub-keys;
//! - missing-value rules and multiple-response-set definitions join their
//!   sequence payloads into one lowercased, comma-separated line.
//!
//! # Example
//!
//! ```
//! use sav_header::{HeaderReader, MemoryProvider};
//! use sav_model::{Category, CategoryValue};
//! use sav_report::render_header_report;
//!
//! let provider = MemoryProvider::complete()
//!     .with(Category::FileLabel, CategoryValue::Scalar("Demo file".into()))
//!     .with(Category::VarNames, CategoryValue::List(vec!["age".into()]));
//! let mut reader = HeaderReader::new(provider);
//! let report = render_header_report(&mut reader).unwrap();
//! assert!(report.contains("#FILELABEL"));
//! ```

mod render;

pub use render::{DictionaryReport, LINE_SEP, render_dictionary, render_header_report};
