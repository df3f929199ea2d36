//! Dictionary report rendering.
//!
//! Walks an aggregated [`DictionaryMap`] and serializes it into ordered
//! text lines, the same information as the SPSS `DISPLAY DICTIONARY`
//! command. Categories appear in lexicographic name order, each under a
//! `#NAME` header line; the three value shapes each have their own layout,
//! with a special comma-joined form for the two categories that store
//! per-sub-key sequences (missing-value rules and multiple-response-set
//! definitions).

use std::fmt;
use std::io::{self, Write};

use sav_header::{DictionaryProvider, HeaderReader};
use sav_model::{Category, CategoryValue, DictionaryMap, SubValue, VarValue};

/// Platform line separator used to join report lines.
#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
/// Platform line separator used to join report lines.
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

/// A rendered dictionary report: an ordered sequence of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryReport {
    lines: Vec<String>,
}

impl DictionaryReport {
    /// The report lines, in output order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when the report has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The report joined with [`LINE_SEP`].
    pub fn to_text(&self) -> String {
        self.lines.join(LINE_SEP)
    }

    /// Write the joined report to an output stream.
    ///
    /// Rendering itself is pure; printing is the caller's side effect.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_text().as_bytes())
    }
}

impl fmt::Display for DictionaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                f.write_str(LINE_SEP)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Render an aggregated dictionary into a report.
///
/// Deterministic: equal inputs produce byte-identical output. Category
/// order, variable order, and sub-key order are all lexicographic (the
/// `BTreeMap` iteration order of the model).
pub fn render_dictionary(dictionary: &DictionaryMap) -> DictionaryReport {
    let mut lines = Vec::new();
    for (category, value) in dictionary {
        render_category(&mut lines, *category, value);
    }
    DictionaryReport { lines }
}

/// Render the full session report: the provider's text-info banner when
/// present, then the dictionary report.
pub fn render_header_report<P: DictionaryProvider>(
    reader: &mut HeaderReader<P>,
) -> sav_header::Result<String> {
    let banner = reader.text_info().map(str::to_owned);
    let report = render_dictionary(reader.dictionary()?).to_text();
    match banner {
        Some(banner) if !banner.is_empty() => Ok(format!("{banner}{LINE_SEP}{report}")),
        _ => Ok(report),
    }
}

fn render_category(lines: &mut Vec<String>, category: Category, value: &CategoryValue) {
    lines.push(format!("#{}", category.name().to_uppercase()));
    match value {
        CategoryValue::VarMap(entries) => {
            for (var_name, value) in entries {
                render_var_entry(lines, var_name, value);
            }
        }
        CategoryValue::NestedMap(entries) => {
            for (var_name, sub_entries) in entries {
                for (sub_key, sub_value) in sub_entries {
                    lines.push(render_sub_entry(category, var_name, sub_key, sub_value));
                }
            }
        }
        // A non-empty file-level scalar is a one-element sequence; an
        // empty one renders nothing (the header line remains).
        CategoryValue::Scalar(text) if !text.is_empty() => lines.push(text.clone()),
        CategoryValue::Scalar(_) => {}
        CategoryValue::List(items) => lines.extend(items.iter().cloned()),
    }
}

fn render_var_entry(lines: &mut Vec<String>, var_name: &str, value: &VarValue) {
    match value {
        VarValue::List(items) => lines.push(format!("{var_name} -- {}", items.join(", "))),
        // Empty-text entries are defined to produce no line.
        VarValue::Scalar(scalar) if scalar.is_empty_text() => {}
        VarValue::Scalar(scalar) => lines.push(format!("{var_name} -- {scalar}")),
    }
}

fn render_sub_entry(
    category: Category,
    var_name: &str,
    sub_key: &str,
    sub_value: &SubValue,
) -> String {
    match sub_value {
        SubValue::List(items) if category.is_list_style() => {
            let joined = items
                .iter()
                .map(|item| item.to_string().to_lowercase())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{var_name}: {sub_key} -- {joined}")
        }
        // The generic form trims the sub-key; the list form above keeps it
        // verbatim.
        _ => format!("{var_name}: {} -- {sub_value}", sub_key.trim()),
    }
}
