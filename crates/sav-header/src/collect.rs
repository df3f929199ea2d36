//! Dictionary aggregation.
//!
//! A pure gather step: one provider read per category, no transformation,
//! filtering, or validation of the values. The first unavailable category
//! aborts the gather, so a partially-populated dictionary never escapes.

use sav_model::{Category, Dictionary, DictionaryMap};
use tracing::debug;

use crate::error::Result;
use crate::provider::DictionaryProvider;

/// Collect every dictionary category from the provider into a mapping.
pub fn collect_dictionary<P: DictionaryProvider + ?Sized>(provider: &P) -> Result<DictionaryMap> {
    let mut map = DictionaryMap::new();
    for category in Category::ALL {
        map.insert(category, provider.category(category)?);
    }
    debug!(categories = map.len(), "collected data dictionary");
    Ok(map)
}

/// Collect every dictionary category into the record view.
pub fn collect_record<P: DictionaryProvider + ?Sized>(provider: &P) -> Result<Dictionary> {
    let map = collect_dictionary(provider)?;
    Ok(Dictionary::from_map(map)?)
}
