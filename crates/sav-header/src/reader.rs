//! Header reader session.

use sav_model::{Dictionary, DictionaryMap};
use tracing::debug;

use crate::collect::{collect_dictionary, collect_record};
use crate::error::Result;
use crate::provider::DictionaryProvider;

/// One read session over a data file's dictionary.
///
/// Owns the provider for the lifetime of the session. The dictionary is
/// built on first request and cached; it is immutable once built.
/// [`close`](HeaderReader::close) releases the provider's resource and is
/// idempotent; dropping the reader closes it as well, discarding any
/// release error so it cannot mask one already propagating.
pub struct HeaderReader<P: DictionaryProvider> {
    provider: P,
    dictionary: Option<DictionaryMap>,
    release_on_close: bool,
    closed: bool,
}

impl<P: DictionaryProvider> HeaderReader<P> {
    /// Open a session that releases the provider resource on close.
    pub fn new(provider: P) -> Self {
        Self::with_release(provider, true)
    }

    /// Open a session with an explicit release capability.
    ///
    /// With `release_on_close` false, [`close`](HeaderReader::close) skips
    /// the provider release. Used when the underlying library cannot
    /// safely release the resource and leaking it is the lesser evil.
    pub fn with_release(provider: P, release_on_close: bool) -> Self {
        debug!(release_on_close, "header reader session opened");
        Self {
            provider,
            dictionary: None,
            release_on_close,
            closed: false,
        }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Free-text session banner from the provider, if any.
    pub fn text_info(&self) -> Option<&str> {
        self.provider.text_info()
    }

    /// Declared character encoding of the source file.
    pub fn file_encoding(&self) -> &str {
        self.provider.file_encoding()
    }

    /// Number of variables defined in the file.
    pub fn number_of_variables(&self) -> usize {
        self.provider.number_of_variables()
    }

    /// Number of cases in the file, or -1 when unknown.
    pub fn number_of_cases(&self) -> i64 {
        self.provider.number_of_cases()
    }

    /// The aggregated dictionary, built on first call and cached for the
    /// session.
    pub fn dictionary(&mut self) -> Result<&DictionaryMap> {
        if self.dictionary.is_none() {
            self.dictionary = Some(collect_dictionary(&self.provider)?);
        }
        Ok(self.dictionary.get_or_insert_with(DictionaryMap::new))
    }

    /// The record view of the dictionary.
    ///
    /// Uses the session cache when the mapping has already been built.
    pub fn record(&mut self) -> Result<Dictionary> {
        match &self.dictionary {
            Some(map) => Ok(Dictionary::from_map(map.clone())?),
            None => collect_record(&self.provider),
        }
    }

    /// Whether the session has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close the session, releasing the provider resource when the
    /// release capability allows. A second call is a no-op.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if self.release_on_close {
            self.provider.release()?;
        }
        debug!("header reader session closed");
        Ok(())
    }
}

impl<P: DictionaryProvider> Drop for HeaderReader<P> {
    fn drop(&mut self) {
        // Release errors are discarded on scoped exit.
        let _ = self.close();
    }
}
