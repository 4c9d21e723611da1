//! Memoized model loading.
//!
//! Heavyweight model handles are constructed once per configuration key
//! and reused for the rest of the session. The maps are Mutex-guarded so
//! that concurrent sessions sharing a process cannot double-load on first
//! access.

use crate::error::Result;
use crate::stt::Transcriber;
use crate::translate::Translator;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Cache of loaded model handles, keyed by configuration.
#[derive(Default)]
pub struct ModelCache {
    transcribers: Mutex<HashMap<String, Arc<dyn Transcriber>>>,
    translators: Mutex<HashMap<String, Arc<Mutex<Box<dyn Translator>>>>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the transcriber for `key`, loading it on first access.
    ///
    /// The map lock is held across `load`, so a slow first load blocks
    /// other callers instead of racing them into a duplicate load.
    pub fn transcriber<F>(&self, key: &str, load: F) -> Result<Arc<dyn Transcriber>>
    where
        F: FnOnce() -> Result<Arc<dyn Transcriber>>,
    {
        let mut map = self
            .transcribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(handle) = map.get(key) {
            return Ok(Arc::clone(handle));
        }

        log::info!("loading transcription model '{key}'");
        let handle = load()?;
        map.insert(key.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Fetch the translator for `key`, loading it on first access.
    ///
    /// Translators mutate internal decode state, so the shared handle is
    /// itself Mutex-wrapped.
    pub fn translator<F>(&self, key: &str, load: F) -> Result<Arc<Mutex<Box<dyn Translator>>>>
    where
        F: FnOnce() -> Result<Box<dyn Translator>>,
    {
        let mut map = self
            .translators
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(handle) = map.get(key) {
            return Ok(Arc::clone(handle));
        }

        log::info!("loading translation model '{key}'");
        let handle = Arc::new(Mutex::new(load()?));
        map.insert(key.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Insert an already-constructed transcriber under `key`, replacing
    /// any previous handle. Used by embedders that manage loading
    /// themselves.
    pub fn seed_transcriber(&self, key: &str, handle: Arc<dyn Transcriber>) {
        self.transcribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), handle);
    }

    /// Number of loaded transcribers (for diagnostics).
    pub fn loaded_transcribers(&self) -> usize {
        self.transcribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl std::fmt::Debug for ModelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelCache")
            .field("loaded_transcribers", &self.loaded_transcribers())
            .finish()
    }
}
