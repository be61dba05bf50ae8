//! Lazy, cached access to translation documents on disk.
//!
//! The library owns the mapping from translation code to data file and keeps
//! every tree it has loaded. Trees are handed out as `Arc<DocumentTree>` and
//! are never modified after loading, so any number of readers may search and
//! fetch against them concurrently.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use super::loader;
use super::types::error::{BibleError, Result};
use super::types::models::{DocumentTree, TranslationCode};

/// Snapshot of which translations are loaded, being loaded, and loadable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingStatus {
    pub loaded: Vec<TranslationCode>,
    pub loading: Vec<TranslationCode>,
    pub available: Vec<TranslationCode>,
}

/// Per-translation state. The tree is published once; `load` serializes
/// loaders of this translation only.
#[derive(Debug)]
struct Slot {
    file_name: String,
    tree: OnceLock<Arc<DocumentTree>>,
    load: Mutex<()>,
    in_flight: AtomicUsize,
}

impl Slot {
    fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            tree: OnceLock::new(),
            load: Mutex::new(()),
            in_flight: AtomicUsize::new(0),
        }
    }
}

/// Counts a pending `get` for as long as it is alive.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        InFlight(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Translation documents keyed by code, loaded from `data_dir` on first use.
#[derive(Debug)]
pub struct TranslationLibrary {
    data_dir: PathBuf,
    slots: HashMap<TranslationCode, Slot>,
}

impl TranslationLibrary {
    /// A library with the default file names for RST, NRT and KTB.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let slots = [
            (TranslationCode::RST, "bible_data.js"),
            (TranslationCode::NRT, "nrt_data.js"),
            (TranslationCode::KTB, "ktb_data.js"),
        ]
        .into_iter()
        .map(|(code, file)| (code, Slot::new(file)))
        .collect();

        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            slots,
        }
    }

    /// Adds a translation or changes the file it is read from.
    pub fn with_file(mut self, code: TranslationCode, file_name: &str) -> Self {
        self.slots.insert(code, Slot::new(file_name));
        self
    }

    /// Returns the tree for `code`, loading it on first request.
    ///
    /// Concurrent first requests for the same translation read the file once.
    /// Loading one translation never blocks access to another.
    ///
    /// # Errors
    /// - `UnsupportedTranslation` if no file is configured for `code`
    /// - any loader error for the file
    pub fn get(&self, code: &TranslationCode) -> Result<Arc<DocumentTree>> {
        let slot = self
            .slots
            .get(code)
            .ok_or_else(|| BibleError::UnsupportedTranslation(code.to_string()))?;
        if let Some(tree) = slot.tree.get() {
            debug!("{} served from cache", code);
            return Ok(Arc::clone(tree));
        }

        let _pending = InFlight::enter(&slot.in_flight);
        let _guard = slot.load.lock().map_err(|_| BibleError::LockPoisoned)?;
        if let Some(tree) = slot.tree.get() {
            debug!("{} loaded by a concurrent request", code);
            return Ok(Arc::clone(tree));
        }

        let tree = loader::load(self.data_dir.join(&slot.file_name))?;
        if let Some(declared) = tree.translation() {
            if declared != code {
                warn!("{} is declared as {} by its data file", code, declared);
            }
        }
        info!("{} loaded", code);
        Ok(Arc::clone(slot.tree.get_or_init(|| Arc::new(tree))))
    }

    /// Returns the tree for `code` only if it is already loaded. Never blocks.
    pub fn loaded(&self, code: &TranslationCode) -> Option<Arc<DocumentTree>> {
        self.slots.get(code)?.tree.get().cloned()
    }

    pub fn is_loaded(&self, code: &TranslationCode) -> bool {
        self.loaded(code).is_some()
    }

    /// Whether a request for `code` is waiting on its file right now.
    pub fn is_loading(&self, code: &TranslationCode) -> bool {
        self.slots
            .get(code)
            .is_some_and(|slot| slot.tree.get().is_none() && slot.in_flight.load(Ordering::Acquire) > 0)
    }

    pub fn status(&self) -> LoadingStatus {
        let mut loaded = Vec::new();
        let mut loading = Vec::new();
        let mut available = Vec::new();
        for code in self.slots.keys() {
            if self.is_loaded(code) {
                loaded.push(code.clone());
            } else if self.is_loading(code) {
                loading.push(code.clone());
            }
            available.push(code.clone());
        }
        loaded.sort();
        loading.sort();
        available.sort();
        LoadingStatus {
            loaded,
            loading,
            available,
        }
    }

    /// Loads `code` on a background thread.
    ///
    /// Does nothing if the translation is already loaded. Failures are logged,
    /// not returned; a later [`TranslationLibrary::get`] retries the load.
    pub fn preload(self: &Arc<Self>, code: TranslationCode) -> Option<JoinHandle<()>> {
        if self.is_loaded(&code) {
            return None;
        }
        let library = Arc::clone(self);
        Some(thread::spawn(move || {
            if let Err(e) = library.get(&code) {
                warn!("Preload failed for {}: {}", code, e);
            }
        }))
    }
}
