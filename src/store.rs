//! The layered key/value store.
//!
//! A [`SettingsStore`] is an ordered, append-only sequence of [`Entry`] values.
//! Keys are stored verbatim — original casing and separators preserved — and
//! normalization happens only at lookup time, in [`crate::matcher`]. "Overriding"
//! a key means adding another entry for it, never replacing an old one; the
//! full history stays enumerable while resolution surfaces exactly one entry.
//!
//! Duplicate exact keys resolve last-inserted-wins (see
//! [`find_by_exact_key`](SettingsStore::find_by_exact_key)); normalized
//! matching is first-inserted-wins, so the earliest source to claim a
//! canonical key keeps it.

use std::sync::{OnceLock, RwLock};

use indexmap::IndexMap;

use crate::matcher::canonical;
use crate::source::Source;

/// One raw key/value pair tagged with its origin. Immutable once added.
#[derive(Debug, Clone)]
pub struct Entry {
    key: String,
    value: String,
    source: Source,
}

impl Entry {
    /// The key exactly as it was supplied by the ingesting collaborator.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw string value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The provenance label recorded at ingestion time.
    pub fn source(&self) -> &Source {
        &self.source
    }
}

/// An ordered, mutable collection of configuration entries.
///
/// The store carries no synchronization of its own; concurrent mutation is the
/// embedding application's problem to serialize. The process-wide instance
/// behind [`SettingsStore::shared`] wraps one in an [`RwLock`], which is
/// exactly the contract resolution wants: any number of concurrent readers,
/// or one writer.
#[derive(Debug, Default)]
pub struct SettingsStore {
    entries: Vec<Entry>,
}

impl SettingsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lazily-initialized process-wide store.
    ///
    /// Libraries should prefer taking a `&SettingsStore` parameter; the shared
    /// instance exists for applications that want one store for the whole
    /// process, populated at startup and re-populated on reload.
    pub fn shared() -> &'static RwLock<SettingsStore> {
        static SHARED: OnceLock<RwLock<SettingsStore>> = OnceLock::new();
        SHARED.get_or_init(|| RwLock::new(SettingsStore::new()))
    }

    /// Appends an entry. Does not check for duplicates.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>, source: Source) {
        self.entries.push(Entry {
            key: key.into(),
            value: value.into(),
            source,
        });
    }

    /// Appends a flag-presence entry: the value is implicitly `"true"`.
    pub fn add_flag(&mut self, key: impl Into<String>, source: Source) {
        self.add(key, "true", source);
    }

    /// Appends every pair from an iterator under one source.
    pub fn add_all<I, K, V>(&mut self, pairs: I, source: &Source)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.add(key, value, source.clone());
        }
    }

    /// Discards all entries, resetting the store for re-population.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of stored entries, including exact-key duplicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Every key with its current value, for inspection and debugging.
    ///
    /// When several entries share an exact key, the last-added value wins,
    /// consistent with [`find_by_exact_key`](Self::find_by_exact_key).
    pub fn all(&self) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        for entry in &self.entries {
            map.insert(entry.key.clone(), entry.value.clone());
        }
        map
    }

    /// The most recently added entry whose key equals `key` exactly.
    pub fn find_by_exact_key(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().rev().find(|entry| entry.key == key)
    }

    /// The first entry, in insertion order, whose canonical form equals
    /// `normalized_key` (itself already in canonical form).
    pub fn find_by_normalized_key(&self, normalized_key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| canonical(&entry.key) == normalized_key)
    }
}
