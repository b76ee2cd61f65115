//! Shared fixtures for resolver and aggregator tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog_lookup_core::{Entry, EntryField, EntryInput, normalize};
use catalog_lookup_phonetic::{PhoneticError, PhoneticProvider, SharedPhonetics};
use catalog_lookup_storage::{EntryStore, MemoryStorage, StorageError};

use crate::CatalogSearch;

/// Case-folding stand-in for a romanizer: keys are the lowercased normalized name.
pub struct FoldCase;

impl PhoneticProvider for FoldCase {
    fn phoneticize(&self, normalized: &str) -> Result<String, PhoneticError> {
        Ok(normalized.to_lowercase())
    }
}

/// Provider that is configured but currently reports itself offline.
pub struct Offline;

impl PhoneticProvider for Offline {
    fn is_available(&self) -> bool {
        false
    }

    fn phoneticize(&self, _normalized: &str) -> Result<String, PhoneticError> {
        Err(PhoneticError::Unavailable)
    }
}

/// Provider that claims availability but fails every call.
pub struct Broken;

impl PhoneticProvider for Broken {
    fn phoneticize(&self, normalized: &str) -> Result<String, PhoneticError> {
        Err(PhoneticError::Encoding {
            input: normalized.to_owned(),
            reason: "boom".to_owned(),
        })
    }
}

pub fn fold_case() -> Option<SharedPhonetics> {
    Some(Arc::new(FoldCase))
}

/// Entry with its phonetic key already indexed under `FoldCase`.
pub fn entry(id: i64, name: &str) -> Entry {
    let mut entry = Entry::from_input(EntryInput {
        id,
        name: name.to_owned(),
        description: String::new(),
        audio_urls: Vec::new(),
    })
    .unwrap();
    entry.phonetic_name = normalize(name).to_lowercase();
    entry
}

pub async fn store_with(entries: Vec<Entry>) -> Arc<MemoryStorage> {
    let storage = MemoryStorage::new();
    storage.upsert_entries(&entries).await.unwrap();
    Arc::new(storage)
}

pub fn ids<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<i64> {
    entries.into_iter().map(|e| e.id).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Exact(EntryField, String),
    Substring(EntryField, String, usize),
    SubstringIds(EntryField, String),
}

/// Wraps a memory store, logging every query and optionally failing on one field.
pub struct RecordingStore {
    inner: MemoryStorage,
    calls: Mutex<Vec<Call>>,
    fail_on: Option<EntryField>,
}

impl RecordingStore {
    pub async fn new(entries: Vec<Entry>, fail_on: Option<EntryField>) -> Arc<Self> {
        let inner = MemoryStorage::new();
        inner.upsert_entries(&entries).await.unwrap();
        Arc::new(Self { inner, calls: Mutex::new(Vec::new()), fail_on })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, field: EntryField) -> Result<(), StorageError> {
        if self.fail_on == Some(field) {
            return Err(StorageError::Unavailable(format!("{field} index offline")));
        }
        Ok(())
    }
}

#[async_trait]
impl EntryStore for RecordingStore {
    async fn find_exact(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<Entry>, StorageError> {
        self.calls.lock().unwrap().push(Call::Exact(field, value.to_owned()));
        self.check(field)?;
        self.inner.find_exact(field, value).await
    }

    async fn find_substring(
        &self,
        field: EntryField,
        value: &str,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError> {
        self.calls.lock().unwrap().push(Call::Substring(field, value.to_owned(), limit));
        self.check(field)?;
        self.inner.find_substring(field, value, limit).await
    }

    async fn find_substring_ids(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<i64>, StorageError> {
        self.calls.lock().unwrap().push(Call::SubstringIds(field, value.to_owned()));
        self.check(field)?;
        self.inner.find_substring_ids(field, value).await
    }

    async fn upsert_entries(&self, entries: &[Entry]) -> Result<usize, StorageError> {
        self.inner.upsert_entries(entries).await
    }

    async fn delete_all(&self) -> Result<usize, StorageError> {
        self.inner.delete_all().await
    }

    async fn count_entries(&self) -> Result<usize, StorageError> {
        self.inner.count_entries().await
    }
}

pub fn searcher<S: ?Sized>(
    storage: Arc<S>,
    phonetics: Option<SharedPhonetics>,
) -> CatalogSearch<S> {
    CatalogSearch::new(storage, phonetics)
}

mod aggregator_tests;
