//! In-memory record store.
//!
//! `Store<T>` is an insertion-ordered collection behind a single mutex.
//! Every compound operation (lookup + append, lookup + mutate,
//! lookup + remove) runs under one lock acquisition, so id uniqueness holds
//! even when handlers run on several runtime threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::id::next_id;

/// A record addressable by a string id
pub trait Record: Clone {
    fn id(&self) -> &str;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
}

pub struct Store<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Build a store from existing records, rejecting duplicate ids
    pub fn from_records(records: Vec<T>) -> Result<Self, StoreError> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id() == record.id()) {
                return Err(StoreError::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self {
            records: Mutex::new(records),
        })
    }

    // Poisoning is ignored: closures validate before they write.
    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every record in insertion order
    pub fn list(&self) -> Vec<T> {
        self.lock().clone()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.lock().iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Allocate the next id and append the record built from it
    pub fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        let mut records = self.lock();
        let id = next_id(records.iter().map(|r| r.id()));
        let record = build(id);
        records.push(record.clone());
        record
    }

    /// Apply `apply` to the record with `id` in place.
    ///
    /// Returns `None` if no such record exists. `apply` may refuse the change
    /// by returning `Err`, in which case it must leave the record untouched.
    pub fn update<F, E>(&self, id: &str, apply: F) -> Option<Result<T, E>>
    where
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        let mut records = self.lock();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        Some(apply(&mut *record).map(|()| record.clone()))
    }

    /// Remove the record with `id` if `check` allows it.
    ///
    /// Returns `None` if no such record exists.
    pub fn remove_if<F, E>(&self, id: &str, check: F) -> Option<Result<T, E>>
    where
        F: FnOnce(&T) -> Result<(), E>,
    {
        let mut records = self.lock();
        let idx = records.iter().position(|r| r.id() == id)?;
        Some(check(&records[idx]).map(|()| records.remove(idx)))
    }
}
