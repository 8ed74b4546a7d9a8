// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Saved problem statements, most recent first.
//!
//! The whole list lives as one JSON array under [`BOOKMARKS_KEY`] in a
//! [`Storage`] backend. Every operation reads the current list, edits it and
//! writes it back, so two handles on the same storage see each other's
//! changes.
//!
//! Bookmarks are a convenience, so the store never fails its caller: a list
//! that cannot be read or decoded reads as empty, and a failed write is
//! logged and dropped.

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::types::{FacetValue, ProblemStatement};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storage key holding the bookmark list.
pub const BOOKMARKS_KEY: &str = "sih-bookmarks";

/// The slice of a record worth keeping once it is bookmarked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    #[serde(rename = "ps_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub difficulty: FacetValue,
    #[serde(default)]
    pub organization: String,
    /// Milliseconds since the Unix epoch.
    pub bookmarked_at: i64,
}

impl BookmarkRecord {
    pub fn from_record(record: &ProblemStatement, bookmarked_at: i64) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            summary: record.summary.clone(),
            difficulty: record.difficulty.clone(),
            organization: record.organization.clone(),
            bookmarked_at,
        }
    }

    /// `bookmarked_at` as a UTC timestamp, if it is in range.
    pub fn bookmarked_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.bookmarked_at)
    }
}

/// Bookmark list over a storage backend.
#[derive(Debug)]
pub struct BookmarkStore<S> {
    storage: S,
}

impl<S: Storage> BookmarkStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// All bookmarks, most recently added first.
    pub fn list(&self) -> Vec<BookmarkRecord> {
        let raw = match self.storage.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "could not read bookmarks");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "discarding unreadable bookmarks");
            Vec::new()
        })
    }

    /// Bookmark `record` now. An existing entry moves to the front with a
    /// fresh timestamp.
    pub fn add(&mut self, record: &ProblemStatement) {
        self.add_at(record, Utc::now().timestamp_millis());
    }

    /// [`add`](Self::add) with an explicit timestamp in epoch milliseconds.
    pub fn add_at(&mut self, record: &ProblemStatement, bookmarked_at: i64) {
        let mut bookmarks = self.list();
        bookmarks.retain(|bookmark| bookmark.id != record.id);
        bookmarks.insert(0, BookmarkRecord::from_record(record, bookmarked_at));
        self.save(&bookmarks);
    }

    /// Remove the bookmark for `id`. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        let mut bookmarks = self.list();
        bookmarks.retain(|bookmark| bookmark.id != id);
        self.save(&bookmarks);
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.list().iter().any(|bookmark| bookmark.id == id)
    }

    /// Flip the bookmark state of `record`; returns the new state.
    pub fn toggle(&mut self, record: &ProblemStatement) -> bool {
        if self.is_bookmarked(&record.id) {
            self.remove(&record.id);
            false
        } else {
            self.add(record);
            true
        }
    }

    fn save(&mut self, bookmarks: &[BookmarkRecord]) {
        let encoded = match serde_json::to_string(bookmarks) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "could not encode bookmarks");
                return;
            }
        };
        if let Err(err) = self.storage.set(BOOKMARKS_KEY, &encoded) {
            warn!(error = %err, "could not save bookmarks");
        }
    }
}
