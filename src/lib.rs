//! Fuzzy search, facet filtering and bookmarking over a corpus of hackathon
//! problem statements.
//!
//! The corpus is small (hundreds to low thousands of records) and read-only,
//! so there is no index: every query scans every record, scores each term
//! against a fixed table of field weights, and ranks what scored. Facet
//! filters, a submission-count range and a sort order narrow and reorder the
//! ranked list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌──────────┐
//! │  store.rs   │────▶│  search/     │────▶│  facets/    │────▶│ sort.rs  │
//! │(RecordStore)│     │ (rank by     │     │ (tags, range│     │(by subs) │
//! │             │     │  field hits) │     │  catalog)   │     │          │
//! └─────────────┘     └──────────────┘     └─────────────┘     └──────────┘
//!        │                   │                                       │
//!        │                   ▼                                       │
//!        │            ┌──────────────┐                               │
//!        │            │  scoring/    │       pipeline.rs ties the    │
//!        │            │  fuzzy/      │       four stages together ───┘
//!        │            └──────────────┘
//!        ▼
//! ┌─────────────┐
//! │ bookmarks/  │  saved records behind a key-value Storage trait
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sihsearch::{RecordStore, SearchRequest, SortMode};
//! use sihsearch::testing::scenario_records;
//!
//! let store = RecordStore::new(scenario_records());
//! let request = SearchRequest::new("detect").sorted_by(SortMode::FewestSubmissions);
//! let ids: Vec<_> = store.run(&request).iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, vec!["SIH002", "SIH001"]);
//! ```

pub mod bookmarks;
mod error;
pub mod facets;
pub mod fuzzy;
mod pipeline;
pub mod scoring;
mod search;
mod sort;
mod store;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Test utilities (always compiled, hidden from docs)
pub mod testing;

pub use bookmarks::{BookmarkRecord, BookmarkStore, FileStorage, MemoryStorage, Storage, BOOKMARKS_KEY};
pub use error::{Error, Result};
pub use facets::{build_catalog, filter_by_submissions, filter_by_tags, FacetCatalog, FIXED_TAXONOMY};
pub use fuzzy::{levenshtein, similarity, SIMILARITY_THRESHOLD};
pub use pipeline::SearchRequest;
pub use scoring::{FieldHits, ScoreWeights};
pub use search::{explain, haystack, search, search_scored, search_with_weights, SearchFields, TermHits};
pub use sort::{sort_records, SortMode};
pub use store::RecordStore;
pub use types::{FacetValue, ProblemStatement, ScoredRecord};
pub use utils::query_terms;

#[cfg(feature = "wasm")]
pub use wasm::ProblemIndex;
