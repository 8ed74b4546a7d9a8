// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facets: the filterable categories and what selecting them does.
//!
//! The catalog is what a UI shows; the filters are what it applies. The two
//! are deliberately not in sync: the fixed taxonomy lists values no record
//! uses, and selecting one just narrows to an empty result.

pub mod catalog;
pub mod filter;
pub mod range;
pub mod taxonomy;

pub use catalog::{build_catalog, FacetCatalog};
pub use filter::{filter_by_tags, matches_tag};
pub use range::filter_by_submissions;
pub use taxonomy::FIXED_TAXONOMY;
