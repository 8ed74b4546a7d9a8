// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: score every record, keep what scored, rank it.
//!
//! `search`, `search_scored`, `search_with_weights` and `explain` all go
//! through [`SearchFields::hits`] and [`FieldHits::score`], so the breakdown
//! printed by `--explain` always adds up to the score used for ranking.
//!
//! With the `parallel` feature the per-record scoring runs on rayon. Scores
//! are collected back in corpus order before ranking, so results are
//! identical either way.

use super::fields::SearchFields;
use crate::scoring::ranking::rank;
use crate::scoring::{FieldHits, ScoreWeights};
use crate::types::{ProblemStatement, ScoredRecord};
use crate::utils::query_terms;
use serde::Serialize;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ranked records matching `query`, best first.
///
/// An empty or whitespace-only query returns every record, in input order.
/// Records scoring 0 are dropped. Ties keep input order.
///
/// ```
/// use sihsearch::{search, testing::scenario_records};
///
/// let records = scenario_records();
/// let results = search("water", &records);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id, "SIH001");
/// ```
pub fn search<'a, I>(query: &str, records: I) -> Vec<&'a ProblemStatement>
where
    I: IntoIterator<Item = &'a ProblemStatement>,
{
    search_scored(query, records)
        .into_iter()
        .map(|entry| entry.record)
        .collect()
}

/// Like [`search`], but keeps the scores.
///
/// For an empty query every record comes back with score 0.
pub fn search_scored<'a, I>(query: &str, records: I) -> Vec<ScoredRecord<'a>>
where
    I: IntoIterator<Item = &'a ProblemStatement>,
{
    search_with_weights(query, records, &ScoreWeights::STANDARD)
}

/// Like [`search_scored`], with a custom weight table.
pub fn search_with_weights<'a, I>(
    query: &str,
    records: I,
    weights: &ScoreWeights,
) -> Vec<ScoredRecord<'a>>
where
    I: IntoIterator<Item = &'a ProblemStatement>,
{
    let records: Vec<&'a ProblemStatement> = records.into_iter().collect();
    let terms = query_terms(query);

    if terms.is_empty() {
        return records
            .into_iter()
            .map(|record| ScoredRecord { record, score: 0 })
            .collect();
    }

    let scores = score_all(&records, &terms, weights);
    let candidates = records.len();

    let scored: Vec<ScoredRecord<'a>> = records
        .into_iter()
        .zip(scores)
        .map(|(record, score)| ScoredRecord { record, score })
        .collect();
    let ranked = rank(scored);

    debug!(
        terms = terms.len(),
        candidates,
        matched = ranked.len(),
        "search"
    );
    ranked
}

#[cfg(feature = "parallel")]
fn score_all(records: &[&ProblemStatement], terms: &[String], weights: &ScoreWeights) -> Vec<u32> {
    records
        .par_iter()
        .map(|record| score_record(record, terms, weights))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(records: &[&ProblemStatement], terms: &[String], weights: &ScoreWeights) -> Vec<u32> {
    records
        .iter()
        .map(|record| score_record(record, terms, weights))
        .collect()
}

/// Total score of one record for already-tokenized `terms`.
pub fn score_record(record: &ProblemStatement, terms: &[String], weights: &ScoreWeights) -> u32 {
    let fields = SearchFields::new(record);
    terms
        .iter()
        .map(|term| fields.hits(term).score(weights))
        .sum()
}

/// Per-term breakdown of how one record scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermHits {
    pub term: String,
    pub hits: FieldHits,
    pub score: u32,
}

/// Explain how `record` scores against `query` under the standard weights.
///
/// One entry per query term, in query order. The scores sum to what
/// [`search_scored`] reports for the record.
pub fn explain(query: &str, record: &ProblemStatement) -> Vec<TermHits> {
    let fields = SearchFields::new(record);
    query_terms(query)
        .into_iter()
        .map(|term| {
            let hits = fields.hits(&term);
            let score = hits.score(&ScoreWeights::STANDARD);
            TermHits { term, hits, score }
        })
        .collect()
}
