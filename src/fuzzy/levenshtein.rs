// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and normalized similarity.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! The ranking engine compares every query term against a record's entire
//! haystack, which is hundreds of characters long. A five-letter term can
//! never reach 0.7 similarity against that, and the length check proves it
//! without running the O(nm) DP.
//!
//! All lengths are counted in Unicode scalar values, not bytes.

/// Similarity threshold above which the ranking engine awards its fuzzy bonus.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Classic Levenshtein distance: insertion, deletion and substitution at unit cost.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Edit distance if it is at most `max`, otherwise `None`.
///
/// Two early exits, both sound:
/// 1. If the length difference exceeds `max`, the distance does too
/// 2. If every cell in a DP row exceeds `max`, no later row can come back under it
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_chars: Vec<char> = b.chars().collect();

    if a_len.abs_diff(b_chars.len()) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut min_row = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
            min_row = min_row.min(row[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let distance = row[b_chars.len()];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}

/// Normalized similarity in `[0, 1]`: `(maxLen - distance) / maxLen`.
///
/// Two empty strings are identical (1.0). Symmetric, since edit distance is.
pub fn similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = longer_first(a, b);
    let max_len = longer.chars().count();
    if max_len == 0 {
        return 1.0;
    }
    ratio(max_len, levenshtein(longer, shorter))
}

/// Exactly `similarity(a, b) > threshold`, without the full DP when the
/// length gap already rules it out.
///
/// `similarity > t` needs `distance < (1 - t) * maxLen`, so the DP only runs
/// with that budget (rounded up, so nothing that could pass is cut off). The
/// final comparison uses the same ratio as [`similarity`], so rounding can
/// never disagree with it.
pub fn similarity_exceeds(a: &str, b: &str, threshold: f64) -> bool {
    let (longer, shorter) = longer_first(a, b);
    let max_len = longer.chars().count();
    if max_len == 0 {
        return 1.0 > threshold;
    }

    let budget = ((1.0 - threshold) * max_len as f64).ceil().max(0.0) as usize;
    levenshtein_bounded(longer, shorter, budget)
        .is_some_and(|distance| ratio(max_len, distance) > threshold)
}

fn ratio(max_len: usize, distance: usize) -> f64 {
    (max_len - distance) as f64 / max_len as f64
}

/// Order the pair as (longer, shorter). Ties keep `a` first.
fn longer_first<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if b.chars().count() > a.chars().count() {
        (b, a)
    } else {
        (a, b)
    }
}
