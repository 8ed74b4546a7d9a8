//! Submission-count range filtering.

use crate::types::ProblemStatement;
use std::ops::RangeInclusive;

/// Records whose submission count (missing reads as 0) lies in `range`.
pub fn filter_by_submissions<'a, I>(records: I, range: &RangeInclusive<u32>) -> Vec<&'a ProblemStatement>
where
    I: IntoIterator<Item = &'a ProblemStatement>,
{
    records
        .into_iter()
        .filter(|record| range.contains(&record.submissions()))
        .collect()
}

/// Smallest and largest submission count in `records`, or `None` if empty.
pub fn submission_bounds<'a, I>(records: I) -> Option<(u32, u32)>
where
    I: IntoIterator<Item = &'a ProblemStatement>,
{
    records
        .into_iter()
        .map(ProblemStatement::submissions)
        .fold(None, |bounds, count| match bounds {
            None => Some((count, count)),
            Some((lo, hi)) => Some((lo.min(count), hi.max(count))),
        })
}
