//! Top-K sentence selection
//!
//! Selection keeps rank order. Restoring document order is left to the
//! caller.

use super::ranker::Ranking;
use crate::errors::{Result, SummaryError};
use crate::types::Sentence;

/// Take the first `top_n` sentences of a ranking
///
/// Fails with `OutOfRange` when `top_n` exceeds the number of ranked
/// sentences; the count is never silently clamped.
pub fn select<'a>(ranking: &Ranking<'a>, top_n: usize) -> Result<Vec<&'a Sentence>> {
    if top_n == 0 {
        return Err(SummaryError::invalid_config("top_n must be > 0"));
    }
    if top_n > ranking.len() {
        return Err(SummaryError::out_of_range(top_n, ranking.len()));
    }

    Ok(ranking
        .top_n(top_n)
        .iter()
        .map(|r| r.sentence)
        .collect())
}
