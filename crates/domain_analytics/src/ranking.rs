//! Rankings over `(metric, tiebreak)` pairs
//!
//! Rankings pick entries by metric and always break ties by ascending
//! tiebreak key, whichever direction the metric is ranked in.

use std::cmp::Ordering;

/// Orders by metric descending, then key ascending
fn descending<M: Ord, K: Ord>(a: &(M, K), b: &(M, K)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1))
}

/// Orders by metric ascending, then key ascending
fn ascending<M: Ord, K: Ord>(a: &(M, K), b: &(M, K)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1))
}

/// Entry with the largest metric; ties go to the smallest key
pub fn highest<M: Ord, K: Ord>(entries: impl IntoIterator<Item = (M, K)>) -> Option<(M, K)> {
    entries.into_iter().min_by(descending)
}

/// Entry with the smallest metric; ties go to the smallest key
pub fn lowest<M: Ord, K: Ord>(entries: impl IntoIterator<Item = (M, K)>) -> Option<(M, K)> {
    entries.into_iter().min_by(ascending)
}

/// Up to `n` entries, largest metric first
pub fn top_n<M: Ord, K: Ord>(entries: impl IntoIterator<Item = (M, K)>, n: usize) -> Vec<(M, K)> {
    let mut ranked: Vec<(M, K)> = entries.into_iter().collect();
    ranked.sort_by(descending);
    ranked.truncate(n);
    ranked
}
