//! Single-pass grouping
//!
//! Every grouping query in the engine is built from [`fill_buckets`]: walk a
//! collection once, derive a key per item and fold the item into that key's
//! accumulator. The specialised helpers below cover the three accumulators
//! the engine needs (a count, a running sum, and a sum with a count).

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::AnalyticsError;

/// Groups `items` by `key`, folding each item into its bucket's accumulator
pub fn fill_buckets<I, K, A>(
    items: I,
    key: impl Fn(&I::Item) -> K,
    init: impl Fn() -> A,
    mut fold: impl FnMut(&mut A, &I::Item),
) -> HashMap<K, A>
where
    I: IntoIterator,
    K: Eq + Hash,
{
    let mut buckets = HashMap::new();
    for item in items {
        let accumulator = buckets.entry(key(&item)).or_insert_with(&init);
        fold(accumulator, &item);
    }
    buckets
}

/// Counts items per key
pub fn count_by<I, K>(items: I, key: impl Fn(&I::Item) -> K) -> HashMap<K, usize>
where
    I: IntoIterator,
    K: Eq + Hash,
{
    fill_buckets(items, key, || 0usize, |count, _| *count += 1)
}

/// Sums a decimal value per key
pub fn sum_by<I, K>(
    items: I,
    key: impl Fn(&I::Item) -> K,
    value: impl Fn(&I::Item) -> Decimal,
) -> HashMap<K, Decimal>
where
    I: IntoIterator,
    K: Eq + Hash,
{
    fill_buckets(items, key, || Decimal::ZERO, |sum, item| *sum += value(item))
}

/// Running total and item count for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: Decimal,
    pub count: usize,
}

impl Tally {
    pub fn add(&mut self, value: Decimal) {
        self.total += value;
        self.count += 1;
    }

    /// Arithmetic mean, or `None` for an empty tally
    pub fn mean(&self) -> Option<Decimal> {
        if self.count == 0 {
            None
        } else {
            Some(self.total / Decimal::from(self.count))
        }
    }
}

/// Accumulates a [`Tally`] per key
pub fn tally_by<I, K>(
    items: I,
    key: impl Fn(&I::Item) -> K,
    value: impl Fn(&I::Item) -> Decimal,
) -> HashMap<K, Tally>
where
    I: IntoIterator,
    K: Eq + Hash,
{
    fill_buckets(items, key, Tally::default, |tally, item| tally.add(value(item)))
}

/// Reads one bucket, failing with `NotFound` when the key never occurred
pub fn bucket<K, V>(
    buckets: &HashMap<K, V>,
    key: &K,
    entity: &'static str,
) -> Result<V, AnalyticsError>
where
    K: Eq + Hash + Display,
    V: Copy,
{
    buckets
        .get(key)
        .copied()
        .ok_or_else(|| AnalyticsError::not_found(entity, key))
}
