// src/core/analyzer/frequency.rs
use std::collections::HashMap;
use std::hash::Hash;

/// Returns the `n` highest-count entries of a frequency map.
///
/// Operates on a snapshot, so the caller's map is left untouched and two
/// consecutive calls return the same answer. Ordering is count descending
/// with ties broken by key ascending, which keeps the selection
/// deterministic. Fewer than `n` entries returns all of them.
#[must_use]
pub fn top_n<K>(frequency: &HashMap<K, u64>, n: usize) -> Vec<(K, u64)>
where
    K: Clone + Ord + Hash,
{
    let mut entries: Vec<(K, u64)> = frequency
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}
