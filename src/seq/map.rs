//! Helpers over [`HashMap`]s.
//!
//! Functions that produce text ([`join_keys`] and [`to_table`]) sort by key first, since a map's
//! own iteration order would make their output change from run to run.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use crate::util::fmt::Joined;

pub fn contains_key<K: Hash + Eq, V, S: BuildHasher>(map: &HashMap<K, V, S>, key: &K) -> bool {
    map.contains_key(key)
}

/// Merges `maps` into a new map. When a key appears more than once, the value from the latest map
/// wins.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use unikit::seq::map;
/// let defaults = HashMap::from([("width", 80), ("indent", 2)]);
/// let overrides = HashMap::from([("indent", 4)]);
/// let merged = map::merge([&defaults, &overrides]);
/// assert_eq!(merged["width"], 80);
/// assert_eq!(merged["indent"], 4);
/// ```
pub fn merge<'a, K, V, S, I>(maps: I) -> HashMap<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Clone + 'a,
    S: BuildHasher + 'a,
    I: IntoIterator<Item = &'a HashMap<K, V, S>>,
{
    let mut merged = HashMap::new();
    for map in maps {
        merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

/// Returns a copy of the entries whose value matches `predicate`.
pub fn filter_values<K, V, S, F>(map: &HashMap<K, V, S>, mut predicate: F) -> HashMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
    F: FnMut(&V) -> bool,
{
    map.iter()
        .filter(|(_, v)| predicate(v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Returns a snapshot of the map's values, in an unspecified order.
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Displays every key in ascending order, separated by `sep`.
pub fn join_keys<K: Ord + Display, V, S>(map: &HashMap<K, V, S>, sep: &str) -> String {
    let mut keys: Vec<&K> = map.keys().collect();
    keys.sort();
    Joined::new(keys.into_iter(), sep).to_string()
}

/// Renders the map as plain text, one entry per line in ascending key order. Keys are padded to
/// the width of the longest key and separated from their value by three spaces.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use unikit::seq::map;
/// let data = HashMap::from([("name", "unikit"), ("edition", "2024")]);
/// assert_eq!(map::to_table(&data), "edition   2024\nname      unikit\n");
/// ```
pub fn to_table<K: Ord + Display, V: Display, S>(map: &HashMap<K, V, S>) -> String {
    let mut entries: Vec<(&K, &V)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let rows: Vec<(String, &V)> = entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    rows.into_iter()
        .map(|(key, value)| format!("{key:<width$}   {value}\n"))
        .collect()
}
