use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Returns the positions `(first, second)` of the earliest duplicate pair, where
/// `second` is the smallest index whose value already appeared at `first`.
pub fn first_duplicate<T: Eq + Hash>(items: &[T]) -> Option<(usize, usize)> {
    let mut seen = HashMap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match seen.entry(item) {
            Entry::Occupied(entry) => return Some((*entry.get(), index)),
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
        }
    }
    None
}

pub fn has_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    first_duplicate(items).is_some()
}

/// Adjacent scan for slices that are already sorted, so equal values are
/// neighbours.
pub fn first_duplicate_sorted<T: PartialEq>(items: &[T]) -> Option<(usize, usize)> {
    items
        .windows(2)
        .position(|pair| pair[0] == pair[1])
        .map(|i| (i, i + 1))
}
