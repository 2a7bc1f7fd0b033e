//! Grouping, splitting and reshaping slices.

use std::hash::Hash;

use foldhash::fast::RandomState;
use hashbrown::HashSet;
use indexmap::IndexMap;

/// Elements grouped by key, with keys in order of first appearance.
pub type Groups<K, E> = IndexMap<K, Vec<E>, RandomState>;

/// Cluster elements by the key `key_fn` computes for them.
///
/// Each group keeps its elements in source order, and the groups themselves
/// are ordered by the first element that produced their key.
pub fn group_by<E, K, F>(source: &[E], mut key_fn: F) -> Groups<K, E>
where
  E: Clone,
  K: Eq + Hash,
  F: FnMut(&E) -> K,
{
  let mut groups = Groups::with_hasher(RandomState::default());
  for value in source {
    groups
      .entry(key_fn(value))
      .or_insert_with(Vec::new)
      .push(value.clone());
  }
  groups
}

/// Split into `(matched, rest)`, both in source order.
pub fn partition<E, P>(source: &[E], mut predicate: P) -> (Vec<E>, Vec<E>)
where
  E: Clone,
  P: FnMut(&E) -> bool,
{
  let mut matched = Vec::new();
  let mut rest = Vec::new();
  for value in source {
    if predicate(value) {
      matched.push(value.clone());
    } else {
      rest.push(value.clone());
    }
  }
  (matched, rest)
}

/// Drop repeated elements, keeping the first occurrence of each.
pub fn unique<E>(source: &[E]) -> Vec<E>
where
  E: Eq + Hash + Clone,
{
  let mut seen = HashSet::with_capacity_and_hasher(source.len(), RandomState::default());
  source
    .iter()
    .filter(|value| seen.insert(*value))
    .cloned()
    .collect()
}

/// Pair elements up by position. The result is as long as the shorter input.
pub fn zip<A, B>(a: &[A], b: &[B]) -> Vec<(A, B)>
where
  A: Clone,
  B: Clone,
{
  a.iter().cloned().zip(b.iter().cloned()).collect()
}

/// Split pairs back into two vectors.
pub fn unzip<A, B>(pairs: &[(A, B)]) -> (Vec<A>, Vec<B>)
where
  A: Clone,
  B: Clone,
{
  pairs.iter().cloned().unzip()
}

/// Map every element to a collection and concatenate the results.
pub fn flat_map<E, U, I, F>(source: &[E], f: F) -> Vec<U>
where
  I: IntoIterator<Item = U>,
  F: FnMut(&E) -> I,
{
  source.iter().flat_map(f).collect()
}

/// Split into consecutive chunks of `size` elements.
///
/// The last chunk is shorter when `size` does not divide the length. A `size`
/// of zero yields no chunks at all. Chunks borrow from `source`.
pub fn chunk<E>(source: &[E], size: usize) -> Vec<&[E]> {
  if size == 0 {
    return Vec::new();
  }
  source.chunks(size).collect()
}
