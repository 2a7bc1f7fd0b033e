//! Folds, traversal and search over a slice.

/// Fold every element into an accumulator, starting from `init`.
///
/// An empty slice returns `init` unchanged.
pub fn reduce<E, T, F>(source: &[E], mut f: F, init: T) -> T
where
  F: FnMut(T, &E) -> T,
{
  let mut acc = init;
  for value in source {
    acc = f(acc, value);
  }
  acc
}

/// Run `f` on every element for its side effects.
pub fn for_each<E, F>(source: &[E], f: F)
where
  F: FnMut(&E),
{
  source.iter().for_each(f);
}

/// First element satisfying `predicate`.
pub fn find<E, P>(source: &[E], mut predicate: P) -> Option<&E>
where
  P: FnMut(&E) -> bool,
{
  source.iter().find(|value| predicate(value))
}

/// Whether any element satisfies `predicate`. `false` for an empty slice.
pub fn some<E, P>(source: &[E], predicate: P) -> bool
where
  P: FnMut(&E) -> bool,
{
  source.iter().any(predicate)
}

/// Whether every element satisfies `predicate`. `true` for an empty slice.
pub fn every<E, P>(source: &[E], predicate: P) -> bool
where
  P: FnMut(&E) -> bool,
{
  source.iter().all(predicate)
}
