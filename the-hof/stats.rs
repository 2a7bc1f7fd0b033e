//! Aggregates over numeric slices.
//!
//! `sum`, `average`, `min` and `max` return zero for an empty slice, which
//! cannot be told apart from a slice whose answer really is zero. The `try_*`
//! variants report [`Error::Empty`] instead.

use the_seq::Number;

use crate::error::{
  Error,
  Result,
};

/// Sum of all elements. Integer sums wrap on overflow.
pub fn sum<E: Number>(source: &[E]) -> E {
  source.iter().fold(E::ZERO, |acc, value| acc.plus(*value))
}

/// Arithmetic mean as `f64`, or `0.0` for an empty slice.
pub fn average<E: Number>(source: &[E]) -> f64 {
  try_average(source).unwrap_or(0.0)
}

/// Smallest element, or zero for an empty slice.
pub fn min<E: Number>(source: &[E]) -> E {
  try_min(source).unwrap_or(E::ZERO)
}

/// Largest element, or zero for an empty slice.
pub fn max<E: Number>(source: &[E]) -> E {
  try_max(source).unwrap_or(E::ZERO)
}

/// Arithmetic mean, accumulated in `f64`.
pub fn try_average<E: Number>(source: &[E]) -> Result<f64> {
  if source.is_empty() {
    return Err(empty("average"));
  }
  let total: f64 = source.iter().map(|value| value.to_f64()).sum();
  Ok(total / source.len() as f64)
}

/// Smallest element.
///
/// Elements are compared with `<`, so a NaN never replaces the current
/// minimum (it is only returned when it is the first element).
pub fn try_min<E: Number>(source: &[E]) -> Result<E> {
  extremum(source, "min", |candidate, best| candidate < best)
}

/// Largest element. NaN is handled as in [`try_min`].
pub fn try_max<E: Number>(source: &[E]) -> Result<E> {
  extremum(source, "max", |candidate, best| candidate > best)
}

fn extremum<E, F>(source: &[E], operation: &'static str, replaces: F) -> Result<E>
where
  E: Number,
  F: Fn(E, E) -> bool,
{
  let (first, rest) = source.split_first().ok_or_else(|| empty(operation))?;
  Ok(rest.iter().fold(*first, |best, value| {
    if replaces(*value, best) { *value } else { best }
  }))
}

fn empty(operation: &'static str) -> Error {
  tracing::debug!("{operation} requested on an empty collection");
  Error::Empty { operation }
}
