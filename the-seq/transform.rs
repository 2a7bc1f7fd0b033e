//! Element-wise producers: map, filter, square and cube.

use tracing::trace;

use crate::{
  num::Number,
  seq::{
    Decision,
    Seq,
    State,
  },
};

/// Lazily applies a function to every element of a slice.
///
/// Created by [`map`]. The function runs only when a value is pulled, so a
/// consumer that stops after `k` values causes exactly `k` calls.
#[must_use = "sequences do nothing unless driven"]
pub struct Map<'a, E, F> {
  source:    &'a [E],
  transform: F,
}

/// Lazily keeps the elements of a slice that satisfy a predicate.
///
/// Created by [`filter`]. Rejected elements are skipped without reaching the
/// consumer.
#[must_use = "sequences do nothing unless driven"]
pub struct Filter<'a, E, P> {
  source:    &'a [E],
  predicate: P,
}

/// [`Map`] with the fixed transform `v * v`.
pub type Square<'a, E> = Map<'a, E, fn(&E) -> E>;

/// [`Map`] with the fixed transform `v * v * v`.
pub type Cube<'a, E> = Map<'a, E, fn(&E) -> E>;

pub fn map<'a, E, T, F>(source: &'a [E], transform: F) -> Map<'a, E, F>
where
  F: FnMut(&'a E) -> T,
{
  Map { source, transform }
}

pub fn filter<'a, E, P>(source: &'a [E], predicate: P) -> Filter<'a, E, P>
where
  P: FnMut(&E) -> bool,
{
  Filter { source, predicate }
}

/// Square every element. See [`Number`] for overflow behavior.
pub fn square<E: Number>(source: &[E]) -> Square<'_, E> {
  map(source, squared::<E> as fn(&E) -> E)
}

/// Cube every element. See [`Number`] for overflow behavior.
pub fn cube<E: Number>(source: &[E]) -> Cube<'_, E> {
  map(source, cubed::<E> as fn(&E) -> E)
}

fn squared<E: Number>(value: &E) -> E {
  value.times(*value)
}

fn cubed<E: Number>(value: &E) -> E {
  value.times(*value).times(*value)
}

impl<'a, E, T, F> Seq for Map<'a, E, F>
where
  F: FnMut(&'a E) -> T,
{
  type Item = T;

  fn drive<C>(self, mut consumer: C) -> State
  where
    C: FnMut(T) -> Decision,
  {
    let Self {
      source,
      mut transform,
    } = self;
    trace!(op = "map", len = source.len(), "sequence producing");

    for (index, value) in source.iter().enumerate() {
      if consumer(transform(value)).is_break() {
        return stopped("map", index);
      }
    }
    exhausted("map", source.len())
  }
}

impl<'a, E, P> Seq for Filter<'a, E, P>
where
  P: FnMut(&E) -> bool,
{
  type Item = &'a E;

  fn drive<C>(self, mut consumer: C) -> State
  where
    C: FnMut(&'a E) -> Decision,
  {
    let Self {
      source,
      mut predicate,
    } = self;
    trace!(op = "filter", len = source.len(), "sequence producing");

    for (index, value) in source.iter().enumerate() {
      if predicate(value) && consumer(value).is_break() {
        return stopped("filter", index);
      }
    }
    exhausted("filter", source.len())
  }
}

fn stopped(op: &'static str, index: usize) -> State {
  trace!(op, index, "sequence stopped");
  State::Stopped
}

fn exhausted(op: &'static str, len: usize) -> State {
  trace!(op, len, "sequence exhausted");
  State::Exhausted
}
