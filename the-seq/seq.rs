//! The consumer protocol shared by every lazy sequence.

use std::ops::ControlFlow;

/// What a consumer wants after receiving a value.
///
/// `Continue(())` asks for the next value, `Break(())` stops production.
pub type Decision = ControlFlow<()>;

/// Ask the producer for the next value.
pub const CONTINUE: Decision = ControlFlow::Continue(());

/// Stop production immediately.
pub const STOP: Decision = ControlFlow::Break(());

/// Convert a "keep going?" flag into a [`Decision`].
#[inline]
pub fn decide(keep_going: bool) -> Decision {
  if keep_going { CONTINUE } else { STOP }
}

/// Receives the values of a sequence, one at a time.
///
/// Closures are usually handed straight to [`Seq::drive`]. Implement this
/// trait for named consumers that carry their own state and drive them with
/// [`Seq::drive_into`]. It is also implemented for any
/// `FnMut(T) -> Decision`.
pub trait Consumer<T> {
  /// Take one produced value and decide whether production continues.
  fn accept(&mut self, value: T) -> Decision;
}

impl<T, F> Consumer<T> for F
where
  F: FnMut(T) -> Decision,
{
  #[inline]
  fn accept(&mut self, value: T) -> Decision {
    (self)(value)
  }
}

/// Lifecycle of a sequence.
///
/// ```text
/// Idle -> Producing -> Stopped
///                   -> Exhausted
/// ```
///
/// A sequence value that has not been driven yet is `Idle`. It is `Producing`
/// while [`Seq::drive`] runs, and `drive` returns the terminal state it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
  Idle,
  Producing,
  /// The consumer returned [`STOP`].
  Stopped,
  /// Every source element was visited.
  Exhausted,
}

impl State {
  pub fn is_terminal(self) -> bool {
    matches!(self, Self::Stopped | Self::Exhausted)
  }
}

/// A lazy, one-shot production of values.
///
/// # Usage constraint
///
/// A sequence is driven once. `drive` takes `self` by value, and the producers
/// in this crate are not `Clone`, so a driven sequence cannot be restarted.
/// Build a new sequence from the same source to traverse it again.
pub trait Seq: Sized {
  type Item;

  /// Produce values into `consumer` until it stops or the source runs out.
  ///
  /// Returns [`State::Stopped`] if the consumer broke out (even on the very
  /// last value), [`State::Exhausted`] otherwise.
  fn drive<F>(self, consumer: F) -> State
  where
    F: FnMut(Self::Item) -> Decision;

  /// Drive into a named [`Consumer`], leaving it with the caller afterwards.
  fn drive_into<C>(self, consumer: &mut C) -> State
  where
    C: Consumer<Self::Item>,
  {
    self.drive(|value| consumer.accept(value))
  }

  /// Drive to exhaustion and collect every value.
  fn drain(self) -> Vec<Self::Item> {
    let mut out = Vec::new();
    self.drive(|value| {
      out.push(value);
      CONTINUE
    });
    out
  }
}
