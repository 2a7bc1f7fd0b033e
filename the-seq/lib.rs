//! # the-seq
//!
//! Lazy, single-pass sequences over borrowed slices.
//!
//! A sequence does no work until it is driven. Driving hands every produced
//! value to a consumer, and the consumer answers with a [`Decision`]: keep
//! going, or stop right now. Once a consumer stops, the producer returns
//! without touching the remaining source elements.
//!
//! ## Core Concepts
//!
//! - **Consumer**: anything implementing [`Consumer`], usually a closure
//!   `FnMut(T) -> Decision`
//! - **Sequence**: a [`Seq`] value; [`Seq::drive`] consumes it, so each
//!   sequence is driven at most once
//! - **Producers**: [`map`], [`filter`], [`square`] and [`cube`]
//! - **Numbers**: [`Number`] restricts [`square`]/[`cube`] to integer and
//!   floating-point types
//!
//! ## Basic Usage
//!
//! ```rust
//! use the_seq::{
//!   CONTINUE,
//!   Seq,
//!   State,
//!   map,
//! };
//!
//! let words = ["alpha", "beta", "gamma"];
//! let mut lengths = Vec::new();
//!
//! let state = map(&words, |word| word.len()).drive(|len| {
//!   lengths.push(len);
//!   CONTINUE
//! });
//!
//! assert_eq!(lengths, vec![5, 4, 5]);
//! assert_eq!(state, State::Exhausted);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use the_seq::{
//!   Seq,
//!   State,
//!   decide,
//!   filter,
//! };
//!
//! let numbers: Vec<i32> = (1..=10).collect();
//! let mut evens = Vec::new();
//!
//! let state = filter(&numbers, |n| n % 2 == 0).drive(|n| {
//!   evens.push(*n);
//!   decide(evens.len() < 2)
//! });
//!
//! assert_eq!(evens, vec![2, 4]);
//! assert_eq!(state, State::Stopped);
//! ```
//!
//! ## Numeric Producers
//!
//! ```rust
//! use the_seq::{
//!   Seq,
//!   cube,
//!   square,
//! };
//!
//! assert_eq!(square(&[-4, 0, 69, 12]).drain(), vec![16, 0, 4761, 144]);
//! assert_eq!(cube(&[1.5_f64, -2.0]).drain(), vec![3.375, -8.0]);
//! assert!(square::<u8>(&[]).drain().is_empty());
//! ```

pub mod num;
pub mod seq;
pub mod transform;

pub use num::Number;
pub use seq::{
  CONTINUE,
  Consumer,
  Decision,
  STOP,
  Seq,
  State,
  decide,
};
pub use transform::{
  Cube,
  Filter,
  Map,
  Square,
  cube,
  filter,
  map,
  square,
};
