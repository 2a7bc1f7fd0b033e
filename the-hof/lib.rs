//! # the-hof
//!
//! Higher-order helpers for in-memory collections.
//!
//! The lazy producers ([`map`], [`filter`], [`square`], [`cube`]) come from
//! [`the_seq`] and are re-exported here. Everything else in this crate is
//! eager: it walks a whole slice and hands back a materialized result or a
//! plain function.
//!
//! ## Lazy and Eager Together
//!
//! ```rust
//! use the_hof::{
//!   Seq,
//!   chunk,
//!   filter,
//!   reduce,
//!   sum,
//! };
//!
//! let readings = [3, 8, 1, 12, 7, 10];
//!
//! // Lazy: only values above the threshold reach the consumer.
//! let high: Vec<i32> = filter(&readings, |r| *r > 5).drain().into_iter().copied().collect();
//! assert_eq!(high, vec![8, 12, 7, 10]);
//!
//! // Eager: fold, aggregate and split a materialized slice.
//! assert_eq!(reduce(&high, |acc, r| acc.max(*r), 0_i32), 12);
//! assert_eq!(sum(&high), 37);
//! assert_eq!(chunk(&high, 3), vec![&[8, 12, 7][..], &[10][..]]);
//! ```
//!
//! ## Composition
//!
//! ```rust
//! use the_hof::{
//!   compose,
//!   curry,
//!   pipe,
//! };
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose(double, add_one)(5), 12);
//! assert_eq!(pipe(add_one, double)(5), 12);
//!
//! let add = curry(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//! ```
//!
//! ## Empty Input
//!
//! [`min`], [`max`], [`sum`] and [`average`] return zero for an empty slice.
//! Use [`try_min`], [`try_max`] or [`try_average`] when an empty slice must be
//! told apart from a real zero.
//!
//! ```rust
//! use the_hof::{
//!   Error,
//!   min,
//!   try_min,
//! };
//!
//! let empty: [i64; 0] = [];
//! assert_eq!(min(&empty), 0);
//! assert_eq!(try_min(&empty), Err(Error::Empty { operation: "min" }));
//! ```

pub mod collection;
pub mod compose;
pub mod error;
pub mod fold;
pub mod stats;

pub use collection::{
  Groups,
  chunk,
  flat_map,
  group_by,
  partition,
  unique,
  unzip,
  zip,
};
pub use compose::{
  compose,
  curry,
  pipe,
};
pub use error::{
  Error,
  Result,
};
pub use fold::{
  every,
  find,
  for_each,
  reduce,
  some,
};
pub use stats::{
  average,
  max,
  min,
  sum,
  try_average,
  try_max,
  try_min,
};
pub use the_seq;
pub use the_seq::{
  CONTINUE,
  Consumer,
  Cube,
  Decision,
  Filter,
  Map,
  Number,
  STOP,
  Seq,
  Square,
  State,
  cube,
  decide,
  filter,
  map,
  square,
};
