#![no_main]

use libfuzzer_sys::fuzz_target;
use the_hof::{
  Seq,
  State,
  decide,
  filter,
  map,
  square,
};

// First byte picks the stop point, the rest is the source slice.
fuzz_target!(|data: &[u8]| {
  let Some((&stop_at, source)) = data.split_first() else {
    return;
  };
  let stop_at = usize::from(stop_at);

  let mut calls = 0usize;
  let mut seen = Vec::new();
  let state = map(source, |b| {
    calls += 1;
    u32::from(*b) + 1
  })
  .drive(|v| {
    seen.push(v);
    decide(seen.len() <= stop_at)
  });
  let expected: Vec<u32> = source
    .iter()
    .map(|b| u32::from(*b) + 1)
    .take(stop_at + 1)
    .collect();
  assert_eq!(seen, expected);
  assert_eq!(calls, seen.len());
  assert_eq!(state == State::Stopped, source.len() > stop_at);

  let mut kept = Vec::new();
  let state = filter(source, |b| b % 3 == 0).drive(|b| {
    kept.push(*b);
    decide(kept.len() <= stop_at)
  });
  let expected: Vec<u8> = source
    .iter()
    .copied()
    .filter(|b| b % 3 == 0)
    .take(stop_at + 1)
    .collect();
  assert_eq!(kept, expected);
  if state == State::Exhausted {
    assert!(kept.len() <= stop_at);
  }

  let squares = square(source).drain();
  assert!(squares.iter().zip(source).all(|(s, b)| *s == b.wrapping_mul(*b)));
});
