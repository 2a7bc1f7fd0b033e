//! Run with `RUST_LOG=trace cargo run -p the-hof --example word_stats` to see
//! the sequence lifecycle events.

use the_hof::{
  Seq,
  average,
  chunk,
  decide,
  filter,
  group_by,
  map,
  pipe,
  try_max,
  unique,
};

const TEXT: &str = "the quick brown fox jumps over the lazy dog while the cat sleeps";

fn main() {
  env_logger::init();

  let words: Vec<&str> = TEXT.split_whitespace().collect();
  let lengths = map(&words, |w| w.len()).drain();

  log::info!("{} words, {} distinct", words.len(), unique(&words).len());
  println!("average length: {:.2}", average(&lengths));
  match try_max(&lengths) {
    Ok(longest) => println!("longest word: {longest} letters"),
    Err(err) => println!("{err}"),
  }

  for (len, group) in group_by(&words, |w| w.len()) {
    println!("{len}: {}", group.join(" "));
  }

  // Stop at the first three long words.
  let mut long = Vec::new();
  filter(&words, |w| w.len() > 4).drive(|w| {
    long.push(*w);
    decide(long.len() < 3)
  });
  println!("first long words: {long:?}");

  let shout = pipe(|s: String| s.to_uppercase(), |s: String| format!("{s}!"));
  for line in chunk(&words, 4) {
    println!("{}", shout(line.join(" ")));
  }
}
