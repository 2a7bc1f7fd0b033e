//! Function combinators.

use std::rc::Rc;

/// Right-to-left composition: `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
  F: Fn(B) -> C,
  G: Fn(A) -> B,
{
  move |x| f(g(x))
}

/// Left-to-right composition: `pipe(f, g)(x) == g(f(x))`.
pub fn pipe<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
  F: Fn(A) -> B,
  G: Fn(B) -> C,
{
  move |x| g(f(x))
}

/// Turn a two-argument function into a chain of one-argument functions.
///
/// `curry(f)(a)(b) == f(a, b)`. The first argument is cloned on every call of
/// the returned inner function, so a partially applied function can be called
/// any number of times.
pub fn curry<'f, A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C + 'f>
where
  F: Fn(A, B) -> C + 'f,
  A: Clone + 'f,
  B: 'f,
  C: 'f,
{
  let f = Rc::new(f);
  move |a: A| {
    let f = Rc::clone(&f);
    Box::new(move |b: B| f(a.clone(), b)) as Box<dyn Fn(B) -> C + 'f>
  }
}
