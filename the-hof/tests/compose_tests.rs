use the_hof::{
  compose,
  curry,
  pipe,
};

#[test]
fn test_compose_int_functions() {
  let add_one = |x: i32| x + 1;
  let multiply_two = |x: i32| x * 2;
  // (5 + 1) * 2
  assert_eq!(compose(multiply_two, add_one)(5), 12);
}

#[test]
fn test_compose_string_functions() {
  let add_exclamation = |s: String| s + "!";
  let to_upper = |s: String| format!("UPPER:{s}");
  let composed = compose(to_upper, add_exclamation);
  assert_eq!(composed("hello".to_string()), "UPPER:hello!");
}

#[test]
fn test_pipe_int_functions() {
  let add_one = |x: i32| x + 1;
  let multiply_two = |x: i32| x * 2;
  assert_eq!(pipe(add_one, multiply_two)(5), 12);
}

#[test]
fn test_pipe_string_functions() {
  let add_exclamation = |s: String| s + "!";
  let to_upper = |s: String| format!("UPPER:{s}");
  let piped = pipe(add_exclamation, to_upper);
  assert_eq!(piped("hello".to_string()), "UPPER:hello!");
}

#[test]
fn test_compose_and_pipe_agree_when_flipped() {
  let f = |x: i64| x * 3;
  let g = |x: i64| x - 7;
  for x in -10..10 {
    assert_eq!(compose(f, g)(x), f(g(x)));
    assert_eq!(pipe(f, g)(x), g(f(x)));
    assert_eq!(compose(g, f)(x), pipe(f, g)(x));
  }
}

#[test]
fn test_curry_add() {
  let add_five = curry(|a: i32, b: i32| a + b)(5);
  assert_eq!(add_five(3), 8);
}

#[test]
fn test_curry_string_concat() {
  let concat = curry(|a: String, b: &str| a + b);
  let add_hello = concat("Hello, ".to_string());
  assert_eq!(add_hello("World!"), "Hello, World!");
}

#[test]
fn test_curry_multiply() {
  let double = curry(|a: f64, b: f64| a * b)(2.0);
  assert!((double(3.5) - 7.0).abs() < 1e-9);
}
