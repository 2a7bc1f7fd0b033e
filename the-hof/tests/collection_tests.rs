use the_hof::{
  chunk,
  flat_map,
  group_by,
  partition,
  unique,
  unzip,
  zip,
};

fn owned<T: Clone>(chunks: Vec<&[T]>) -> Vec<Vec<T>> {
  chunks.into_iter().map(<[T]>::to_vec).collect()
}

#[test]
fn test_group_by_length() {
  let words = ["cat", "dog", "bird", "fish", "elephant"];
  let groups = group_by(&words, |w| w.len());

  assert_eq!(groups.len(), 3);
  assert_eq!(groups[&3], vec!["cat", "dog"]);
  assert_eq!(groups[&4], vec!["bird", "fish"]);
  assert_eq!(groups[&8], vec!["elephant"]);
}

#[test]
fn test_group_by_first_letter() {
  let words = ["apple", "banana", "apricot", "blueberry"];
  let groups = group_by(&words, |w| w.as_bytes()[0]);

  let keys: Vec<u8> = groups.keys().copied().collect();
  assert_eq!(keys, vec![b'a', b'b']);
  assert_eq!(groups[&b'a'], vec!["apple", "apricot"]);
  assert_eq!(groups[&b'b'], vec!["banana", "blueberry"]);
}

#[test]
fn test_group_by_parity() {
  let numbers = [1, 2, 3, 4, 5, 6_i32];
  let groups = group_by(&numbers, |n| if n % 2 == 0 { "even" } else { "odd" });

  assert_eq!(groups["even"], vec![2, 4, 6]);
  assert_eq!(groups["odd"], vec![1, 3, 5]);
}

#[test]
fn test_group_by_empty() {
  let empty: [i32; 0] = [];
  assert!(group_by(&empty, |n| *n).is_empty());
}

#[test]
fn test_partition_even_odd() {
  let numbers = [1, 2, 3, 4, 5, 6, 7, 8_i32];
  let (matched, rest) = partition(&numbers, |n| n % 2 == 0);
  assert_eq!(matched, vec![2, 4, 6, 8]);
  assert_eq!(rest, vec![1, 3, 5, 7]);
}

#[test]
fn test_partition_strings_by_length() {
  let words = ["cat", "elephant", "dog", "butterfly"];
  let (matched, rest) = partition(&words, |w| w.len() > 3);
  assert_eq!(matched, vec!["elephant", "butterfly"]);
  assert_eq!(rest, vec!["cat", "dog"]);
}

#[test]
fn test_partition_empty() {
  let empty: [i32; 0] = [];
  let (matched, rest) = partition(&empty, |n| *n > 0);
  assert!(matched.is_empty());
  assert!(rest.is_empty());
}

#[test]
fn test_unique() {
  assert_eq!(unique(&[1, 2, 2, 3, 1, 4, 3, 5]), vec![1, 2, 3, 4, 5]);
  assert_eq!(
    unique(&["apple", "banana", "apple", "cherry", "banana"]),
    vec!["apple", "banana", "cherry"]
  );
  assert_eq!(unique(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
  assert!(unique::<i32>(&[]).is_empty());
}

#[test]
fn test_zip_truncates_to_shorter() {
  let letters = ["a", "b", "c"];
  assert_eq!(zip(&[1, 2, 3], &letters), vec![(1, "a"), (2, "b"), (3, "c")]);
  assert_eq!(zip(&[1, 2, 3, 4, 5], &letters), vec![
    (1, "a"),
    (2, "b"),
    (3, "c")
  ]);
  assert!(zip::<i32, &str>(&[], &[]).is_empty());
}

#[test]
fn test_unzip() {
  let pairs = [(1, "a"), (2, "b"), (3, "c")];
  let (numbers, letters) = unzip(&pairs);
  assert_eq!(numbers, vec![1, 2, 3]);
  assert_eq!(letters, vec!["a", "b", "c"]);

  let (numbers, letters) = unzip::<i32, &str>(&[]);
  assert!(numbers.is_empty());
  assert!(letters.is_empty());
}

#[test]
fn test_flat_map() {
  let words = ["cat", "dog"];
  let chars = flat_map(&words, |w| w.chars().collect::<Vec<_>>());
  assert_eq!(chars, vec!['c', 'a', 't', 'd', 'o', 'g']);

  assert_eq!(flat_map(&[1, 2, 3], |n| [*n, *n]), vec![1, 1, 2, 2, 3, 3]);
  assert!(flat_map(&[1, 2, 3], |_| Vec::<i32>::new()).is_empty());
}

#[test]
fn test_chunk() {
  let input: Vec<i32> = (1..=7).collect();
  assert_eq!(owned(chunk(&input, 2)), vec![
    vec![1, 2],
    vec![3, 4],
    vec![5, 6],
    vec![7]
  ]);

  let input: Vec<i32> = (1..=9).collect();
  assert_eq!(owned(chunk(&input, 3)), vec![
    vec![1, 2, 3],
    vec![4, 5, 6],
    vec![7, 8, 9]
  ]);

  assert_eq!(owned(chunk(&[1, 2, 3], 5)), vec![vec![1, 2, 3]]);
}

#[test]
fn test_chunk_zero_size_is_empty() {
  assert!(chunk(&[1, 2, 3], 0).is_empty());
  assert!(chunk::<i32>(&[], 2).is_empty());
}
