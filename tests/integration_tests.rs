use rand::Rng;
use seqsort::prelude::*;

#[test]
fn test_int_array_sorts_with_declared_count() {
    let mut array = IntArray::new([35, 10, 93, 85, 62, 77, 345, 43, 2, 10]);

    sort_run(array.run_start(), 10).unwrap();

    assert_eq!(array.as_slice(), &[2, 10, 10, 35, 43, 62, 77, 85, 93, 345]);
}

#[test]
fn test_char_vector_sorts_by_character_code() {
    let mut chars = vec!['t', 'o', 'y', ' ', 'b', 'o', 'a', 't'];

    sort_by_ref(&mut chars);

    assert_eq!(chars, vec![' ', 'a', 'b', 'o', 'o', 't', 't', 'y']);
}

#[test]
fn test_by_value_leaves_caller_sequence_unchanged() {
    let chars = DEMO_CHARS.to_vec();

    sort_by_value(chars.clone(), |_| ());

    assert_eq!(chars, vec!['t', 'o', 'y', ' ', 'b', 'o', 'a', 't']);
}

#[test]
fn test_by_reference_leaves_caller_sequence_sorted() {
    let mut chars = DEMO_CHARS.to_vec();

    sort_by_ref(&mut chars);

    assert!(is_ascending(&chars));
    assert_ne!(chars, DEMO_CHARS);
}

#[test]
fn test_sorting_twice_is_idempotent() {
    let mut array = IntArray::demo();
    sort_run(array.run_start(), IntArray::num_elements()).unwrap();
    let once = array;

    sort_run(array.run_start(), IntArray::num_elements()).unwrap();
    assert_eq!(array, once);

    let mut chars = DEMO_CHARS.to_vec();
    sort_by_ref(&mut chars);
    let once = chars.clone();
    sort_by_ref(&mut chars);
    assert_eq!(chars, once);
}

#[test]
fn test_empty_sequences() {
    let mut empty: Vec<i32> = Vec::new();
    sort_run(RunStart::new(&mut empty), 0).unwrap();
    assert!(empty.is_empty());

    let mut chars: Vec<char> = Vec::new();
    sort_by_ref(&mut chars);
    assert!(chars.is_empty());

    let seen = sort_by_value(Vec::<char>::new(), |sorted| sorted.len());
    assert_eq!(seen, 0);
}

#[test]
fn test_fuzz_random_runs() {
    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let len = rng.random_range(0..64);
        let mut row: Vec<i32> = (0..len).map(|_| rng.random_range(-500..500)).collect();

        let mut expected = row.clone();
        expected.sort();

        sort_run(RunStart::new(&mut row), len).unwrap();
        assert_eq!(row, expected);
    }
}

#[test]
fn test_fuzz_random_chars() {
    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let len = rng.random_range(0..32);
        let mut row: Vec<char> = (0..len).map(|_| rng.random::<char>()).collect();
        let original = row.clone();

        sort_by_value(row.clone(), |_| ());
        assert_eq!(row, original);

        let mut expected = row.clone();
        expected.sort();
        sort_by_ref(&mut row);
        assert_eq!(row, expected);
    }
}
