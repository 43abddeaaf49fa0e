use rand::Rng;
use triosort::prelude::*;

#[test]
fn test_empty() {
    let mut data: Vec<i32> = vec![];
    sort(&mut data);
    assert!(data.is_empty());
}

#[test]
fn test_single_element() {
    let mut data = vec![42];
    sort(&mut data);
    assert_eq!(data, vec![42]);
}

#[test]
fn test_two_elements_sorted() {
    let mut data = vec![1, 2];
    sort(&mut data);
    assert_eq!(data, vec![1, 2]);
}

#[test]
fn test_two_elements_unsorted() {
    let mut data = vec![2, 1];
    sort(&mut data);
    assert_eq!(data, vec![1, 2]);
}

#[test]
fn test_already_sorted() {
    let mut data = vec![1, 2, 3, 4, 5];
    sort(&mut data);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_reverse_sorted() {
    let mut data = vec![5, 4, 3, 2, 1];
    sort(&mut data);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_all_equal() {
    let mut data = vec![3, 3, 3, 3, 3];
    sort(&mut data);
    assert_eq!(data, vec![3, 3, 3, 3, 3]);
}

#[test]
fn test_random_small() {
    let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
    sort(&mut data);
    assert_eq!(data, vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
}

#[test]
fn test_nearly_sorted() {
    // One transposition away from sorted.
    let mut data = vec![1, 2, 3, 5, 4, 6, 7, 8, 9, 10];
    sort(&mut data);
    assert_eq!(data, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_large_value_range() {
    let mut data = vec![1_000_000, 1, 500_000, 250_000, 750_000];
    sort(&mut data);
    assert_eq!(data, vec![1, 250_000, 500_000, 750_000, 1_000_000]);
}

#[test]
fn test_negative_numbers() {
    let mut data = vec![-5, 3, -1, 0, -3, 2];
    sort(&mut data);
    assert_eq!(data, vec![-5, -3, -1, 0, 2, 3]);
}

#[test]
fn test_one_outlier_among_equals() {
    let mut data = vec![42; 1000];
    data[500] = 1;
    sort(&mut data);

    assert_eq!(data[0], 1);
    assert!(data[1..].iter().all(|&x| x == 42));
}

#[test]
fn test_strings() {
    let mut data = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
        "apricot".to_string(),
    ];
    sort(&mut data);

    assert_eq!(data, vec!["apple", "apricot", "banana", "cherry", "date"]);
}

#[test]
fn test_strings_with_duplicates() {
    let mut data = vec!["b", "a", "c", "a", "b"];
    sort(&mut data);
    assert_eq!(data, vec!["a", "a", "b", "b", "c"]);
}

#[test]
fn test_custom_comparator_descending() {
    let mut data = vec![1, 5, 3, 9, 2];
    sort_with(&mut data, |a, b| b < a);
    assert_eq!(data, vec![9, 5, 3, 2, 1]);
}

#[test]
fn test_custom_comparator_abs() {
    let mut data = vec![-5i32, 3, -1, 4, -2];
    sort_with(&mut data, |a, b| a.abs() < b.abs());

    // Any permutation with non-decreasing absolute values is acceptable.
    assert!(data.windows(2).all(|w| w[0].abs() <= w[1].abs()));
}

#[test]
fn test_sort_by_key_age() {
    struct Person {
        name: &'static str,
        age: u32,
    }

    let mut people = vec![
        Person {
            name: "Alice",
            age: 30,
        },
        Person {
            name: "Bob",
            age: 25,
        },
        Person {
            name: "Charlie",
            age: 35,
        },
        Person {
            name: "David",
            age: 20,
        },
    ];

    sort_by_key(&mut people, |p| p.age);

    let order: Vec<_> = people.iter().map(|p| (p.name, p.age)).collect();
    assert_eq!(
        order,
        vec![
            ("David", 20),
            ("Bob", 25),
            ("Alice", 30),
            ("Charlie", 35)
        ]
    );
}

#[test]
fn test_sort_pairs_by_second() {
    let mut data = vec![("b", 2), ("a", 3), ("c", 1)];
    sort_by_key(&mut data, |pair| pair.1);
    assert_eq!(data, vec![("c", 1), ("b", 2), ("a", 3)]);
}

#[test]
fn test_sort_by_key_descending() {
    let mut data = vec![("b", 2), ("a", 3), ("c", 1)];
    sort_by_key_with(&mut data, |pair| pair.1, |x, y| y < x);
    assert_eq!(data, vec![("a", 3), ("b", 2), ("c", 1)]);
}

#[test]
fn test_detection_disabled_sorted() {
    let mut data = vec![1, 2, 3, 4, 5];
    sort_with_detect(&mut data, |a, b| a < b, false);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_detection_disabled_reverse() {
    let mut data = vec![5, 4, 3, 2, 1];
    sort_with_detect(&mut data, |a, b| a < b, false);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_detection_disabled_large_reverse() {
    // Large enough to take the introsort path rather than insertion sort.
    let mut data: Vec<i64> = (0..10_000).rev().collect();
    sort_with_detect(&mut data, |a, b| a < b, false);
    assert_eq!(data, (0..10_000).collect::<Vec<_>>());
}

#[test]
fn test_unstable_sort_keys_only() {
    // Equal keys may be reordered; only the key sequence is checked.
    struct Item {
        key: i32,
        #[allow(dead_code)]
        id: i32,
    }

    let mut data = vec![
        Item { key: 3, id: 1 },
        Item { key: 1, id: 2 },
        Item { key: 3, id: 3 },
        Item { key: 2, id: 4 },
        Item { key: 1, id: 5 },
    ];

    sort_with(&mut data, |a, b| a.key < b.key);

    let keys: Vec<_> = data.iter().map(|item| item.key).collect();
    assert_eq!(keys, vec![1, 1, 2, 3, 3]);
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..500);
        let mut data: Vec<i64> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();

        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_random_strings() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let count = rng.random_range(0..200);
        let mut data: Vec<String> = (0..count)
            .map(|_| {
                let len = rng.random_range(0..12);
                (0..len).map(|_| rng.random_range('a'..='f')).collect()
            })
            .collect();

        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fuzz_random_by_key() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let len = rng.random_range(0..300);
        let mut data: Vec<(u8, u32)> = (0..len)
            .map(|_| (rng.random_range(0..8), rng.random::<u32>()))
            .collect();

        sort_by_key(&mut data, |pair| pair.0);

        assert!(data.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
