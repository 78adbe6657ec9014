use lsdsort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m_integers() {
    let count = 1_000_000;
    println!("Generating {} random integers...", count);

    let mut rng = rand::rng();
    let input: Vec<u64> = (0..count)
        .map(|_| rng.random_range(0..=10_000_000))
        .collect();

    println!("Sorting {} integers...", count);
    let start = Instant::now();
    let sorted = radix_sort(input, IntegerStrategy::new()).unwrap();
    let duration = start.elapsed();
    println!("Sorted 1M integers in {:?}", duration);

    assert_eq!(sorted.len(), count);
    check_sorted(&sorted).unwrap();
}

#[test]
fn test_sort_100k_strings() {
    let count = 100_000;
    let mut rng = rand::rng();
    let input: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(4..16);
            (0..len)
                .map(|_| rng.random_range(b' '..=b'~') as char)
                .collect()
        })
        .collect();

    let start = Instant::now();
    let sorted = radix_sort(input, TextStrategy::new()).unwrap();
    println!("Sorted 100K strings in {:?}", start.elapsed());

    assert_eq!(sorted.len(), count);
    check_sorted(&sorted).unwrap();
}

#[test]
#[ignore]
fn test_sort_100m_integers() {
    // WARNING: needs several GB of RAM.
    // 100M * (8 bytes item + 8 bytes digit) plus buckets holding the items = ~2.4GB
    let count = 100_000_000;
    let mut rng = rand::rng();
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    let start = Instant::now();
    let sorted = radix_sort(input, IntegerStrategy::new()).unwrap();
    println!("Sorted 100M integers in {:?}", start.elapsed());

    assert_eq!(sorted.len(), count);
    assert!(lsdsort::verify::is_sorted(&sorted));
}
