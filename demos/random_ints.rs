//! Sorts 100 000 random integers and checks the result.
//!
//! Run with `RUST_LOG=lsdsort=debug cargo run --release --example random_ints`.

use lsdsort::prelude::*;
use rand::Rng;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lsdsort=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), RadixError> {
    init_logger();

    println!("Generating values.");
    let mut rng = rand::rng();
    let values: Vec<u64> = (0..100_000)
        .map(|_| rng.random_range(0..=10_000_000))
        .collect();

    println!("Sorting.");
    let sorted = radix_sort(values, IntegerStrategy::new())?;
    println!("Done sorting.");

    print!("Checking... ");
    match check_sorted(&sorted) {
        Ok(()) => println!("sorted"),
        Err(err) => {
            println!("NOT sorted");
            println!("{err}");
        }
    }

    Ok(())
}
