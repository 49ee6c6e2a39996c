//! Parse a list of numbers, report the bad ones, and sum the rest.
//!
//! Run with `RUST_LOG=lazyseq=trace cargo run --example parse_numbers`.

use anyhow::Result;
use lazyseq::{from_slice, Iter, NextError, Slice};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = vec!["12", "7", "seven", "30", "-4", "4x"];
    let mut parsed = from_slice(inputs.clone()).try_map(|s: &str| s.parse::<i64>());

    let mut good = Vec::new();
    let mut position = 0;
    loop {
        match parsed.pull() {
            Ok(value) => good.push(value),
            Err(NextError::Exhausted) => break,
            Err(NextError::Failed(err)) => {
                warn!(position, input = inputs[position], %err, "skipping unparsable input");
            }
        }
        position += 1;
    }

    let total = Slice::new(good.clone())
        .filter(|n| *n > 0)
        .fold(0i64, |acc, n| acc + n)?;

    info!(parsed = good.len(), total, "summed positive values");
    println!("parsed {} of {} inputs; positive total = {}", good.len(), inputs.len(), total);

    Ok(())
}
