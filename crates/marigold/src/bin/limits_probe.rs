//! # Limits Probe
//!
//! Replays a sequence of spans into an interval set and prints the set
//! after every insert.
//!
//! Usage: `limits_probe [config.toml] [start:end ...]`
//!
//! The set capacity comes from `max_spans` in the config (default 120).
//! With no spans given, the demo sequence `1:50 45:100 102:150` is used.

use std::process::ExitCode;

use marigold::{parse_span, replay, Interval, IntervalSet, LimitsResult, ScanConfig, DEMO_SPANS};

fn run() -> LimitsResult<()> {
    let mut args = std::env::args().skip(1).peekable();

    let config = match args.next_if(|arg| arg.ends_with(".toml")) {
        Some(path) => ScanConfig::from_toml_file(path)?,
        None => ScanConfig::default(),
    };

    let mut spans = args.map(|arg| parse_span(&arg)).collect::<LimitsResult<Vec<_>>>()?;
    if spans.is_empty() {
        spans = DEMO_SPANS
            .iter()
            .map(|&span| Interval::try_from(span))
            .collect::<LimitsResult<Vec<_>>>()?;
    }

    let mut set = IntervalSet::new(config.max_spans)?;

    println!("=== LIMITS PROBE ===");
    println!("capacity: {}", set.capacity());

    let rejected = replay(&mut set, &spans, |span, result, set| {
        println!("---");
        match result {
            Ok(()) => println!("insert {span}"),
            Err(e) => println!("insert {span}: {e}"),
        }
        for interval in set {
            println!("  {interval}");
        }
        println!("length: {} / {}", set.len(), set.capacity());
    });

    println!("---");
    println!("covered points: {}", set.covered_len());
    println!("rejected: {rejected}");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("limits_probe: {e}");
            ExitCode::FAILURE
        }
    }
}
