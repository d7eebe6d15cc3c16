//! Trains a byte network on one target function and checks it on random
//! bytes.
//!
//!   cargo run -- [spec.json]
//!
//! Without an argument the built-in is-prime run is used. Set `RUST_LOG=debug`
//! to see per-epoch tracing.

use std::process::ExitCode;

use byte_mlp::{evaluate, sample_inputs, NetworkSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> byte_mlp::Result<()> {
    let spec = match std::env::args().nth(1) {
        Some(path) => NetworkSpec::load_json(&path)?,
        None => NetworkSpec::default(),
    };
    let mut rng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let data = spec.dataset()?;
    let mut network = spec.build();
    network.randomize_weights_with(&mut rng);

    println!("=== Learning {} ({:?}) ===", spec.name, spec.topology.widths());
    let report = network.train(&data.inputs, &data.outputs)?;
    for stats in &report.epochs {
        println!("{}: {}", stats.epoch, stats.total_error);
    }
    println!("stopped: {:?} after {} epoch(s)", report.stop_reason, report.epoch_count());

    let summary = network.weight_summary();
    println!(
        "weights: {} (min {:.3}, max {:.3}, mean {:.3})",
        summary.count, summary.min, summary.max, summary.mean
    );

    println!("\n======= Test =======");
    let samples = sample_inputs(&mut rng, spec.test_samples);
    let eval = evaluate(&mut network, &samples, spec.target);
    for p in &eval.predictions {
        let sign = if p.is_match() { "=" } else { "!=" };
        println!("{}: {} {} {}", p.input, p.expected, sign, p.predicted);
    }
    println!("\n{} correct out of {}", eval.matches, eval.predictions.len());
    Ok(())
}
