/// Learns primality on a random 75/25 split of all bytes and reports the
/// misses on the held-out quarter.
///
/// Architecture: 8 → 16 → 8 → 1 (sigmoid)
///
/// Run with:
///   cargo run --example prime --release
use byte_mlp::{evaluate, ByteDataset, Network, TargetFunction, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> byte_mlp::Result<()> {
    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(2024);
    let (train, test) = ByteDataset::all(TargetFunction::IsPrime).split(0.75, &mut rng)?;

    let mut network =
        Network::new(&[8, 16, 8, 1])?.with_config(TrainConfig::new(0.8, 2000, 1e-4));
    network.randomize_weights_with(&mut rng);

    let report = network.train(&train.inputs, &train.outputs)?;
    println!(
        "Trained {} epochs on {} bytes, final error {:.6}",
        report.epoch_count(),
        train.len(),
        report.final_error()
    );

    let eval = evaluate(&mut network, &test.inputs, TargetFunction::IsPrime);
    for p in eval.predictions.iter().filter(|p| !p.is_match()) {
        println!("miss: {} expected {} got {}", p.input, p.expected, p.predicted);
    }
    println!("{} / {} held-out bytes correct", eval.matches, eval.predictions.len());
    Ok(())
}
