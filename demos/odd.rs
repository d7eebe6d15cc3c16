/// Learns "input is odd" over all 256 bytes.
///
/// Architecture: 8 → 12 → 1 (sigmoid)
/// Learning rate: 0.8
/// Stops after 500 epochs or once total error ≤ 1e-5.
///
/// Run with:
///   cargo run --example odd --release
use byte_mlp::{evaluate, ByteDataset, Network, TargetFunction, TrainConfig};

fn main() -> byte_mlp::Result<()> {
    tracing_subscriber::fmt::init();

    let data = ByteDataset::all(TargetFunction::IsOdd);
    let mut network = Network::new(&[8, 12, 1])?.with_config(TrainConfig::new(0.8, 500, 1e-5));
    network.randomize_weights();

    let report = network.train(&data.inputs, &data.outputs)?;
    for stats in report.epochs.iter().step_by(50) {
        println!("Epoch {}: total error = {:.6}", stats.epoch, stats.total_error);
    }
    println!(
        "Stopped after {} epochs ({:?}), final error {:.6}",
        report.epoch_count(),
        report.stop_reason,
        report.final_error()
    );

    let eval = evaluate(&mut network, &data.inputs, TargetFunction::IsOdd);
    println!("{} / {} correct ({:.1}%)", eval.matches, eval.predictions.len(), eval.accuracy() * 100.0);
    Ok(())
}
