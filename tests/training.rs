use byte_mlp::{
    evaluate, train_loop, ByteDataset, Error, Network, StopReason, TargetFunction, TrainConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_network(widths: &[usize], config: TrainConfig, seed: u64) -> Network {
    let mut network = Network::new(widths).unwrap().with_config(config);
    network.randomize_weights_with(&mut StdRng::seed_from_u64(seed));
    network
}

#[test]
fn learns_odd_bytes() {
    let data = ByteDataset::all(TargetFunction::IsOdd);
    let mut network = seeded_network(&[8, 12, 1], TrainConfig::new(0.8, 500, 1e-5), 0);

    let report = network.train(&data.inputs, &data.outputs).unwrap();
    assert!(report.epoch_count() <= 500);

    let eval = evaluate(&mut network, &data.inputs, TargetFunction::IsOdd);
    assert!(
        eval.accuracy() >= 0.95,
        "only {} of 256 correct after {} epochs",
        eval.matches,
        report.epoch_count()
    );
}

#[test]
fn total_error_trends_down() {
    let data = ByteDataset::all(TargetFunction::IsOdd);
    let mut network = seeded_network(&[8, 4, 1], TrainConfig::new(0.8, 100, 0.0), 1);

    let report = network.train(&data.inputs, &data.outputs).unwrap();
    let errors: Vec<f64> = report.epochs.iter().map(|s| s.total_error).collect();
    assert_eq!(errors.len(), 100);

    let head: f64 = errors[..10].iter().sum::<f64>() / 10.0;
    let tail: f64 = errors[90..].iter().sum::<f64>() / 10.0;
    assert!(tail < head, "error rose from {head} to {tail}");
    assert!(errors[99] < errors[0]);
}

#[test]
fn iteration_bound_runs_exactly_k_epochs() {
    let data = ByteDataset::all(TargetFunction::IsPrime);
    let mut network = seeded_network(&[8, 3, 1], TrainConfig::new(0.8, 12, 0.0), 2);

    let report = network.train(&data.inputs, &data.outputs).unwrap();
    assert_eq!(report.epoch_count(), 12);
    assert_eq!(report.stop_reason, StopReason::MaxIterations);
}

#[test]
fn zero_iteration_bound_stops_unconverged_run_after_one_epoch() {
    let data = ByteDataset::all(TargetFunction::IsPrime);
    let mut network = seeded_network(&[8, 2, 1], TrainConfig::new(0.8, 0, 1e-5), 7);

    let report = network.train(&data.inputs, &data.outputs).unwrap();
    assert_eq!(report.epoch_count(), 1);
    assert_eq!(report.stop_reason, StopReason::MaxIterations);
    assert!(report.final_error() > 1e-5);
}

#[test]
fn shape_mismatch_performs_no_updates() {
    let mut network = seeded_network(&[8, 5, 1], TrainConfig::new(0.8, 10, 0.0), 3);
    let before: Vec<f64> = (0..8)
        .flat_map(|n| (0..5).map(move |m| (n, m)))
        .map(|(n, m)| network.weight(0, n, m).unwrap())
        .collect();

    let err = train_loop(&mut network, &[1, 2, 3, 4, 5], &[1, 0, 1, 0], None).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { inputs: 5, outputs: 4 }));

    let after: Vec<f64> = (0..8)
        .flat_map(|n| (0..5).map(move |m| (n, m)))
        .map(|(n, m)| network.weight(0, n, m).unwrap())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn training_tracks_total_error_on_network() {
    let data = ByteDataset::from_range(20..120, TargetFunction::DivisibleBy3).unwrap();
    let mut network = seeded_network(&[8, 6, 1], TrainConfig::new(0.8, 3, 0.0), 4);

    let report = network.train(&data.inputs, &data.outputs).unwrap();
    assert_eq!(network.total_error(), report.final_error());

    network.randomize_weights();
    assert_eq!(network.total_error(), 0.0);
}

#[test]
fn seeded_runs_are_reproducible() {
    let data = ByteDataset::from_range(0..64, TargetFunction::Less20OrGreater90).unwrap();
    let config = TrainConfig::new(0.8, 5, 0.0);

    let mut a = seeded_network(&[8, 4, 1], config.clone(), 6);
    let mut b = seeded_network(&[8, 4, 1], config, 6);
    let ra = a.train(&data.inputs, &data.outputs).unwrap();
    let rb = b.train(&data.inputs, &data.outputs).unwrap();

    let ea: Vec<f64> = ra.epochs.iter().map(|s| s.total_error).collect();
    let eb: Vec<f64> = rb.epochs.iter().map(|s| s.total_error).collect();
    assert_eq!(ea, eb);
    assert_eq!(a.weight_summary(), b.weight_summary());
}
