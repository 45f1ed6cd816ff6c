//! Demo pipeline: train the dense-layer warm-up and the logic network,
//! persist JSON baselines, and hand flattened weights to the external
//! tensor-ingestion executable.
//!
//! Run with:
//!   cargo run --release -- ./tensor_demo

use std::path::{Path, PathBuf};
use std::time::Instant;

use gatenet::{
    logic_dataset, train_dense_layer, train_logic, CommandIngestor, Ingestor,
    TensorPayload, TrainConfig, WeightsRecord,
};
use gatenet::network::record::save_weights_json;

const BASELINE_FILE: &str = "weights_baseline.json";
const PAYLOAD_FILE: &str = "tensor_payload.txt";
const DEFAULT_EXECUTABLE: &str = "./tensor_demo";

const PAYLOAD_KEY: u64 = 9001;
const PAYLOAD_NAME: &str = "logic_net";
const PAYLOAD_ROWS: usize = 1;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> gatenet::Result<()> {
    let executable = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXECUTABLE));
    let ingestor = CommandIngestor::new(executable);
    // Checked before any training work so a missing collaborator costs nothing.
    ingestor.check()?;

    let baseline = Path::new(BASELINE_FILE);
    let payload_path = Path::new(PAYLOAD_FILE);
    let payload = TensorPayload::new(PAYLOAD_KEY, PAYLOAD_NAME, PAYLOAD_ROWS);

    // ── Dense-layer warm-up: exercises the save/ingest path ───────────────
    let weights = train_dense_layer(4, 5, 0.1, 42)?;

    let t_save = Instant::now();
    save_weights_json(baseline, &weights)?;
    let save_ms = t_save.elapsed().as_secs_f64() * 1e3;

    let flat: Vec<f32> = weights.iter().map(|&w| w as f32).collect();
    payload.write(payload_path, &flat)?;
    let t_ingest = Instant::now();
    ingestor.ingest(payload_path)?;
    let ingest_ms = t_ingest.elapsed().as_secs_f64() * 1e3;

    println!("Weights: {:?}", weights);
    println!("Baseline JSON save: {:.3} ms -> {}", save_ms, BASELINE_FILE);
    println!("Tensor ingest: {:.3} ms -> {}", ingest_ms, PAYLOAD_FILE);
    println!("Use `{} --tensor-dryrun` to replay stored tensors.", ingestor.executable().display());

    // ── Logic network: the real training run ──────────────────────────────
    let dataset = logic_dataset();
    let trained = train_logic(&dataset, &TrainConfig::default())?;

    let record = WeightsRecord::from_parameters(&trained.params, Some(trained.predictions.clone()));
    let t_save = Instant::now();
    record.save_json(baseline)?;
    let save_ms = t_save.elapsed().as_secs_f64() * 1e3;

    payload.write(payload_path, &trained.params.flatten())?;
    let t_ingest = Instant::now();
    ingestor.ingest(payload_path)?;
    let ingest_ms = t_ingest.elapsed().as_secs_f64() * 1e3;

    println!("Truth table per row [XOR, AND, OR]:");
    for (row_in, row_out) in dataset.inputs.data.iter().zip(dataset.targets.data.iter()) {
        let bits: Vec<i64> = row_in.iter().map(|&v| v as i64).collect();
        println!("  input={:?} -> {:?}", bits, row_out);
    }
    println!("Model predictions: {:?}", trained.predictions);

    println!("XOR predictions (only first column shown):");
    for ((row_in, row_target), row_pred) in dataset.inputs.data.iter()
        .zip(dataset.targets.data.iter())
        .zip(trained.predictions.iter())
    {
        let bits: Vec<i64> = row_in.iter().map(|&v| v as i64).collect();
        println!(
            "  input={:?} -> truth={}, predicted={}",
            bits, row_target[0] as i64, row_pred[0]
        );
    }

    println!("Baseline JSON save: {:.3} ms -> {}", save_ms, BASELINE_FILE);
    println!("Tensor ingest: {:.3} ms -> {}", ingest_ms, PAYLOAD_FILE);
    println!("Replay via `{} --tensor-dryrun` for summaries.", ingestor.executable().display());

    Ok(())
}
