//! Classify Example
//!
//! Writes a few synthetic clips to a temporary directory, loads them through
//! `SequenceDataset`, collates them with `SequenceBatcher` and runs an
//! untrained classifier over the batch.

use std::error::Error;
use std::fs;

use burn::backend::NdArray;
use burn::data::dataloader::batcher::Batcher;
use poolseq::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Clip Classification Example ===\n");

    type Backend = NdArray<f32>;
    let device: <Backend as burn::tensor::backend::Backend>::Device = Default::default();

    let seq_len = 4;
    let image_size = 16;
    let shape = FrameShape::new(seq_len, image_size);

    // One file per clip; the leading digit is the label
    let dir = tempfile::tempdir()?;
    let mut rng = StdRng::seed_from_u64(7);
    for name in ["0_break.bin", "0_safety.bin", "1_foul.bin", "1_scratch.bin"] {
        let bytes: Vec<u8> = (0..shape.byte_len()).map(|_| rng.gen()).collect();
        fs::write(dir.path().join(name), bytes)?;
    }
    println!("Wrote 4 clips of {} bytes to {}", shape.byte_len(), dir.path().display());

    let dataset = SequenceDatasetConfig::new(dir.path().to_path_buf())
        .with_seq_len(seq_len)
        .with_image_size(image_size)
        .init()?;
    println!("Dataset holds {} clips", dataset.len());

    let items = (0..dataset.len())
        .map(|i| dataset.get(i))
        .collect::<Result<Vec<_>, _>>()?;
    let batch = SequenceBatcher::<Backend>::new(device.clone()).batch(items);
    println!("  Sequences: {:?}", batch.sequences.dims());
    println!("  Targets:   {:?}", batch.targets.dims());
    println!();

    let model = ClassifierConfig::new()
        .with_hidden_channels(8)
        .with_image_size(image_size)
        .init::<Backend>(&device);

    let log_probs = model.forward(batch.sequences.clone())?;
    println!("Log-probabilities: {:?}", log_probs.dims());

    let predicted = model
        .predict(batch.sequences)?
        .into_data()
        .to_vec::<i64>()
        .map_err(|err| format!("{err:?}"))?;
    let expected = batch
        .targets
        .into_data()
        .to_vec::<i64>()
        .map_err(|err| format!("{err:?}"))?;
    println!("  Predicted: {:?}", predicted);
    println!("  Labels:    {:?}", expected);

    println!("\n=== Classification Example completed! ===");
    println!("The model is untrained; predictions are arbitrary until it is fitted.");
    Ok(())
}
