//! Save and Load Config Example
//!
//! Dataset and model settings are Burn `Config`s, so they round-trip through
//! JSON files. A model rebuilt from a saved config accepts the same clips.

use std::error::Error;

use burn::backend::NdArray;
use burn::config::Config;
use burn::tensor::{Distribution, Tensor};
use poolseq::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Config Save/Load Example ===\n");

    type Backend = NdArray<f32>;
    let device = Default::default();
    let dir = tempfile::tempdir()?;

    let dataset_config = SequenceDatasetConfig::new("100_data".into())
        .with_seq_len(10)
        .with_image_size(32)
        .with_layout(FrameLayout::Scanline);
    let model_config = ClassifierConfig::new()
        .with_hidden_channels(4)
        .with_image_size(dataset_config.image_size);

    let dataset_path = dir.path().join("dataset.json");
    let model_path = dir.path().join("model.json");
    dataset_config.save(&dataset_path)?;
    model_config.save(&model_path)?;
    println!("Saved configs:");
    println!("  {}", dataset_path.display());
    println!("  {}", model_path.display());
    println!();

    let dataset_config = SequenceDatasetConfig::load(&dataset_path)?;
    let model_config = ClassifierConfig::load(&model_path)?;
    println!("Loaded dataset config: {}", dataset_config);
    println!("Loaded model config:   {}", model_config);
    println!();

    let model = model_config.init::<Backend>(&device);
    let clips = Tensor::<Backend, 5>::random(
        [1, dataset_config.seq_len, 1, model.image_size(), model.image_size()],
        Distribution::Uniform(0.0, 1.0),
        &device,
    );
    let log_probs = model.forward(clips)?;
    println!("Rebuilt model output: {:?}", log_probs.dims());

    println!("\n=== Config Save/Load Example completed! ===");
    Ok(())
}
