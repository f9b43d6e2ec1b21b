//! # Clip Data Pipeline
//!
//! Reading pool-table clips from disk and shaping them for the classifier.
//!
//! | Stage | Type | Output |
//! |-------|------|--------|
//! | Decode | [`decode_frames`] | `Array4<f32>` `(T, H, W, 1)` |
//! | Index + label | [`SequenceDataset`] | [`SequenceItem`] |
//! | Collate | [`SequenceBatcher`] | [`SequenceBatch`] `(B, T, 1, H, W)` |
//!
//! ## Example
//!
//! ```ignore
//! use poolseq::data::{SequenceBatcher, SequenceDatasetConfig};
//! use burn::data::dataloader::batcher::Batcher;
//!
//! let dataset = SequenceDatasetConfig::new("100_data".into())
//!     .with_seq_len(10)
//!     .with_image_size(64)
//!     .init()?;
//!
//! let items = (0..4).map(|i| dataset.get(i)).collect::<Result<Vec<_>, _>>()?;
//! let batch = SequenceBatcher::<Backend>::new(device).batch(items);
//! // batch.sequences: [4, 10, 1, 64, 64]
//! ```

pub mod batcher;
pub mod dataset;
pub mod decode;

pub use batcher::{SequenceBatch, SequenceBatcher};
pub use dataset::{label_from_path, SequenceDataset, SequenceDatasetConfig, SequenceItem};
pub use decode::{decode_frames, pixel_intensity, FrameLayout, FrameShape, CHANNELS};
