//! # poolseq - Pool-table clip classification
//!
//! Loads short grayscale pool-table clips from raw RGB dumps and classifies
//! them with a two-layer ConvLSTM encoder on the Burn framework.
//!
//! ## Features
//!
//! - **Dataset**: one headerless binary file per clip, label in the file name
//! - **Decoding**: linear (top-down) or scanline (bottom-up) pixel layouts
//! - **Batching**: channel-last samples collated into `[B, T, 1, H, W]` tensors
//! - **ConvLSTM**: convolutional LSTM cell with spatially preserving gates
//! - **Classifier**: stacked encoder, linear head and log-softmax
//!
//! ## Quick Start
//!
//! ```rust
//! use poolseq::prelude::*;
//!
//! let shape = FrameShape::new(10, 64);
//! assert_eq!(shape.byte_len(), 10 * 64 * 64 * 3);
//!
//! let config = ClassifierConfig::new().with_image_size(64);
//! assert_eq!(config.num_classes, 2);
//! ```
//!
//! ## End to End
//!
//! ```ignore
//! use burn::data::dataloader::batcher::Batcher;
//! use poolseq::prelude::*;
//!
//! let dataset = SequenceDatasetConfig::new("100_data".into()).init()?;
//! let items = (0..dataset.len()).map(|i| dataset.get(i)).collect::<Result<Vec<_>, _>>()?;
//! let batch = SequenceBatcher::<Backend>::new(device.clone()).batch(items);
//!
//! let model = ClassifierConfig::new().init::<Backend>(&device);
//! let log_probs = model.forward(batch.sequences)?;
//! ```

pub mod cells;
pub mod data;
pub mod error;
pub mod model;
pub mod rnn;

pub mod prelude {
    pub use crate::cells::{ConvLstmCell, ConvLstmCellConfig};
    pub use crate::data::{
        FrameLayout, FrameShape, SequenceBatch, SequenceBatcher, SequenceDataset,
        SequenceDatasetConfig, SequenceItem,
    };
    pub use crate::error::{DatasetError, DecodeError, ModelError};
    pub use crate::model::{ClassifierConfig, RecurrentEncoderClassifier};
    pub use crate::rnn::{EncoderState, StackedConvLstm};
}
