//! # Clip Classification Model
//!
//! [`RecurrentEncoderClassifier`] encodes a clip with a
//! [`StackedConvLstm`](crate::rnn::StackedConvLstm), flattens the final upper
//! hidden state and projects it to log-probabilities:
//!
//! ```text
//! clip [B, T, 1, H, W] → encoder vector [B, hidden, H, W] → linear → log_softmax → [B, classes]
//! ```
//!
//! ```ignore
//! let model = ClassifierConfig::new()
//!     .with_hidden_channels(64)
//!     .with_image_size(64)
//!     .init::<Backend>(&device);
//!
//! let log_probs = model.forward(batch.sequences)?;
//! ```

pub mod classifier;

pub use classifier::{ClassifierConfig, RecurrentEncoderClassifier};
