//! # Sequence Encoders
//!
//! [`StackedConvLstm`] runs two [`ConvLstmCell`](crate::cells::ConvLstmCell)s
//! over a clip, frame by frame, and returns the final [`EncoderState`].
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape |
//! |--------|-------|
//! | input clip | `[batch, seq_len, channels, height, width]` |
//! | encoder vector | `[batch, hidden_channels, height, width]` |
//!
//! ## Stepping Manually
//!
//! ```ignore
//! let mut state = encoder.init_state(batch, [h, w], &device);
//! for frame in frames {
//!     state = encoder.step(frame, state);
//! }
//! let summary = state.into_encoder_vector();
//! ```

pub mod stacked;

pub use stacked::{EncoderState, StackedConvLstm};
