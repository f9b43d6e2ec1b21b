//! # Recurrent Cell Implementations
//!
//! Single-timestep cells. [`crate::rnn`] stacks and unrolls them over a
//! sequence.
//!
//! ## ConvLSTM
//!
//! ```text
//! [i, f, o, g] = conv3x3([x, h]) + b
//! c' = σ(f) × c + σ(i) × tanh(g)
//! h' = σ(o) × tanh(c')
//! ```
//!
//! The convolution is padded so the state keeps the input's spatial size.
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape |
//! |--------|-------|
//! | `input` | `[batch, input_channels, height, width]` |
//! | `hidden`, `cell` | `[batch, hidden_channels, height, width]` |
//!
//! ## Example
//!
//! ```ignore
//! use poolseq::cells::ConvLstmCell;
//!
//! let cell = ConvLstmCell::<Backend>::new(1, 16, &device);
//! let state = cell.init_state(batch, [64, 64], &device);
//! let (hidden, cell_state) = cell.forward(frame, state);
//! ```

pub mod conv_lstm_cell;

pub use conv_lstm_cell::{ConvLstmCell, ConvLstmCellConfig, ConvLstmState};
