//! Two-layer ConvLSTM encoder
//!
//! Unrolls two stacked [`ConvLstmCell`]s over a clip. Each timestep is a pure
//! function from `(frame, state)` to the next state, so the unroll is a fold
//! and single steps can be exercised on their own.

use crate::cells::{ConvLstmCell, ConvLstmCellConfig, ConvLstmState};
use burn::module::Module;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Recurrent state of both layers between timesteps.
#[derive(Debug, Clone)]
pub struct EncoderState<B: Backend> {
    pub lower: ConvLstmState<B>,
    pub upper: ConvLstmState<B>,
}

impl<B: Backend> EncoderState<B> {
    /// Hidden state of the upper layer: the summary of everything seen so far.
    pub fn encoder_vector(&self) -> Tensor<B, 4> {
        self.upper.0.clone()
    }

    pub fn into_encoder_vector(self) -> Tensor<B, 4> {
        self.upper.0
    }
}

/// Stacked ConvLSTM encoder
///
/// Layer 1 reads the raw frame; layer 2 reads layer 1's hidden state.
#[derive(Module, Debug)]
pub struct StackedConvLstm<B: Backend> {
    lower: ConvLstmCell<B>,
    upper: ConvLstmCell<B>,
}

impl<B: Backend> StackedConvLstm<B> {
    /// Create an encoder with `kernel_size` convolutions in both layers.
    pub fn new(
        input_channels: usize,
        hidden_channels: usize,
        kernel_size: [usize; 2],
        device: &B::Device,
    ) -> Self {
        let lower = ConvLstmCellConfig::new(input_channels, hidden_channels)
            .with_kernel_size(kernel_size)
            .init(device);
        let upper = ConvLstmCellConfig::new(hidden_channels, hidden_channels)
            .with_kernel_size(kernel_size)
            .init(device);

        Self { lower, upper }
    }

    pub fn input_channels(&self) -> usize {
        self.lower.input_channels()
    }

    pub fn hidden_channels(&self) -> usize {
        self.upper.hidden_channels()
    }

    /// Zeroed state for both layers.
    pub fn init_state(
        &self,
        batch_size: usize,
        spatial: [usize; 2],
        device: &B::Device,
    ) -> EncoderState<B> {
        EncoderState {
            lower: self.lower.init_state(batch_size, spatial, device),
            upper: self.upper.init_state(batch_size, spatial, device),
        }
    }

    /// Advance both layers by one frame.
    ///
    /// # Arguments
    /// * `frame` - `[batch, input_channels, height, width]`
    /// * `state` - state after the previous frame
    pub fn step(&self, frame: Tensor<B, 4>, state: EncoderState<B>) -> EncoderState<B> {
        let lower = self.lower.forward(frame, state.lower);
        let upper = self.upper.forward(lower.0.clone(), state.upper);
        EncoderState { lower, upper }
    }

    /// Encode a whole clip from a zero state.
    ///
    /// # Arguments
    /// * `sequence` - `[batch, seq_len, input_channels, height, width]`
    ///
    /// # Returns
    /// The state after the last frame
    pub fn forward(&self, sequence: Tensor<B, 5>) -> EncoderState<B> {
        let [batch_size, seq_len, _, height, width] = sequence.dims();
        let initial = self.init_state(batch_size, [height, width], &sequence.device());

        (0..seq_len).fold(initial, |state, t| {
            let frame = sequence.clone().narrow(1, t, 1).squeeze::<4>(1);
            self.step(frame, state)
        })
    }
}
