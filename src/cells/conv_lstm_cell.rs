use burn::config::Config;
use burn::module::Module;
use burn::nn::conv::{Conv2d, Conv2dConfig};
use burn::nn::PaddingConfig2d;
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// `(hidden, cell)` pair carried by a [`ConvLstmCell`], each `[batch, hidden_channels, height, width]`.
pub type ConvLstmState<B> = (Tensor<B, 4>, Tensor<B, 4>);

/// Configuration for a [`ConvLstmCell`].
#[derive(Config, Debug)]
pub struct ConvLstmCellConfig {
    /// Channels of the input feature map
    pub input_channels: usize,
    /// Channels of the hidden and cell state
    pub hidden_channels: usize,
    /// Convolution kernel size; must be odd so padding keeps the spatial size
    #[config(default = "[3, 3]")]
    pub kernel_size: [usize; 2],
    #[config(default = true)]
    pub bias: bool,
}

impl ConvLstmCellConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ConvLstmCell<B> {
        let gates = Conv2dConfig::new(
            [self.input_channels + self.hidden_channels, 4 * self.hidden_channels],
            self.kernel_size,
        )
        .with_padding(PaddingConfig2d::Same)
        .with_bias(self.bias)
        .init(device);

        ConvLstmCell {
            gates,
            input_channels: self.input_channels,
            hidden_channels: self.hidden_channels,
        }
    }
}

/// Convolutional LSTM cell
///
/// The LSTM equations with every matrix product replaced by a convolution
/// over the channel-concatenated `[x, h]` map:
/// - [i, f, o, g] = conv([x, h])
/// - i = sigmoid(i), f = sigmoid(f), o = sigmoid(o), g = tanh(g)
/// - c' = f * c + i * g
/// - h' = o * tanh(c')
#[derive(Module, Debug)]
pub struct ConvLstmCell<B: Backend> {
    gates: Conv2d<B>, // [input + hidden] -> 4 * hidden channels
    input_channels: usize,
    hidden_channels: usize,
}

impl<B: Backend> ConvLstmCell<B> {
    /// Create a cell with a 3×3 kernel and bias.
    pub fn new(input_channels: usize, hidden_channels: usize, device: &B::Device) -> Self {
        ConvLstmCellConfig::new(input_channels, hidden_channels).init(device)
    }

    pub fn input_channels(&self) -> usize {
        self.input_channels
    }

    pub fn hidden_channels(&self) -> usize {
        self.hidden_channels
    }

    /// Zeroed state for a batch of `[height, width]` maps.
    pub fn init_state(
        &self,
        batch_size: usize,
        [height, width]: [usize; 2],
        device: &B::Device,
    ) -> ConvLstmState<B> {
        let shape = [batch_size, self.hidden_channels, height, width];
        (Tensor::zeros(shape, device), Tensor::zeros(shape, device))
    }

    /// Advance the cell by one timestep.
    ///
    /// # Arguments
    /// * `input` - `[batch, input_channels, height, width]`
    /// * `state` - `(hidden, cell)`, each `[batch, hidden_channels, height, width]`
    ///
    /// # Returns
    /// The new `(hidden, cell)` pair
    pub fn forward(&self, input: Tensor<B, 4>, state: ConvLstmState<B>) -> ConvLstmState<B> {
        let (hidden, cell) = state;

        let combined = Tensor::cat(vec![input, hidden], 1);
        // Split the 4 * hidden channels into the four gates
        let chunks = self.gates.forward(combined).chunk(4, 1);
        let input_gate = activation::sigmoid(chunks[0].clone());
        let forget_gate = activation::sigmoid(chunks[1].clone());
        let output_gate = activation::sigmoid(chunks[2].clone());
        let candidate = chunks[3].clone().tanh();

        let new_cell = forget_gate * cell + input_gate * candidate;
        let new_hidden = output_gate * new_cell.clone().tanh();

        (new_hidden, new_cell)
    }
}
