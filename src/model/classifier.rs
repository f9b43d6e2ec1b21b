//! Clip classifier: stacked ConvLSTM encoder + linear head + log-softmax.

use burn::config::Config;
use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::{Int, Tensor};
use tracing::debug;

use crate::error::ModelError;
use crate::rnn::StackedConvLstm;

/// Configuration for a [`RecurrentEncoderClassifier`].
///
/// The head's input width is `hidden_channels × image_size²`, so a model only
/// accepts clips at the resolution it was built for.
#[derive(Config, Debug)]
pub struct ClassifierConfig {
    #[config(default = 1)]
    pub input_channels: usize,
    #[config(default = 64)]
    pub hidden_channels: usize,
    /// Frame side length the head is sized for.
    #[config(default = 64)]
    pub image_size: usize,
    #[config(default = 2)]
    pub num_classes: usize,
    #[config(default = "[3, 3]")]
    pub kernel_size: [usize; 2],
}

impl ClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> RecurrentEncoderClassifier<B> {
        let encoder = StackedConvLstm::new(
            self.input_channels,
            self.hidden_channels,
            self.kernel_size,
            device,
        );
        let features = self.hidden_channels * self.image_size * self.image_size;
        let head = LinearConfig::new(features, self.num_classes)
            .with_bias(true)
            .init(device);

        RecurrentEncoderClassifier {
            encoder,
            head,
            input_channels: self.input_channels,
            image_size: self.image_size,
            num_classes: self.num_classes,
        }
    }
}

/// Classifies pool-table clips from their frame sequences.
#[derive(Module, Debug)]
pub struct RecurrentEncoderClassifier<B: Backend> {
    encoder: StackedConvLstm<B>,
    head: Linear<B>,
    input_channels: usize,
    image_size: usize,
    num_classes: usize,
}

impl<B: Backend> RecurrentEncoderClassifier<B> {
    pub fn encoder(&self) -> &StackedConvLstm<B> {
        &self.encoder
    }

    pub fn image_size(&self) -> usize {
        self.image_size
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Log-probabilities over the classes for each clip.
    ///
    /// # Arguments
    /// * `sequences` - `[batch, seq_len, input_channels, image_size, image_size]`, `seq_len >= 1`
    ///
    /// # Returns
    /// `[batch, num_classes]`; every entry is `<= 0` and each row's `exp` sums to 1
    pub fn forward(&self, sequences: Tensor<B, 5>) -> Result<Tensor<B, 2>, ModelError> {
        let dims = sequences.dims();
        self.check_input(dims)?;
        let batch_size = dims[0];

        let encoder_vector = self.encoder.forward(sequences).into_encoder_vector();
        let [_, channels, height, width] = encoder_vector.dims();
        debug!(batch_size, seq_len = dims[1], channels, height, width, "encoded clips");

        let features = encoder_vector.reshape([batch_size, channels * height * width]);
        let logits = self.head.forward(features);

        Ok(activation::log_softmax(logits, 1))
    }

    /// Most likely class per clip, `[batch]`.
    pub fn predict(&self, sequences: Tensor<B, 5>) -> Result<Tensor<B, 1, Int>, ModelError> {
        let log_probs = self.forward(sequences)?;
        Ok(log_probs.argmax(1).squeeze::<1>(1))
    }

    fn check_input(&self, actual: [usize; 5]) -> Result<(), ModelError> {
        let [batch_size, seq_len, _, _, _] = actual;
        let expected = [
            batch_size,
            seq_len.max(1), // an empty clip has no encoder vector
            self.input_channels,
            self.image_size,
            self.image_size,
        ];

        if actual == expected {
            Ok(())
        } else {
            Err(ModelError::ShapeMismatch { expected, actual })
        }
    }
}
