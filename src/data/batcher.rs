use burn::data::dataloader::batcher::Batcher;
use burn::tensor::backend::Backend;
use burn::tensor::{Int, Tensor, TensorData};

use super::dataset::SequenceItem;
use super::decode::CHANNELS;

/// Collates decoded clips into channel-first tensors on a device.
#[derive(Clone, Debug)]
pub struct SequenceBatcher<B: Backend> {
    device: B::Device,
}

/// A batch ready for [`RecurrentEncoderClassifier::forward`](crate::model::RecurrentEncoderClassifier::forward).
#[derive(Clone, Debug)]
pub struct SequenceBatch<B: Backend> {
    /// `[batch, seq_len, 1, height, width]`
    pub sequences: Tensor<B, 5>,
    /// `[batch]`
    pub targets: Tensor<B, 1, Int>,
}

impl<B: Backend> SequenceBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<SequenceItem, SequenceBatch<B>> for SequenceBatcher<B> {
    /// Stack clips, moving each from `(T, H, W, C)` to `(T, C, H, W)`.
    ///
    /// # Panics
    /// If the clips do not all share one shape.
    fn batch(&self, items: Vec<SequenceItem>) -> SequenceBatch<B> {
        let (seq_len, height, width, channels) = items
            .first()
            .map(|item| item.frames.dim())
            .unwrap_or((0, 0, 0, CHANNELS));

        let mut values = Vec::with_capacity(items.len() * seq_len * height * width * channels);
        let mut labels = Vec::with_capacity(items.len());

        for item in &items {
            assert_eq!(
                item.frames.dim(),
                (seq_len, height, width, channels),
                "all clips in a batch must share one shape"
            );
            values.extend(item.frames.view().permuted_axes([0, 3, 1, 2]).iter().copied());
            labels.push(item.label as i64);
        }

        let shape = [items.len(), seq_len, channels, height, width];
        let sequences = Tensor::<B, 5>::from_data(
            TensorData::new(values, shape).convert::<B::FloatElem>(),
            &self.device,
        );
        let targets = Tensor::<B, 1, Int>::from_data(
            TensorData::new(labels, [items.len()]).convert::<B::IntElem>(),
            &self.device,
        );

        SequenceBatch { sequences, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use ndarray::Array4;

    type TestBackend = NdArray<f32>;

    fn item(seq_len: usize, size: usize, offset: f32, label: usize) -> SequenceItem {
        let frames = Array4::from_shape_fn((seq_len, size, size, 1), |(t, y, x, _)| {
            offset + (t * 100 + y * 10 + x) as f32 / 1000.0
        });
        SequenceItem { frames, label }
    }

    #[test]
    fn test_batch_shapes() {
        let batcher = SequenceBatcher::<TestBackend>::new(Default::default());
        let batch = batcher.batch(vec![item(4, 3, 0.0, 0), item(4, 3, 0.5, 1)]);

        assert_eq!(batch.sequences.dims(), [2, 4, 1, 3, 3]);
        assert_eq!(batch.targets.dims(), [2]);
    }

    #[test]
    fn test_batch_preserves_values_and_labels() {
        let batcher = SequenceBatcher::<TestBackend>::new(Default::default());
        let first = item(2, 2, 0.0, 1);
        let second = item(2, 2, 0.5, 0);
        let batch = batcher.batch(vec![first.clone(), second.clone()]);

        let values = batch.sequences.into_data().to_vec::<f32>().unwrap();
        // [b, t, c=1, y, x] flattened; the singleton channel does not move data.
        for (b, source) in [first, second].iter().enumerate() {
            for t in 0..2 {
                for y in 0..2 {
                    for x in 0..2 {
                        let flat = ((b * 2 + t) * 2 + y) * 2 + x;
                        assert_eq!(values[flat], source.frames[[t, y, x, 0]]);
                    }
                }
            }
        }

        let labels = batch.targets.into_data().to_vec::<i64>().unwrap();
        assert_eq!(labels, vec![1, 0]);
    }

    #[test]
    #[should_panic(expected = "share one shape")]
    fn test_batch_rejects_mixed_shapes() {
        let batcher = SequenceBatcher::<TestBackend>::new(Default::default());
        batcher.batch(vec![item(2, 2, 0.0, 0), item(3, 2, 0.0, 0)]);
    }
}
