//! Integration tests for the ConvLSTM cell and stacked encoder

use burn::backend::NdArray;
use burn::tensor::{Distribution, Tensor};
use poolseq::cells::{ConvLstmCell, ConvLstmCellConfig};
use poolseq::rnn::StackedConvLstm;

type Backend = NdArray<f32>;

#[test]
fn test_cell_batch_sizes() {
    let device = Default::default();
    let cell = ConvLstmCell::<Backend>::new(1, 4, &device);

    for batch_size in [1, 2, 5] {
        let input = Tensor::<Backend, 4>::zeros([batch_size, 1, 6, 6], &device);
        let state = cell.init_state(batch_size, [6, 6], &device);

        let (h, c) = cell.forward(input, state);

        assert_eq!(h.dims(), [batch_size, 4, 6, 6]);
        assert_eq!(c.dims(), [batch_size, 4, 6, 6]);
    }
}

#[test]
fn test_cell_non_square_maps() {
    let device = Default::default();
    let cell = ConvLstmCellConfig::new(2, 3).init::<Backend>(&device);

    let input = Tensor::<Backend, 4>::random([1, 2, 3, 9], Distribution::Default, &device);
    let (h, _) = cell.forward(input, cell.init_state(1, [3, 9], &device));

    assert_eq!(h.dims(), [1, 3, 3, 9]);
}

#[test]
fn test_step_is_pure() {
    let device = Default::default();
    let encoder = StackedConvLstm::<Backend>::new(1, 3, [3, 3], &device);

    let frame = Tensor::<Backend, 4>::random([2, 1, 5, 5], Distribution::Default, &device);
    let state = encoder.init_state(2, [5, 5], &device);

    let a = encoder.step(frame.clone(), state.clone());
    let b = encoder.step(frame, state);

    assert_eq!(a.encoder_vector().into_data(), b.encoder_vector().into_data());
    assert_eq!(a.lower.1.into_data(), b.lower.1.into_data());
}

#[test]
fn test_upper_layer_sees_lower_hidden() {
    let device = Default::default();
    let encoder = StackedConvLstm::<Backend>::new(1, 2, [3, 3], &device);

    let bright = Tensor::<Backend, 4>::ones([1, 1, 4, 4], &device);
    let dark = Tensor::<Backend, 4>::zeros([1, 1, 4, 4], &device);
    let from_bright = encoder.step(bright, encoder.init_state(1, [4, 4], &device));
    let from_dark = encoder.step(dark, encoder.init_state(1, [4, 4], &device));

    // Only the lower layer reads the frame, so any difference upstairs came
    // through the lower hidden state.
    assert_ne!(
        from_bright.upper.1.into_data(),
        from_dark.upper.1.into_data()
    );
}
