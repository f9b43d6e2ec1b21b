//! Raw RGB byte stream → normalized grayscale frame sequences.
//!
//! Sample files carry no header: they are `seq_len` frames of
//! `image_size × image_size` pixels, three bytes (R, G, B) per pixel. Decoding
//! collapses each pixel to one intensity in `[0, 1]`.
//!
//! Two pixel layouts exist in the recorded data:
//!
//! | Layout | Row order within a frame | Intensity |
//! |--------|--------------------------|-----------|
//! | [`FrameLayout::Linear`] | top row first (read order) | `(r + g + b) / 3 / 255` |
//! | [`FrameLayout::Scanline`] | bottom row first | `⌊(r + g + b) / 3⌋ / 255` |
//!
//! `Linear` is the default. `Scanline` matches the older renderer dumps whose
//! first row in the file is the bottom row of the image, quantized to an
//! 8-bit gray level before normalization.

use ndarray::Array4;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Number of color bytes per stored pixel.
pub const BYTES_PER_PIXEL: usize = 3;

/// Channels in a decoded frame (grayscale).
pub const CHANNELS: usize = 1;

/// Pixel ordering used when turning a byte stream into frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrameLayout {
    /// Pixels land in read order: row-major, top-left origin.
    #[default]
    Linear,
    /// Each frame is filled from the bottom row upward.
    Scanline,
}

/// Dimensions of one decoded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameShape {
    pub seq_len: usize,
    pub image_size: usize,
}

impl FrameShape {
    pub fn new(seq_len: usize, image_size: usize) -> Self {
        Self {
            seq_len,
            image_size,
        }
    }

    /// Pixels per frame.
    pub fn frame_pixels(&self) -> usize {
        self.image_size * self.image_size
    }

    /// Pixels in the whole sequence.
    pub fn pixels(&self) -> usize {
        self.seq_len * self.frame_pixels()
    }

    /// Bytes a sample file must hold at minimum.
    pub fn byte_len(&self) -> usize {
        self.pixels() * BYTES_PER_PIXEL
    }

    /// Shape of the decoded array: `(seq_len, image_size, image_size, 1)`.
    pub fn dims(&self) -> (usize, usize, usize, usize) {
        (self.seq_len, self.image_size, self.image_size, CHANNELS)
    }
}

/// Mean of the three color bytes, scaled to `[0, 1]`.
pub fn pixel_intensity(rgb: [u8; 3]) -> f32 {
    let sum = rgb[0] as f32 + rgb[1] as f32 + rgb[2] as f32;
    sum / 3.0 / 255.0
}

/// Mean of the three color bytes truncated to an 8-bit gray level, scaled to `[0, 1]`.
fn quantized_intensity(rgb: [u8; 3]) -> f32 {
    let gray = (rgb[0] as u16 + rgb[1] as u16 + rgb[2] as u16) / 3;
    gray as f32 / 255.0
}

fn rgb_at(bytes: &[u8], pixel: usize) -> [u8; 3] {
    let offset = pixel * BYTES_PER_PIXEL;
    [bytes[offset], bytes[offset + 1], bytes[offset + 2]]
}

/// Decode a sample's bytes into a `(seq_len, image_size, image_size, 1)` array.
///
/// Only the first [`FrameShape::byte_len`] bytes are used; anything after them
/// is ignored. Shorter input is rejected rather than padded.
pub fn decode_frames(
    bytes: &[u8],
    shape: FrameShape,
    layout: FrameLayout,
) -> Result<Array4<f32>, DecodeError> {
    let expected = shape.byte_len();
    if bytes.len() < expected {
        return Err(DecodeError::ShortInput {
            expected,
            actual: bytes.len(),
        });
    }

    let size = shape.image_size;
    let frame_pixels = shape.frame_pixels();

    let frames = match layout {
        FrameLayout::Linear => Array4::from_shape_fn(shape.dims(), |(t, y, x, _)| {
            pixel_intensity(rgb_at(bytes, t * frame_pixels + y * size + x))
        }),
        FrameLayout::Scanline => Array4::from_shape_fn(shape.dims(), |(t, y, x, _)| {
            let stored_row = size - 1 - y;
            quantized_intensity(rgb_at(bytes, t * frame_pixels + stored_row * size + x))
        }),
    };

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_ramp(shape: FrameShape) -> Vec<u8> {
        (0..shape.pixels())
            .flat_map(|i| {
                let v = (i % 256) as u8;
                [v, v, v]
            })
            .collect()
    }

    #[test]
    fn test_frame_shape_sizes() {
        let shape = FrameShape::new(10, 64);
        assert_eq!(shape.frame_pixels(), 4096);
        assert_eq!(shape.pixels(), 40960);
        assert_eq!(shape.byte_len(), 122880);
        assert_eq!(shape.byte_len(), shape.pixels() * BYTES_PER_PIXEL);
        assert_eq!(shape.dims(), (10, 64, 64, 1));
    }

    #[test]
    fn test_pixel_intensity_bounds() {
        assert_eq!(pixel_intensity([0, 0, 0]), 0.0);
        assert_eq!(pixel_intensity([255, 255, 255]), 1.0);
        let mid = pixel_intensity([255, 0, 0]);
        assert!((mid - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_quantized_intensity_truncates() {
        // (1 + 1 + 0) / 3 = 0 as an 8-bit gray level
        assert_eq!(quantized_intensity([1, 1, 0]), 0.0);
        assert_eq!(quantized_intensity([3, 3, 3]), 3.0 / 255.0);
    }

    #[test]
    fn test_linear_read_order() {
        let shape = FrameShape::new(2, 3);
        let frames = decode_frames(&gray_ramp(shape), shape, FrameLayout::Linear).unwrap();

        assert_eq!(frames.dim(), (2, 3, 3, 1));
        assert_eq!(frames[[0, 0, 0, 0]], 0.0);
        assert_eq!(frames[[0, 0, 1, 0]], 1.0 / 255.0);
        assert_eq!(frames[[0, 1, 0, 0]], 3.0 / 255.0);
        assert_eq!(frames[[1, 0, 0, 0]], 9.0 / 255.0);
        assert_eq!(frames[[1, 2, 2, 0]], 17.0 / 255.0);
    }

    #[test]
    fn test_scanline_is_vertical_flip_of_linear() {
        let shape = FrameShape::new(3, 4);
        let bytes = gray_ramp(shape);
        let linear = decode_frames(&bytes, shape, FrameLayout::Linear).unwrap();
        let scanline = decode_frames(&bytes, shape, FrameLayout::Scanline).unwrap();

        for t in 0..3 {
            for y in 0..4 {
                for x in 0..4 {
                    assert_eq!(scanline[[t, y, x, 0]], linear[[t, 3 - y, x, 0]]);
                }
            }
        }
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let shape = FrameShape::new(1, 2);
        let mut bytes = gray_ramp(shape);
        let exact = decode_frames(&bytes, shape, FrameLayout::Linear).unwrap();
        bytes.extend_from_slice(&[255; 7]);
        let padded = decode_frames(&bytes, shape, FrameLayout::Linear).unwrap();

        assert_eq!(exact, padded);
    }

    #[test]
    fn test_short_input_rejected() {
        let shape = FrameShape::new(2, 2);
        let bytes = vec![0u8; shape.byte_len() - 1];

        let err = decode_frames(&bytes, shape, FrameLayout::Linear).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ShortInput {
                expected: 24,
                actual: 23
            }
        );
    }
}
