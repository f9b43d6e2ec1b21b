use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a raw byte buffer into frames.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected at least {expected} bytes of pixel data, got {actual}")]
    ShortInput { expected: usize, actual: usize },
}

/// Errors raised while retrieving a sample from a [`SequenceDataset`](crate::data::SequenceDataset).
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("index {index} out of range for dataset of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("sample file {path} is too short: expected {expected} bytes, got {actual}")]
    ShortFile {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("sample file {path} does not start with a label digit (found {found:?})")]
    InvalidLabel { path: PathBuf, found: Option<char> },
}

/// Errors raised by the classifier's forward pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("input shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: [usize; 5],
        actual: [usize; 5],
    },
}
