//! On-disk pool-table clip dataset.
//!
//! One file per clip under `data_root`. The first character of each file name
//! is the clip's class label (`0_break_017.bin` → label 0).

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use burn::config::Config;
use burn::data::dataset::Dataset;
use ndarray::Array4;
use tracing::{debug, error};

use super::decode::{decode_frames, FrameLayout, FrameShape};
use crate::error::{DatasetError, DecodeError};

/// Configuration for a [`SequenceDataset`].
#[derive(Config, Debug)]
pub struct SequenceDatasetConfig {
    /// Directory holding one sample file per clip.
    pub data_root: PathBuf,
    /// Frames per clip.
    #[config(default = 10)]
    pub seq_len: usize,
    /// Frame side length in pixels.
    #[config(default = 64)]
    pub image_size: usize,
    /// Pixel ordering of the stored frames.
    #[config(default = "FrameLayout::Linear")]
    pub layout: FrameLayout,
}

impl SequenceDatasetConfig {
    /// Scan `data_root` and build the dataset.
    pub fn init(&self) -> Result<SequenceDataset, DatasetError> {
        SequenceDataset::new(self)
    }
}

/// One decoded clip.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceItem {
    /// `(seq_len, image_size, image_size, 1)` intensities in `[0, 1]`.
    pub frames: Array4<f32>,
    pub label: usize,
}

/// Indexable set of clips backed by a directory listing taken at construction.
#[derive(Debug, Clone)]
pub struct SequenceDataset {
    files: Vec<PathBuf>,
    shape: FrameShape,
    layout: FrameLayout,
}

impl SequenceDataset {
    /// List `config.data_root` (non-recursive, files and links to files) and keep
    /// the sorted paths. The listing is never refreshed.
    pub fn new(config: &SequenceDatasetConfig) -> Result<Self, DatasetError> {
        let root = &config.data_root;
        let io_err = |source: std::io::Error| DatasetError::Io {
            path: root.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            // `Path::is_file` follows symlinks, `DirEntry::file_type` does not
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        debug!(
            root = %root.display(),
            samples = files.len(),
            seq_len = config.seq_len,
            image_size = config.image_size,
            layout = ?config.layout,
            "indexed sequence dataset"
        );

        Ok(Self {
            files,
            shape: FrameShape::new(config.seq_len, config.image_size),
            layout: config.layout,
        })
    }

    /// Number of sample files found at construction.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn shape(&self) -> FrameShape {
        self.shape
    }

    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    /// Path of the file backing `index`.
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.files.get(index).map(PathBuf::as_path)
    }

    /// Decode clip `index` together with its label.
    pub fn get(&self, index: usize) -> Result<SequenceItem, DatasetError> {
        let path = self.file(index)?;
        let frames = self.read_frames(path)?;
        let label = label_from_path(path)?;
        Ok(SequenceItem { frames, label })
    }

    /// Decode clip `index` without looking at its file name.
    pub fn get_frames(&self, index: usize) -> Result<Array4<f32>, DatasetError> {
        let path = self.file(index)?;
        self.read_frames(path)
    }

    fn file(&self, index: usize) -> Result<&Path, DatasetError> {
        self.path(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.files.len(),
        })
    }

    fn read_frames(&self, path: &Path) -> Result<Array4<f32>, DatasetError> {
        let io_err = |source: std::io::Error| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        };

        let expected = self.shape.byte_len();
        let mut bytes = Vec::with_capacity(expected);
        File::open(path)
            .map_err(io_err)?
            .take(expected as u64)
            .read_to_end(&mut bytes)
            .map_err(io_err)?;

        decode_frames(&bytes, self.shape, self.layout).map_err(|err| match err {
            DecodeError::ShortInput { expected, actual } => DatasetError::ShortFile {
                path: path.to_path_buf(),
                expected,
                actual,
            },
        })
    }
}

/// Burn reads `None` as the end of the data, so only indices past the end map
/// to `None`.
///
/// # Panics
/// If a listed sample fails to load.
impl Dataset<SequenceItem> for SequenceDataset {
    fn get(&self, index: usize) -> Option<SequenceItem> {
        if index >= self.files.len() {
            return None;
        }
        match SequenceDataset::get(self, index) {
            Ok(item) => Some(item),
            Err(err) => {
                error!(index, error = %err, "sample failed to load");
                panic!("sample {index} could not be loaded: {err}");
            }
        }
    }

    fn len(&self) -> usize {
        self.files.len()
    }
}

/// Class label encoded as the first character of the file name.
pub fn label_from_path(path: &Path) -> Result<usize, DatasetError> {
    let found = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.chars().next());

    found
        .and_then(|c| c.to_digit(10))
        .map(|digit| digit as usize)
        .ok_or_else(|| DatasetError::InvalidLabel {
            path: path.to_path_buf(),
            found,
        })
}
