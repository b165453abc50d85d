use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::MAX_ROM_SIZE;

/// Reasons a ROM could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ROM is empty")]
    Empty,

    #[error("ROM is {size} bytes but at most {max} fit in memory")]
    TooLarge { size: usize, max: usize },
}

/// # ROM Image
/// A program validated to fit in memory from `PROGRAM_START` onwards.
#[derive(Clone, Debug, PartialEq)]
pub struct RomImage {
    bytes: Vec<u8>,
}

impl RomImage {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, LoadError> {
        match bytes.len() {
            0 => Err(LoadError::Empty),
            size if size > MAX_ROM_SIZE => Err(LoadError::TooLarge {
                size,
                max: MAX_ROM_SIZE,
            }),
            _ => Ok(RomImage { bytes }),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Load a ROM from a file on disk
pub fn load_rom(path: &Path) -> Result<RomImage, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    RomImage::from_bytes(bytes)
}
