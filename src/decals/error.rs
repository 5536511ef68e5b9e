//! Failure kinds of the decal core.
//!
//! None of these escape a synchronization pass. Systems log them and either
//! skip the affected asset or show a degraded visual.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecalError {
    #[error("failed to create decal directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no bundled asset ends with {name:?}")]
    NotBundled { name: String },

    #[error("bundled asset {id} could not be decoded")]
    BundledDecode { id: &'static str },

    #[error("failed to encode {name} as PNG: {source}")]
    Encode {
        name: String,
        source: image::ImageError,
    },

    #[error("failed to write {path:?}: {source}")]
    WriteBack {
        path: PathBuf,
        source: std::io::Error,
    },
}
