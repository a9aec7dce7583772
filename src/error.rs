use std::path::{Path, PathBuf};

/// Failure converting a single tile, or listing the tile directory.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Source is missing, unreadable, or not an image the decoder understands.
    #[error("cannot decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    /// Destination cannot be created or written.
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source exists but is a directory or other non-regular entry.
    #[error("{} is not a regular file", path.display())]
    NotAFile { path: PathBuf },

    #[error("cannot list directory {}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Path the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. }
            | Self::Write { path, .. }
            | Self::NotAFile { path }
            | Self::ListDir { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
