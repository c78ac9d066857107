use std::path::{Path, PathBuf};

/// The main error type for the whiteout crate
#[derive(Debug, thiserror::Error)]
pub enum WhiteoutError {
    /// Input path does not exist
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Error occurred while reading or decoding an image
    #[error("image decode error in {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Error occurred while writing or encoding an image
    #[error("image encode error in {}: {source}", .path.display())]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Error occurred during file operations (open, create, sync, rename)
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transformed pixel buffer doesn't fit the image it came from
    #[error("pixel buffer of {len} bytes does not match a {width}x{height} RGBA image")]
    BufferShape { width: u32, height: u32, len: usize },

    /// Progress output could not be written
    #[error("could not write progress output: {0}")]
    Output(#[from] std::io::Error),
}

impl WhiteoutError {
    /// Attach a decode-side image error to the file it came from.
    ///
    /// `image` reports encoder failures as [image::ImageError::Encoding] even
    /// when raised from a reader, so those are kept apart.
    pub(crate) fn decode(path: &Path, source: image::ImageError) -> Self {
        match &source {
            image::ImageError::Encoding(_) => WhiteoutError::ImageEncode {
                path: path.to_path_buf(),
                source,
            },
            _ => WhiteoutError::ImageDecode {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub(crate) fn encode(path: &Path, source: image::ImageError) -> Self {
        WhiteoutError::ImageEncode {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        WhiteoutError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WhiteoutError::NotFound(path)
            | WhiteoutError::ImageDecode { path, .. }
            | WhiteoutError::ImageEncode { path, .. }
            | WhiteoutError::Io { path, .. } => Some(path),
            WhiteoutError::BufferShape { .. } | WhiteoutError::Output(_) => None,
        }
    }
}

// Convenience type alias for Results using WhiteoutError
pub type Result<T = ()> = std::result::Result<T, WhiteoutError>;
