//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// Provides the error taxonomy shared by every stage of the round trip
//--------------------------------------------------------------------

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while tracing, persisting or rendering paths.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The input raster is missing, unreadable, empty or cannot be decoded.
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A row of the path table has the wrong shape or non-numeric data.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// The computed canvas has no drawable area.
    #[error("canvas of {width}x{height} has no drawable area")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode path table: {0}")]
    TableWrite(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TraceError>;
