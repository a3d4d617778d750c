use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GmicError>;

/// Errors raised while preparing for or running a G'MIC invocation.
///
/// Permission and resource-exhaustion failures surface through the
/// `io::ErrorKind` carried by the `Io` variant.
#[derive(Error, Debug)]
pub enum GmicError {
    /// The configured G'MIC executable could not be probed
    #[error("G'MIC executable not found or not runnable: {}", .0.display())]
    EngineNotFound(PathBuf),

    /// The input file is missing, unreadable, or not a decodable image
    #[error("failed to decode input image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Spawning the engine process failed
    #[error("failed to launch G'MIC")]
    Launch(#[source] io::Error),

    /// The engine ran but reported a failure
    #[error("G'MIC reported an error: {0}")]
    Engine(String),

    /// Encoding or decoding an image on the engine boundary failed
    #[error("image error")]
    Image(#[from] image::ImageError),

    /// Filesystem failure around staging or collecting images
    #[error("I/O error")]
    Io(#[from] io::Error),

    /// The run was cancelled by the user; not a failure
    #[error("run cancelled")]
    Cancelled,
}
