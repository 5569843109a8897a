use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::format::FormatId;

/// Result type alias for conversion front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or dispatching a conversion.
///
/// Validation variants are reported before the engine is started.
/// Engine variants cover everything that happens after.
#[derive(Error, Debug)]
pub enum Error {
    #[error("input file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("output directory '{}' does not exist", .0.display())]
    OutputDirNotFound(PathBuf),

    #[error("unsupported conversion type: {} -> {}", .from.label(), .to.label())]
    UnsupportedPair { from: FormatId, to: FormatId },

    #[error("unable to detect the format of '{}', please pass --from", .0.display())]
    UnknownInputFormat(PathBuf),

    #[error("key names file '{}' does not exist", .0.display())]
    KeysNotFound(PathBuf),

    #[error("invalid language id {0}, expected 1-6")]
    InvalidLanguage(u32),

    #[error("unknown language '{0}', expected 1-6 or a language name")]
    UnknownLanguage(String),

    #[error("invalid game value '{0}'")]
    InvalidGame(String),

    #[error("conversion engine '{}' not found", .0.display())]
    EngineNotFound(PathBuf),

    #[error("unable to start conversion engine: {0}")]
    EngineSpawn(#[source] io::Error),

    #[error("conversion failed (engine exit code {})", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    EngineFailed { code: Option<i32> },

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the error was raised before the engine was started.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound(_)
                | Error::OutputDirNotFound(_)
                | Error::UnsupportedPair { .. }
                | Error::UnknownInputFormat(_)
                | Error::KeysNotFound(_)
                | Error::InvalidLanguage(_)
                | Error::UnknownLanguage(_)
                | Error::InvalidGame(_)
        )
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}
