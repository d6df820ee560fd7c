// Fixture generation error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Fixture error code constants
///
/// Error code range: 2001-2005
pub struct FixtureErrorCodes {}

impl FixtureErrorCodes {
    /// Embedded payload literal could not be decoded
    pub const PAYLOAD_DECODE_FAILED: i32 = 2001;

    /// Target directory could not be created
    pub const DIRECTORY_CREATE_FAILED: i32 = 2002;

    /// Fixture file could not be written
    pub const WRITE_FAILED: i32 = 2003;

    /// Target filename is empty or contains a path component
    pub const INVALID_TARGET_NAME: i32 = 2004;

    /// Any other I/O failure
    pub const IO: i32 = 2005;
}

/// Log a fixture error with structured context
///
/// Fields logged: error code, the operation that failed (`context`) and
/// the human-readable message.
pub fn log_fixture_error(err: &FixtureError, context: &str) {
    error!(
        "Fixture error in {}: code={}, component=FixtureGenerator, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Errors raised while generating fixture files
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureError {
    /// Embedded base64 literal is corrupt
    PayloadDecodeFailed { reason: String },

    /// `create_dir_all` failed for the target directory
    DirectoryCreateFailed { path: PathBuf, reason: String },

    /// Opening, writing or flushing a fixture file failed
    WriteFailed { path: PathBuf, reason: String },

    /// Filename would not resolve to a direct child of the target directory
    InvalidTargetName { name: String },

    /// Uncategorized I/O failure
    Io { details: String },
}

impl FixtureError {
    pub(crate) fn directory(path: &Path, err: std::io::Error) -> Self {
        FixtureError::DirectoryCreateFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn write(path: &Path, err: std::io::Error) -> Self {
        FixtureError::WriteFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

impl ErrorCode for FixtureError {
    fn code(&self) -> i32 {
        match self {
            FixtureError::PayloadDecodeFailed { .. } => FixtureErrorCodes::PAYLOAD_DECODE_FAILED,
            FixtureError::DirectoryCreateFailed { .. } => {
                FixtureErrorCodes::DIRECTORY_CREATE_FAILED
            }
            FixtureError::WriteFailed { .. } => FixtureErrorCodes::WRITE_FAILED,
            FixtureError::InvalidTargetName { .. } => FixtureErrorCodes::INVALID_TARGET_NAME,
            FixtureError::Io { .. } => FixtureErrorCodes::IO,
        }
    }

    fn message(&self) -> String {
        match self {
            FixtureError::PayloadDecodeFailed { reason } => {
                format!("Embedded MP3 payload is corrupt: {}", reason)
            }
            FixtureError::DirectoryCreateFailed { path, reason } => {
                format!("Failed to create directory {}: {}", path.display(), reason)
            }
            FixtureError::WriteFailed { path, reason } => {
                format!("Failed to write {}: {}", path.display(), reason)
            }
            FixtureError::InvalidTargetName { name } => {
                format!("Invalid fixture filename {:?}: must be a plain file name", name)
            }
            FixtureError::Io { details } => format!("I/O error: {}", details),
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixtureError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for FixtureError {}

impl From<std::io::Error> for FixtureError {
    fn from(err: std::io::Error) -> Self {
        FixtureError::Io {
            details: err.to_string(),
        }
    }
}
