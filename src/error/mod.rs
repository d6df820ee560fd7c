// Error types for fixture generation
//
// Structured errors with numeric codes so the CLI and tests can tell
// directory failures apart from write failures.

mod fixture;

pub use fixture::{log_fixture_error, FixtureError, FixtureErrorCodes};

/// Error codes for structured error reporting
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
