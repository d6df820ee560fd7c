// Music Fixtures - silent MP3 fixture generator
// Populates the frontend music directory with placeholder audio for tests

// Module declarations
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod payload;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::{ErrorCode, FixtureError};
pub use generator::{
    ensure_output_directory, write_fixture, FixtureGenerator, GenerationReport, SUCCESS_MESSAGE,
};
