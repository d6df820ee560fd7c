//! Fixture generation.
//!
//! Writes the same payload into every configured filename under the target
//! directory. Runs are sequential and idempotent: each file is truncated and
//! rewritten, and nothing else in the directory is touched. The first failure
//! stops the run; files already written stay on disk.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{log_fixture_error, FixtureError};
use crate::payload;

/// Final console line of a successful run.
pub const SUCCESS_MESSAGE: &str = "Test MP3 files created successfully!";

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub directory: PathBuf,
    /// Paths in the order they were written
    pub written: Vec<PathBuf>,
    pub bytes_per_file: usize,
}

/// Create `path` and any missing parents. An existing directory is fine.
pub fn ensure_output_directory(path: &Path) -> Result<(), FixtureError> {
    fs::create_dir_all(path).map_err(|err| FixtureError::directory(path, err))?;
    tracing::debug!("[FixtureGenerator] Output directory ready: {}", path.display());
    Ok(())
}

/// Write `payload` to `directory/filename`, replacing any existing file, and
/// report the path on `out`.
pub fn write_fixture<W: Write>(
    directory: &Path,
    filename: &str,
    payload: &[u8],
    out: &mut W,
) -> Result<PathBuf, FixtureError> {
    validate_target_name(filename)?;
    let path = directory.join(filename);

    {
        let mut file = File::create(&path).map_err(|err| FixtureError::write(&path, err))?;
        file.write_all(payload)
            .map_err(|err| FixtureError::write(&path, err))?;
    }

    writeln!(out, "Created: {}", path.display())?;
    tracing::debug!(
        "[FixtureGenerator] Wrote {} bytes to {}",
        payload.len(),
        path.display()
    );
    Ok(path)
}

/// Reject names that are not a single plain path component.
fn validate_target_name(name: &str) -> Result<(), FixtureError> {
    let mut components = Path::new(name).components();
    let plain = match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => part == OsStr::new(name),
        _ => false,
    };
    if plain && !name.contains('\\') {
        Ok(())
    } else {
        Err(FixtureError::InvalidTargetName {
            name: name.to_string(),
        })
    }
}

/// Writes the configured fixture set.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    config: GeneratorConfig,
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl FixtureGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Decode the embedded silent MP3 and write every fixture.
    ///
    /// A corrupt payload literal fails before the directory is touched.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<GenerationReport, FixtureError> {
        let payload = payload::silent_mp3().inspect_err(|err| {
            log_fixture_error(err, "payload decode");
        })?;
        self.run_with_payload(&payload, out)
    }

    /// Write every fixture with an explicit payload.
    pub fn run_with_payload<W: Write>(
        &self,
        payload: &[u8],
        out: &mut W,
    ) -> Result<GenerationReport, FixtureError> {
        let directory = self.config.output_dir.as_path();
        tracing::info!(
            "[FixtureGenerator] Writing {} fixtures ({} bytes each) to {}",
            self.config.targets.len(),
            payload.len(),
            directory.display()
        );

        ensure_output_directory(directory).inspect_err(|err| {
            log_fixture_error(err, "ensure_output_directory");
        })?;

        let mut written = Vec::with_capacity(self.config.targets.len());
        for filename in &self.config.targets {
            let path = write_fixture(directory, filename, payload, out).inspect_err(|err| {
                log_fixture_error(err, "write_fixture");
            })?;
            written.push(path);
        }

        writeln!(out, "{SUCCESS_MESSAGE}")?;
        tracing::info!("[FixtureGenerator] Wrote {} fixtures", written.len());

        Ok(GenerationReport {
            directory: directory.to_path_buf(),
            written,
            bytes_per_file: payload.len(),
        })
    }
}
