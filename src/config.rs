//! Generator configuration
//!
//! The target directory and filename list are fixed at build time. They are
//! carried in a plain struct so the generator receives them explicitly, and a
//! JSON file can override them for local experiments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the frontend serves music assets from, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "frontend/public/assets/music";

/// Fixture filenames the frontend tests expect.
pub const DEFAULT_TARGETS: [&str; 4] = [
    "song1.mp3",
    "song2.mp3",
    "test-song.mp3",
    "my-favorite-track.mp3",
];

/// Where fixtures go and what they are called
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target directory, created if absent
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Filenames written in order
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|name| name.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            targets: default_targets(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a JSON file
    ///
    /// Missing fields take their defaults. If the file cannot be read or
    /// parsed, the whole default configuration is returned.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Replace the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("frontend/public/assets/music"));
        assert_eq!(
            config.targets,
            vec![
                "song1.mp3",
                "song2.mp3",
                "test-song.mp3",
                "my-favorite-track.mp3"
            ]
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: GeneratorConfig =
            serde_json::from_str(r#"{"output_dir": "tmp/music"}"#).unwrap();
        assert_eq!(parsed.output_dir, PathBuf::from("tmp/music"));
        assert_eq!(parsed.targets.len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.json");
        fs::write(&path, r#"{"targets": ["only.mp3"]}"#).unwrap();

        let config = GeneratorConfig::load_from_file(&path);
        assert_eq!(config.targets, vec!["only.mp3".to_string()]);
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            GeneratorConfig::load_from_file(dir.path().join("missing.json")),
            GeneratorConfig::default()
        );

        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(
            GeneratorConfig::load_from_file(&path),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_with_output_dir() {
        let config = GeneratorConfig::default().with_output_dir("elsewhere");
        assert_eq!(config.output_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.targets.len(), 4);
    }
}
