/// Tool configuration
use crate::error::{CliError, Result};
use loudmatch_audio::OutputFormat;
use loudmatch_loudness::MeasureMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "loudmatch.toml";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "LOUDMATCH";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub loudness: LoudnessSettings,

    #[serde(default)]
    pub matcher: MatcherSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoudnessSettings {
    #[serde(default)]
    pub mode: MeasureMode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatcherSettings {
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    #[serde(default)]
    pub output_format: OutputFormat,

    /// Output bit depth; the source depth is kept when unset
    #[serde(default)]
    pub bits_per_sample: Option<u16>,

    #[serde(default = "default_copy_cover")]
    pub copy_cover: bool,

    #[serde(default)]
    pub fade_out_ms: u64,

    #[serde(default)]
    pub tail_silence_ms: u64,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            output_suffix: default_output_suffix(),
            output_format: OutputFormat::default(),
            bits_per_sample: None,
            copy_cover: default_copy_cover(),
            fade_out_ms: 0,
            tail_silence_ms: 0,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `loudmatch.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::load_from(path, environment)
    }

    /// Load configuration with an explicit environment source
    pub fn load_from(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Environment overrides the file
        settings = settings.add_source(environment);

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.matcher.output_suffix.is_empty() {
            return Err(CliError::Config(
                "matcher.output_suffix must not be empty".to_string(),
            ));
        }

        if let Some(bits) = self.matcher.bits_per_sample {
            if !matches!(bits, 16 | 24 | 32) {
                return Err(CliError::Config(format!(
                    "matcher.bits_per_sample must be 16, 24 or 32, got {}",
                    bits
                )));
            }
        }

        Ok(())
    }
}

fn default_output_suffix() -> String {
    " - GAINED".to_string()
}

fn default_copy_cover() -> bool {
    true
}
