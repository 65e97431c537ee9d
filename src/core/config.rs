//! Configuration file management.
//!
//! Reads `notifier.toml`, which names the AWS profile and region used for
//! every store call. The crate ships a copy of the file; a file on disk takes
//! precedence over it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Tool configuration stored in `notifier.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project metadata
    pub project: Project,
    /// Credential source for the parameter store
    pub aws: Aws,
    /// Where this configuration was loaded from
    #[serde(skip)]
    pub source: Source,
}

/// Project section of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Name printed once setup finishes
    pub name: String,
}

/// AWS section of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aws {
    /// Named profile in the shared credentials file (`~/.aws/credentials`)
    pub profile: String,
    /// Region the parameters are written to
    pub region: String,
}

/// Origin of a loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    /// The copy embedded in the binary
    #[default]
    Packaged,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Packaged => write!(f, "packaged {}", constants::CONFIG_FILE),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Config {
    /// The configuration shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the embedded file is malformed.
    pub fn packaged() -> Result<Self> {
        Self::parse(constants::PACKAGED_CONFIG, Source::Packaged)
    }

    /// Parse configuration from TOML text and validate it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::MissingField` for empty required values.
    pub fn parse(contents: &str, source: Source) -> Result<Self> {
        let mut config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.source = source;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration relative to the current directory.
    ///
    /// See [`Config::load_from`] for the resolution order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(explicit, &cwd)
    }

    /// Resolve and load configuration.
    ///
    /// 1. `explicit` path, which must exist
    /// 2. `notifier.toml` in `dir`
    /// 3. the packaged copy
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if `explicit` does not exist, or any
    /// read/parse/validation error for the file that was chosen.
    pub fn load_from(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()).into());
            }
            return Self::read(path);
        }

        let local = dir.join(constants::CONFIG_FILE);
        if local.exists() {
            return Self::read(&local);
        }

        debug!("no config on disk, using packaged copy");
        Self::packaged()
    }

    fn read(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents, Source::File(path.to_path_buf()))?;
        debug!(
            profile = %config.aws.profile,
            region = %config.aws.region,
            "config loaded"
        );
        Ok(config)
    }

    /// Check that every required value is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first empty value.
    pub fn validate(&self) -> Result<()> {
        if self.project.name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "project.name",
            }
            .into());
        }
        if self.aws.profile.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "aws.profile",
            }
            .into());
        }
        if self.aws.region.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "aws.region",
            }
            .into());
        }
        Ok(())
    }
}
