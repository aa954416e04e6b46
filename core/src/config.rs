//! Case-adaptation configuration.
//!
//! A [`CaseConfig`] carries the single `enforce_camel_case` flag of a model.
//! It can be built in code or loaded from YAML:
//!
//! ```yaml
//! enforce_camel_case: true
//! ```
//!
//! Omitting the field enables camelCase, matching [`CaseConfig::default`].

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Per-model case-adaptation settings.
///
/// # Examples
///
/// ```
/// use casemodel_core::CaseConfig;
///
/// assert!(CaseConfig::default().enforce_camel_case);
///
/// let config = CaseConfig::from_yaml_str("enforce_camel_case: false").unwrap();
/// assert!(!config.enforce_camel_case);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseConfig {
    /// Export attribute keys as camelCase.
    #[serde(default = "default_enforce_camel_case")]
    pub enforce_camel_case: bool,
}

fn default_enforce_camel_case() -> bool {
    true
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            enforce_camel_case: default_enforce_camel_case(),
        }
    }
}

impl CaseConfig {
    /// Creates a configuration with an explicit flag.
    pub fn new(enforce_camel_case: bool) -> Self {
        Self { enforce_camel_case }
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`YamlError`](crate::ModelError::YamlError) if parsing fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ModelError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::ModelError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        debug!(path = %path.display(), enforce_camel_case = config.enforce_camel_case, "Loaded case config");
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ModelError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::ModelError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_yaml::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

/// Decides whether a model exports camelCase keys.
///
/// The model's own flag wins when set. Otherwise the parent's flag decides,
/// and a missing parent means no camelCase. A parent cannot switch camelCase
/// off for a child whose own flag is on.
///
/// # Examples
///
/// ```
/// use casemodel_core::camel_case_enabled;
///
/// assert!(camel_case_enabled(true, None));
/// assert!(camel_case_enabled(true, Some(false)));
/// assert!(camel_case_enabled(false, Some(true)));
/// assert!(!camel_case_enabled(false, Some(false)));
/// assert!(!camel_case_enabled(false, None));
/// ```
pub fn camel_case_enabled(own: bool, parent: Option<bool>) -> bool {
    own || parent == Some(true)
}
