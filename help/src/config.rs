//! Layout configuration for rendered help text.
//!
//! Every field has a default, so a configuration file only needs the values
//! it changes.
//!
//! # Example YAML
//!
//! ```yaml
//! console_width: 100
//! left_space: 4
//! inner_space: 3
//! add_verbs: true
//! add_value_to_short: false
//! show_hidden: false
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Layout settings used by [`HelpRenderer`](crate::HelpRenderer).
///
/// # Examples
///
/// ```
/// use verbargs_help::HelpConfig;
///
/// let config = HelpConfig::default();
/// assert_eq!(config.console_width, 80);
/// assert_eq!(config.left_space, 2);
///
/// let narrow = HelpConfig::from_yaml_str("console_width: 40")?;
/// assert_eq!(narrow.console_width, 40);
/// assert_eq!(narrow.inner_space, 2);
/// # Ok::<(), verbargs_help::HelpError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Column at which text is wrapped.
    pub console_width: usize,
    /// Spaces before each entry of the details tables.
    pub left_space: usize,
    /// Spaces between the identifier column and the description column.
    pub inner_space: usize,
    /// Lists sub-verbs in the usage line and in an `Actions:` section.
    pub add_verbs: bool,
    /// Shows the value placeholder after the short token too, not only after
    /// the long name.
    pub add_value_to_short: bool,
    /// Includes options flagged as hidden.
    pub show_hidden: bool,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            console_width: 80,
            left_space: 2,
            inner_space: 2,
            add_verbs: true,
            add_value_to_short: false,
            show_hidden: false,
        }
    }
}

impl HelpConfig {
    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::HelpError::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::HelpError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        debug!(path = %path.display(), "Loaded help config");
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::HelpError::IoError) if the file cannot be
    /// written, or [`YamlError`](crate::HelpError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Parses a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`YamlError`](crate::HelpError::YamlError) if parsing fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Returns a copy wrapping at `console_width` columns.
    pub fn with_console_width(mut self, console_width: usize) -> Self {
        self.console_width = console_width;
        self
    }
}
