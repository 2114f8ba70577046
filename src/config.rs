//! # Project Configuration
//!
//! A project may carry a `.libref.yaml` file at its root to adjust how library
//! references are discovered:
//!
//! ```yaml
//! # Path segments never scanned for reference files
//! ignore_paths:
//!   - mbed-os
//!   - third_party
//! # Reference file extension
//! reference_extension: lib
//! # Clone the references of each pass concurrently
//! parallel: false
//! ```
//!
//! Every field is optional. A project without the file uses the defaults from
//! `crate::defaults`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults::{default_ignore_paths, default_reference_extension, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

/// Settings read from a project's `.libref.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default = "default_ignore_paths")]
    pub ignore_paths: Vec<String>,

    #[serde(default = "default_reference_extension")]
    pub reference_extension: String,

    #[serde(default)]
    pub parallel: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            ignore_paths: default_ignore_paths(),
            reference_extension: default_reference_extension(),
            parallel: false,
        }
    }
}

impl ProjectConfig {
    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        let extension = self.reference_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(Error::Config {
                message: "reference_extension must not be empty".to_string(),
            });
        }
        if extension.contains(['/', '\\']) {
            return Err(Error::Config {
                message: format!(
                    "reference_extension must not contain path separators: {}",
                    self.reference_extension
                ),
            });
        }
        if let Some(empty) = self.ignore_paths.iter().find(|p| p.trim().is_empty()) {
            return Err(Error::Config {
                message: format!("ignore_paths entries must not be empty: {:?}", empty),
            });
        }
        Ok(())
    }
}

/// Parse a YAML string into a validated `ProjectConfig`.
///
/// An empty document yields the defaults.
pub fn parse(yaml_content: &str) -> Result<ProjectConfig> {
    if yaml_content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    let config: ProjectConfig = serde_yaml::from_str(yaml_content)?;
    config.validate()?;
    Ok(config)
}

/// Load a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Load `.libref.yaml` from `project_root`, or the defaults if it does not exist.
pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        from_file(path)
    } else {
        Ok(ProjectConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
ignore_paths:
  - mbed-os
  - third_party
reference_extension: ref
parallel: true
"#;

        let config = parse(yaml).unwrap();
        assert_eq!(config.ignore_paths, vec!["mbed-os", "third_party"]);
        assert_eq!(config.reference_extension, "ref");
        assert!(config.parallel);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = parse("parallel: true\n").unwrap();
        assert_eq!(config.ignore_paths, vec!["mbed-os"]);
        assert_eq!(config.reference_extension, "lib");
        assert!(config.parallel);
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(parse("").unwrap(), ProjectConfig::default());
        assert_eq!(parse("  \n").unwrap(), ProjectConfig::default());
    }

    #[test]
    fn test_parse_explicitly_empty_ignore_paths() {
        let config = parse("ignore_paths: []\n").unwrap();
        assert!(config.ignore_paths.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let result = parse("ignore: [mbed-os]\n");
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_yaml() {
        let result = parse("ignore_paths: [unclosed");
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let result = parse("reference_extension: \".\"\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_validate_rejects_blank_ignore_path() {
        let result = parse("ignore_paths: [\"mbed-os\", \" \"]\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_project_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_project_config(temp_dir.path()).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_load_project_config_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "ignore_paths: [vendor]\n",
        )
        .unwrap();

        let config = load_project_config(temp_dir.path()).unwrap();
        assert_eq!(config.ignore_paths, vec!["vendor"]);
    }
}
