//! Default values for libref configuration.
//!
//! This module provides centralized default values used by the library and
//! the CLI, ensuring consistency and avoiding duplication.

/// File name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".libref.yaml";

/// Extension of library reference files, without the leading dot.
pub const REFERENCE_FILE_EXTENSION: &str = "lib";

/// Path segments excluded from scanning by default.
///
/// `mbed-os` vendors its own library references and resolves them itself.
pub const DEFAULT_IGNORE_PATHS: &[&str] = &["mbed-os"];

/// Returns the default ignore paths as owned strings.
pub fn default_ignore_paths() -> Vec<String> {
    DEFAULT_IGNORE_PATHS.iter().map(|s| s.to_string()).collect()
}

/// Returns the default reference file extension as an owned string.
pub fn default_reference_extension() -> String {
    REFERENCE_FILE_EXTENSION.to_string()
}
