//! Configuration for a dependency check.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - The resolved, layered value in [`resolved`]
//!
//! # Example
//!
//! ```
//! use nbdeps::config::{parse_config, CheckConfig};
//! use std::path::Path;
//!
//! let file = parse_config("versions:\n  numpy: 1.26.4\n", Path::new("nbdeps.yml")).unwrap();
//!
//! let mut config = CheckConfig::new("analysis.ipynb");
//! config.apply_file(&file);
//! assert_eq!(config.versions.get("numpy"), Some("1.26.4"));
//! assert_eq!(config.versions.get("seaborn"), Some("0.12.1"));
//! ```
//!
//! # Layers
//!
//! Later layers override earlier ones:
//! 1. Built-in version pins
//! 2. Config file (`--config`, or `nbdeps.yml` / `.nbdeps.yml` in the
//!    working directory)
//! 3. Command-line flags

pub mod loader;
pub mod resolved;
pub mod schema;

pub use loader::{discover_config, load_config_file, parse_config, parse_pin, CONFIG_FILE_NAMES};
pub use resolved::CheckConfig;
pub use schema::{ConfigFile, InstallMode, ReportFormat, VersionPolicy};

#[cfg(test)]
mod tests {
    #[test]
    fn serde_yaml_parses_version_map() {
        let yaml = "versions:\n  seaborn: 0.12.1\n  xgboost: '1.7.2'";
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed["versions"]["seaborn"], "0.12.1");
        assert_eq!(parsed["versions"]["xgboost"], "1.7.2");
    }
}
