//! Configuration I/O (YAML loading)
//!
//! Defines the on-disk schema. Conversion into `FamilyTreeConfig` lives in
//! family_tree_config.rs.

use serde::{Deserialize, Serialize};

use super::family_tree_config::BranchConfig;
use crate::features::family_tree::LayoutSettings;

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// Every section is optional; missing sections keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutSettings>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;
    use crate::config::FamilyTreeConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = FamilyTreeConfig::default();
        config.layout.unit_width = 120.0;

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("unit_width: 120"));

        let back = FamilyTreeConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
branch:
  family_surnames: [Joshi, Joshee]
layout:
  unit_width: 150
  level_height: 120
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = FamilyTreeConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.branch.family_surnames, vec!["Joshi", "Joshee"]);
        assert_eq!(config.branch.female_genders, vec!["female", "f"]);
        assert_eq!(config.layout.unit_width, 150.0);
        assert_eq!(config.layout.node_height, 80.0);
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = FamilyTreeConfig::from_yaml_str("layout:\n  unit_width: 100\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = FamilyTreeConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnsupportedVersion { found: 2, .. }
        ));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let result = FamilyTreeConfig::from_yaml_str("version: 1\nlayuot: {}\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));

        let result = FamilyTreeConfig::from_yaml_str("version: 1\nlayout:\n  unit_widht: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = FamilyTreeConfig::from_yaml("/nonexistent/vansh.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
