//! FamilyTreeConfig - branch convention and layout spacing

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use crate::features::family_tree::{LayoutSettings, SurnameBranchPolicy, DEFAULT_FAMILY_SURNAMES};
use crate::shared::models::DEFAULT_FEMALE_GENDERS;

const MAX_EXTENT: f64 = 2000.0;

/// External-branch convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BranchConfig {
    /// Surnames that keep a female member inside the lineage
    pub family_surnames: Vec<String>,
    /// Gender values treated as female
    pub female_genders: Vec<String>,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            family_surnames: DEFAULT_FAMILY_SURNAMES.iter().map(|s| s.to_string()).collect(),
            female_genders: DEFAULT_FEMALE_GENDERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BranchConfig {
    pub fn policy(&self) -> SurnameBranchPolicy {
        SurnameBranchPolicy::new(&self.family_surnames, &self.female_genders)
    }
}

/// Full configuration; `Default` reproduces the built-in behaviour
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyTreeConfig {
    pub branch: BranchConfig,
    pub layout: LayoutSettings,
}

impl FamilyTreeConfig {
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            branch: export.branch.unwrap_or_default(),
            layout: export.layout.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            branch: Some(self.branch.clone()),
            layout: Some(self.layout),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Range checks plus connector geometry
    pub fn validate(&self) -> ConfigResult<()> {
        let l = &self.layout;
        check_range("layout.unit_width", l.unit_width, 1.0, "Nodes need a positive width")?;
        check_range("layout.level_height", l.level_height, 1.0, "Generations need vertical room")?;
        check_range("layout.node_height", l.node_height, 1.0, "Nodes need a positive height")?;
        check_range("layout.bus_gap", l.bus_gap, 0.0, "Use 0 to draw the bus at the node edge")?;

        if l.node_height + l.bus_gap >= l.level_height {
            return Err(ConfigError::Validation(format!(
                "node_height + bus_gap ({}) must be below level_height ({})",
                l.node_height + l.bus_gap,
                l.level_height
            )));
        }
        if self.branch.female_genders.iter().all(|g| g.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "branch.female_genders must name at least one value".to_string(),
            ));
        }
        Ok(())
    }

    pub fn policy(&self) -> SurnameBranchPolicy {
        self.branch.policy()
    }
}

fn check_range(field: &str, value: f64, min: f64, hint: &str) -> ConfigResult<()> {
    if value.is_finite() && (min..=MAX_EXTENT).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::range_with_hint(field, value, min, MAX_EXTENT, hint))
    }
}
