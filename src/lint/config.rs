//! Lint configuration

use serde::{Deserialize, Serialize};

/// Environment variable that makes warnings fail a check run
pub const STRICT_ENV_VAR: &str = "PATHS_STRICT";

/// Lint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Reference checks configuration
    pub references: ReferencesConfig,
    /// Flow analysis configuration
    pub flow: FlowConfig,
    /// Quality checks configuration
    pub quality: QualityConfig,
    /// Treat warnings as failures
    pub strict: bool,
}

impl LintConfig {
    /// Default configuration with `strict` taken from the environment
    pub fn from_env() -> Self {
        Self {
            strict: std::env::var(STRICT_ENV_VAR).is_ok(),
            ..Self::default()
        }
    }
}

/// Reference checking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferencesConfig {
    /// Enable reference checks
    pub enabled: bool,
    /// Report links whose destination does not exist
    pub check_broken_links: bool,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_broken_links: true,
        }
    }
}

/// Flow analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Enable flow analysis
    pub enabled: bool,
    /// Report passages that cannot be reached from the opening passage
    pub check_unreachable: bool,
    /// Report passages without links that are not marked as endings
    pub check_dead_ends: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_unreachable: true,
            check_dead_ends: true,
        }
    }
}

/// Quality checking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Enable quality checks
    pub enabled: bool,
    /// Report ending passages that still offer links
    pub check_ending_links: bool,
    /// Report passages with several links to the same destination
    pub check_duplicate_links: bool,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_ending_links: true,
            check_duplicate_links: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: LintConfig =
            serde_json::from_str(r#"{ "flow": { "check_dead_ends": false } }"#).unwrap();
        assert!(config.flow.enabled);
        assert!(!config.flow.check_dead_ends);
        assert!(config.references.check_broken_links);
        assert!(!config.strict);
    }
}
