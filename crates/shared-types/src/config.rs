use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional console surfaces are active.
///
/// Loaded from `config.toml` at startup. Every field defaults to `false`
/// so that a missing or incomplete config file disables all optional
/// features.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Render the mock analytics widgets on dashboards.
    #[serde(default)]
    pub analytics: bool,
    /// Show the demo-account hint card on the login page.
    #[serde(default)]
    pub demo_hint: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.analytics);
        assert!(!flags.demo_hint);
    }

    #[test]
    fn deserialize_empty_toml_defaults_all_false() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            analytics = true
            "#,
        )
        .unwrap();
        assert!(config.features.analytics);
        assert!(!config.features.demo_hint);
    }
}
