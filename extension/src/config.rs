use serde::Deserialize;

use crate::error::{ExtensionError, Result};
use crate::reflector::IconVariant;

/// Bundled defaults, compiled into the wasm module
const BUNDLED_CONFIG: &str = include_str!("../extension.toml");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtensionConfig {
    #[serde(default)]
    pub icons: IconConfig,
    #[serde(default)]
    pub options: OptionsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IconConfig {
    #[serde(default = "default_icon_on")]
    pub on: String,
    #[serde(default = "default_icon_demand")]
    pub demand: String,
    #[serde(default = "default_icon_off")]
    pub off: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Settings page; also the substring `createTab` refuses to open
    #[serde(default = "default_options_page")]
    pub page: String,
}

fn default_icon_on() -> String {
    "buttons/keyboard_1.png".to_string()
}

fn default_icon_demand() -> String {
    "buttons/keyboard_2.png".to_string()
}

fn default_icon_off() -> String {
    "buttons/keyboard_3.png".to_string()
}

fn default_options_page() -> String {
    "options.html".to_string()
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            on: default_icon_on(),
            demand: default_icon_demand(),
            off: default_icon_off(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            page: default_options_page(),
        }
    }
}

impl IconConfig {
    pub fn path(&self, variant: IconVariant) -> &str {
        match variant {
            IconVariant::On => &self.on,
            IconVariant::Demand => &self.demand,
            IconVariant::Off => &self.off,
        }
    }
}

impl ExtensionConfig {
    pub fn parse(content: &str) -> Result<Self> {
        let config: ExtensionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Config shipped with the extension. Falls back to defaults if the
    /// bundled file is broken so the background worker still starts.
    pub fn bundled() -> Self {
        match Self::parse(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Bundled extension.toml rejected ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let icons = [
            ("icons.on", &self.icons.on),
            ("icons.demand", &self.icons.demand),
            ("icons.off", &self.icons.off),
        ];
        for (name, path) in icons {
            if path.trim().is_empty() {
                return Err(ExtensionError::Config(format!("{} must not be empty", name)));
            }
        }

        if self.options.page.trim().is_empty() {
            return Err(ExtensionError::Config(
                "options.page must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = ExtensionConfig::parse(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.icons.on, "buttons/keyboard_1.png");
        assert_eq!(config.icons.demand, "buttons/keyboard_2.png");
        assert_eq!(config.icons.off, "buttons/keyboard_3.png");
        assert_eq!(config.options.page, "options.html");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = ExtensionConfig::parse("[icons]\non = \"a.png\"\n").unwrap();
        assert_eq!(config.icons.on, "a.png");
        assert_eq!(config.icons.off, "buttons/keyboard_3.png");
        assert_eq!(config.options.page, "options.html");
    }

    #[test]
    fn test_empty_icon_path_rejected() {
        let err = ExtensionConfig::parse("[icons]\noff = \"  \"\n").unwrap_err();
        assert!(matches!(err, ExtensionError::Config(_)));
        assert!(err.to_string().contains("icons.off"));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = ExtensionConfig::parse("[icons\n").unwrap_err();
        assert!(matches!(err, ExtensionError::Config(_)));
    }

    #[test]
    fn test_icon_path_lookup() {
        let icons = IconConfig::default();
        assert_eq!(icons.path(IconVariant::Demand), "buttons/keyboard_2.png");
    }
}
