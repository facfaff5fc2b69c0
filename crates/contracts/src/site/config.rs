use serde::Deserialize;
use std::str::FromStr;

/// Site configuration. Every field is optional in the source JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// CSS selector of the mount point
    pub root_selector: String,
    /// Console log level: error, warn, info, debug or trace
    pub log_level: String,
    /// Path of the hero photo, relative to the page
    pub hero_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_selector: "#app".to_string(),
            log_level: "debug".to_string(),
            hero_image: "assets/breakfast.jpeg".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Unknown level names fall back to `Debug`.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.root_selector, "#app");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_overrides() {
        let config =
            SiteConfig::from_json(r#"{ "root_selector": "main#site", "log_level": "warn" }"#)
                .unwrap();
        assert_eq!(config.root_selector, "main#site");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.hero_image, "assets/breakfast.jpeg");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_debug() {
        let config = SiteConfig {
            log_level: "loud".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
