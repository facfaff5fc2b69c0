use contracts::site::config::SiteConfig;

/// Site configuration embedded in the bundle
const SITE_CONFIG_JSON: &str = include_str!("../site.json");

pub fn site_config() -> Result<SiteConfig, serde_json::Error> {
    SiteConfig::from_json(SITE_CONFIG_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = site_config().unwrap();
        assert_eq!(config.root_selector, "#app");
        assert_eq!(config.hero_image, "assets/breakfast.jpeg");
    }
}
