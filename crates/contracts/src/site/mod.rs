//! Beary's Breakfast Bar: tab list, page copy and configuration.

pub mod config;
pub mod content;

use crate::shared::tabs::TabDescriptor;

pub const HOME: TabDescriptor = TabDescriptor::new("home", "Home");
pub const ABOUT: TabDescriptor = TabDescriptor::new("about", "About");
pub const CONTACT: TabDescriptor = TabDescriptor::new("contact", "Visit");

/// Navigation order of the site. The first entry is active on load.
pub const SITE_TABS: &[TabDescriptor] = &[HOME, ABOUT, CONTACT];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tabs::TabRegistry;

    #[test]
    fn test_site_tabs_form_valid_registry() {
        let registry = TabRegistry::new(SITE_TABS).unwrap();
        assert_eq!(registry.first().id, "home");
        let labels: Vec<_> = registry.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Visit"]);
    }
}
