use super::descriptor::TabDescriptor;
use super::error::TabError;

/// Ordered list of tab descriptors. Order defines navigation order.
///
/// Guaranteed non-empty with unique ids once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabRegistry {
    tabs: &'static [TabDescriptor],
}

impl TabRegistry {
    pub fn new(tabs: &'static [TabDescriptor]) -> Result<Self, TabError> {
        if tabs.is_empty() {
            return Err(TabError::EmptyRegistry);
        }
        for (i, tab) in tabs.iter().enumerate() {
            if tabs[..i].iter().any(|prev| prev.id == tab.id) {
                return Err(TabError::DuplicateTab(tab.id.to_string()));
            }
        }
        Ok(Self { tabs })
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static TabDescriptor> {
        self.tabs.get(index)
    }

    pub fn first(&self) -> &'static TabDescriptor {
        &self.tabs[0]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static TabDescriptor> {
        self.tabs.iter()
    }

    pub fn as_slice(&self) -> &'static [TabDescriptor] {
        self.tabs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABS: &[TabDescriptor] = &[
        TabDescriptor::new("home", "Home"),
        TabDescriptor::new("about", "About"),
        TabDescriptor::new("contact", "Visit"),
    ];

    #[test]
    fn test_enumerates_in_order() {
        let registry = TabRegistry::new(TABS).unwrap();
        let ids: Vec<_> = registry.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["home", "about", "contact"]);
        assert_eq!(registry.first().id, "home");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_position_lookup() {
        let registry = TabRegistry::new(TABS).unwrap();
        assert_eq!(registry.position("contact"), Some(2));
        assert_eq!(registry.position("menu"), None);
        assert!(registry.contains("about"));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(TabRegistry::new(&[]), Err(TabError::EmptyRegistry));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        const DUPES: &[TabDescriptor] = &[
            TabDescriptor::new("home", "Home"),
            TabDescriptor::new("home", "Start"),
        ];
        assert_eq!(
            TabRegistry::new(DUPES),
            Err(TabError::DuplicateTab("home".to_string()))
        );
    }
}
