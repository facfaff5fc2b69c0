use contracts::shared::tabs::{TabController, TabDescriptor, TabError, TabRegistry, TabView};
use leptos::prelude::*;

/// `TabView` backed by one reactive flag per tab.
///
/// Buttons and panels read their own flag, so a transition only re-renders
/// the pairs whose state actually changed.
#[derive(Clone)]
pub struct SignalTabView {
    flags: Vec<(&'static str, RwSignal<bool>)>,
}

impl SignalTabView {
    pub fn new(registry: TabRegistry) -> Self {
        Self {
            flags: registry.iter().map(|tab| (tab.id, RwSignal::new(false))).collect(),
        }
    }

    pub fn flag(&self, id: &str) -> Option<RwSignal<bool>> {
        self.flags
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, flag)| *flag)
    }

    fn set_flag(&self, id: &str, active: bool) {
        if let Some(flag) = self.flag(id) {
            if flag.get_untracked() != active {
                flag.set(active);
            }
        }
    }
}

impl TabView for SignalTabView {
    fn set_active(&mut self, id: &str) {
        self.set_flag(id, true);
    }

    fn set_inactive(&mut self, id: &str) {
        self.set_flag(id, false);
    }
}

/// Tab state shared through context.
///
/// Wraps the controller so event handlers can drive it by copy.
#[derive(Clone, Copy)]
pub struct TabsContext {
    controller: StoredValue<TabController<SignalTabView>>,
}

impl TabsContext {
    pub fn new(tabs: &'static [TabDescriptor]) -> Result<Self, TabError> {
        let registry = TabRegistry::new(tabs)?;
        let controller = TabController::new(registry, SignalTabView::new(registry));
        Ok(Self {
            controller: StoredValue::new(controller),
        })
    }

    pub fn registry(&self) -> TabRegistry {
        self.controller.with_value(|c| c.registry())
    }

    /// Reactive "is this tab active" flag for the button/panel of `id`.
    pub fn is_active(&self, id: &str) -> Signal<bool> {
        match self.controller.with_value(|c| c.view().flag(id)) {
            Some(flag) => flag.read_only().into(),
            None => Signal::stored(false),
        }
    }

    pub fn activate(&self, id: &str) {
        self.controller.update_value(|c| {
            if let Err(e) = c.activate(id) {
                log::warn!("activate ignored: {}", e);
            }
        });
    }

    /// Applies a keydown on the button of `from`.
    ///
    /// Returns the id of the newly active tab when the key navigated.
    pub fn handle_key(&self, from: &str, key: &str) -> Option<&'static str> {
        let mut next = None;
        self.controller.update_value(|c| match c.handle_key(from, key) {
            Ok(id) => next = id,
            Err(e) => log::warn!("key '{}' ignored: {}", key, e),
        });
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::site::SITE_TABS;

    fn active_flags(tabs: &TabsContext) -> Vec<bool> {
        tabs.registry()
            .iter()
            .map(|tab| tabs.is_active(tab.id).get_untracked())
            .collect()
    }

    #[test]
    fn test_home_is_active_on_load() {
        let tabs = TabsContext::new(SITE_TABS).unwrap();
        assert_eq!(active_flags(&tabs), vec![true, false, false]);
    }

    #[test]
    fn test_click_moves_flags() {
        let tabs = TabsContext::new(SITE_TABS).unwrap();
        tabs.activate("contact");
        assert_eq!(active_flags(&tabs), vec![false, false, true]);
    }

    #[test]
    fn test_arrow_left_from_home_selects_visit() {
        let tabs = TabsContext::new(SITE_TABS).unwrap();
        assert_eq!(tabs.handle_key("home", "ArrowLeft"), Some("contact"));
        assert_eq!(active_flags(&tabs), vec![false, false, true]);
    }

    #[test]
    fn test_unknown_input_keeps_state() {
        let tabs = TabsContext::new(SITE_TABS).unwrap();
        tabs.activate("menu");
        assert_eq!(tabs.handle_key("menu", "ArrowRight"), None);
        assert_eq!(tabs.handle_key("home", "Enter"), None);
        assert_eq!(active_flags(&tabs), vec![true, false, false]);
    }

    #[test]
    fn test_unknown_id_has_inactive_flag() {
        let tabs = TabsContext::new(SITE_TABS).unwrap();
        assert!(!tabs.is_active("menu").get_untracked());
    }
}
