//! Tab content registry - maps each site tab to the view it renders.
//!
//! Descriptors come from `contracts::site`; this module pairs each one
//! with its content builder. Panels call the builder once at startup.

use crate::pages::{AboutPage, ContactPage, HomePage};
use contracts::shared::tabs::TabDescriptor;
use contracts::site::{ABOUT, CONTACT, HOME};
use leptos::prelude::*;

/// A tab descriptor together with its content builder
#[derive(Clone, Copy)]
pub struct TabEntry {
    pub descriptor: TabDescriptor,
    pub render: fn() -> AnyView,
}

pub const TAB_ENTRIES: &[TabEntry] = &[
    TabEntry {
        descriptor: HOME,
        render: home,
    },
    TabEntry {
        descriptor: ABOUT,
        render: about,
    },
    TabEntry {
        descriptor: CONTACT,
        render: contact,
    },
];

fn home() -> AnyView {
    view! { <HomePage /> }.into_any()
}

fn about() -> AnyView {
    view! { <AboutPage /> }.into_any()
}

fn contact() -> AnyView {
    view! { <ContactPage /> }.into_any()
}

pub fn entry_for(id: &str) -> Option<&'static TabEntry> {
    TAB_ENTRIES.iter().find(|entry| entry.descriptor.id == id)
}

/// Renders the content of tab `id`, or a placeholder for unknown ids.
pub fn render_tab_content(id: &str) -> AnyView {
    match entry_for(id) {
        Some(entry) => (entry.render)(),
        None => {
            log::warn!("no content registered for tab '{}'", id);
            view! { <div class="placeholder">"Not available"</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::site::SITE_TABS;

    #[test]
    fn test_every_site_tab_has_content() {
        let ids: Vec<_> = TAB_ENTRIES.iter().map(|e| e.descriptor).collect();
        assert_eq!(ids, SITE_TABS.to_vec());
    }

    #[test]
    fn test_entry_lookup() {
        assert_eq!(entry_for("contact").map(|e| e.descriptor.label), Some("Visit"));
        assert!(entry_for("menu").is_none());
    }
}
