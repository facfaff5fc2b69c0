pub mod header;
pub mod tabs;

use leptos::prelude::*;
use tabs::TabPanels;

/// Page shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |  Header: brand          | tab buttons    |
/// +------------------------------------------+
/// |  TabPanels (one visible at a time)       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="layout">
            <header::Header />
            <TabPanels />
        </div>
    }
}
