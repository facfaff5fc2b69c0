//! Tab panels
//!
//! Every panel is built once when the app mounts and afterwards only
//! toggled through its `active` class and `aria-hidden`.

use super::context::TabsContext;
use super::registry::render_tab_content;
use contracts::shared::tabs::TabDescriptor;
use leptos::prelude::*;

#[component]
pub fn TabPanels() -> impl IntoView {
    let tabs = leptos::context::use_context::<TabsContext>()
        .expect("TabsContext context not found");

    view! {
        <main class="tab-panels">
            {tabs
                .registry()
                .iter()
                .map(|tab| view! { <TabPanel tab=*tab /> })
                .collect_view()}
        </main>
    }
}

#[component]
pub fn TabPanel(tab: TabDescriptor) -> impl IntoView {
    let tabs = leptos::context::use_context::<TabsContext>()
        .expect("TabsContext context not found");

    let is_active = tabs.is_active(tab.id);
    log::debug!("building panel '{}'", tab.id);

    view! {
        <section
            id=tab.id
            class="tab-content"
            class:active=move || is_active.get()
            role="tabpanel"
            tabindex="0"
            aria-labelledby=tab.button_id()
            aria-hidden=move || if is_active.get() { "false" } else { "true" }
        >
            {render_tab_content(tab.id)}
        </section>
    }
}
