use crate::layout::tabs::TabsContext;
use crate::layout::Shell;
use contracts::site::config::SiteConfig;
use contracts::site::SITE_TABS;
use leptos::prelude::*;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // Site config for pages that need asset paths
    provide_context(config);

    // One controller per mounted app; home is active on load
    match TabsContext::new(SITE_TABS) {
        Ok(tabs) => {
            provide_context(tabs);
            view! { <Shell /> }.into_any()
        }
        Err(e) => {
            log::error!("invalid tab registry: {}", e);
            view! { <div class="placeholder">"Site unavailable"</div> }.into_any()
        }
    }
}
