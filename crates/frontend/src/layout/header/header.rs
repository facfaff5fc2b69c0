use crate::layout::tabs::TabNav;
use contracts::site::content::{BRAND_NAME, BRAND_TAGLINE};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="brand">
                <h1>{BRAND_NAME}</h1>
                <p class="brand-tagline">{BRAND_TAGLINE}</p>
            </div>
            <TabNav />
        </header>
    }
}
