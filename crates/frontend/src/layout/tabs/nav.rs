use super::context::TabsContext;
use contracts::shared::tabs::TabDescriptor;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Tab navigation bar: one button per registry entry, in registry order.
#[component]
pub fn TabNav() -> impl IntoView {
    let tabs = leptos::context::use_context::<TabsContext>()
        .expect("TabsContext context not found");

    view! {
        <nav class="tab-nav">
            <div class="tab-list" role="tablist">
                {tabs
                    .registry()
                    .iter()
                    .map(|tab| view! { <TabButton tab=*tab /> })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// Button for one tab.
///
/// Click activates and focuses it; left/right arrows move the selection
/// to the neighbouring tab (wrapping) and focus that tab's button.
#[component]
pub fn TabButton(tab: TabDescriptor) -> impl IntoView {
    let tabs = leptos::context::use_context::<TabsContext>()
        .expect("TabsContext context not found");

    let is_active = tabs.is_active(tab.id);
    let node_ref = NodeRef::<html::Button>::new();

    let on_click = move |_: ev::MouseEvent| {
        tabs.activate(tab.id);
        if let Some(button) = node_ref.get() {
            let _ = button.focus();
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if let Some(next) = tabs.handle_key(tab.id, &ev.key()) {
            ev.prevent_default();
            focus_tab_button(next);
        }
    };

    view! {
        <button
            node_ref=node_ref
            class="tab-button"
            class:active=move || is_active.get()
            id=tab.button_id()
            type="button"
            data-tab=tab.id
            role="tab"
            aria-controls=tab.id
            aria-selected=move || if is_active.get() { "true" } else { "false" }
            tabindex=move || if is_active.get() { "0" } else { "-1" }
            on:click=on_click
            on:keydown=on_keydown
        >
            {tab.label}
        </button>
    }
}

fn focus_tab_button(id: &str) {
    let button = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&format!("{}-tab", id)))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match button {
        Some(button) => {
            let _ = button.focus();
        }
        None => log::warn!("tab button for '{}' not found", id),
    }
}
