pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod pages;

use contracts::site::config::SiteConfig;
use error::StartupError;
use leptos::prelude::*;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};
use wasm_bindgen::JsCast;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let parsed = config::site_config();

    // initializes logging using the `log` crate
    let level = parsed
        .as_ref()
        .map(|c| c.log_level())
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = parsed.unwrap_or_else(|e| {
        log::warn!("site.json is invalid, using defaults: {}", e);
        SiteConfig::default()
    });

    mount(config).map_err(|e| {
        log::error!("startup halted: {}", e);
        JsValue::from(e)
    })
}

/// Clears the configured root element and mounts the app into it.
fn mount(config: SiteConfig) -> Result<(), StartupError> {
    let root = find_root(&config.root_selector)?;
    root.set_inner_html("");

    log::info!("mounting site into '{}'", config.root_selector);
    leptos::mount::mount_to(root, move || view! { <app::App config=config /> }).forget();
    Ok(())
}

fn find_root(selector: &str) -> Result<web_sys::HtmlElement, StartupError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(StartupError::NoDocument)?;

    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| StartupError::MissingRootElement {
            selector: selector.to_string(),
        })
}
