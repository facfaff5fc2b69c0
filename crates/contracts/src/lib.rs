//! Host-independent core of the site: tab registry, tab controller,
//! static page content and site configuration.
//!
//! Nothing in this crate touches the DOM, so everything here builds and
//! tests natively. The `frontend` crate binds it to Leptos.

pub mod shared;
pub mod site;
