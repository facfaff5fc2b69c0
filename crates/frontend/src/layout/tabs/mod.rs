//! Tab management module
//!
//! Contains:
//! - `context` - `TabsContext`, the controller shared through Leptos context
//! - `nav` - tab buttons with click and arrow-key handling
//! - `page` - tab panels, built once and toggled
//! - `registry` - mapping tab id → content view

pub mod context;
pub mod nav;
pub mod page;
pub mod registry;

pub use context::{SignalTabView, TabsContext};
pub use nav::TabNav;
pub use page::TabPanels;
