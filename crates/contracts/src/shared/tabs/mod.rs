//! Tab management
//!
//! Contains:
//! - `descriptor` - static definition of one navigable section
//! - `registry` - ordered, validated list of descriptors
//! - `navigation` - circular index arithmetic for arrow-key switching
//! - `view` - view-update trait the controller drives
//! - `controller` - owns the active-tab state and keeps one pair active
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::tabs::{TabController, TabRegistry};
//! use contracts::site::SITE_TABS;
//!
//! let registry = TabRegistry::new(SITE_TABS)?;
//! let mut controller = TabController::new(registry, view);
//! controller.activate("about")?;
//! ```

mod controller;
mod descriptor;
mod error;
mod navigation;
mod registry;
mod view;

pub use controller::{ActivateOutcome, ActiveTabState, TabController};
pub use descriptor::TabDescriptor;
pub use error::TabError;
pub use navigation::{circular_index, Direction};
pub use registry::TabRegistry;
pub use view::TabView;
