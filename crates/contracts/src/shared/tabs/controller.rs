use super::descriptor::TabDescriptor;
use super::error::TabError;
use super::navigation::{circular_index, Direction};
use super::registry::TabRegistry;
use super::view::TabView;

/// The currently selected tab, as an index into the controller's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveTabState {
    index: usize,
}

impl ActiveTabState {
    /// State on page load: the first registry entry is active.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Result of a successful activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateOutcome {
    Changed {
        previous: &'static str,
        current: &'static str,
    },
    /// The requested tab was already active
    Unchanged,
}

/// Keeps exactly one button/panel pair active and moves the selection in
/// response to pointer and keyboard input.
pub struct TabController<V: TabView> {
    registry: TabRegistry,
    state: ActiveTabState,
    view: V,
}

impl<V: TabView> TabController<V> {
    /// Creates a controller in its initial state and pushes that state to the view.
    pub fn new(registry: TabRegistry, view: V) -> Self {
        let mut controller = Self {
            registry,
            state: ActiveTabState::initial(),
            view,
        };
        controller.sync_view();
        controller
    }

    pub fn registry(&self) -> TabRegistry {
        self.registry
    }

    pub fn state(&self) -> ActiveTabState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn active_index(&self) -> usize {
        self.state.index
    }

    pub fn active(&self) -> &'static TabDescriptor {
        // index always comes from a registry position
        &self.registry.as_slice()[self.state.index]
    }

    pub fn active_id(&self) -> &'static str {
        self.active().id
    }

    /// Marks `id` active and every other tab inactive.
    ///
    /// Unknown ids are rejected and leave both state and view untouched.
    pub fn activate(&mut self, id: &str) -> Result<ActivateOutcome, TabError> {
        let index = self
            .registry
            .position(id)
            .ok_or_else(|| TabError::UnknownTab(id.to_string()))?;

        let previous = self.active_id();
        self.state.index = index;
        self.sync_view();

        if previous == id {
            log::debug!("tab '{}' already active", id);
            return Ok(ActivateOutcome::Unchanged);
        }

        let current = self.active_id();
        log::debug!("tab switched: '{}' -> '{}'", previous, current);
        Ok(ActivateOutcome::Changed { previous, current })
    }

    /// Steps from the tab `from` (the focused button) one place in
    /// `direction`, wrapping at the ends, and activates the result.
    ///
    /// Returns the id of the newly active tab so the caller can focus it.
    pub fn navigate(&mut self, from: &str, direction: Direction) -> Result<&'static str, TabError> {
        let current = self
            .registry
            .position(from)
            .ok_or_else(|| TabError::UnknownTab(from.to_string()))?;
        let next = circular_index(current, direction, self.registry.len());
        let id = self.registry.as_slice()[next].id;
        self.activate(id)?;
        Ok(id)
    }

    /// Handles a keydown on the tab button `from`.
    ///
    /// `Ok(None)` means the key is not a navigation key and the event should
    /// be left alone.
    pub fn handle_key(&mut self, from: &str, key: &str) -> Result<Option<&'static str>, TabError> {
        match Direction::from_key(key) {
            Some(direction) => self.navigate(from, direction).map(Some),
            None => Ok(None),
        }
    }

    fn sync_view(&mut self) {
        let active = self.state.index;
        for (i, tab) in self.registry.iter().enumerate() {
            if i == active {
                self.view.set_active(tab.id);
            } else {
                self.view.set_inactive(tab.id);
            }
        }
    }
}
