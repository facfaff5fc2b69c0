use thiserror::Error;

/// Errors raised by the tab registry and controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("unknown tab id '{0}'")]
    UnknownTab(String),

    #[error("tab registry is empty")]
    EmptyRegistry,

    #[error("duplicate tab id '{0}'")]
    DuplicateTab(String),
}
