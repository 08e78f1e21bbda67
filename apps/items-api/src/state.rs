//! Application state management.

/// Shared application state, handed to route constructors.
///
/// The item store is not part of it: the items service owns its store and is
/// built once per router.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
}
