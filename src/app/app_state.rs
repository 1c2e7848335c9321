//! Centralized application state for CliffVibe.
//!
//! Composed of focused state components so each keeps its own invariants and
//! the borrow checker lets panels take them independently.

use cliffvibe::map::Document;
use cliffvibe::{AppConfig, SiteMetadata, ThemePreference};

use crate::state::{MapPageState, Route, RouterState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Theme preference and resolution
    pub theme: ThemeState,

    /// Current page
    pub router: RouterState,

    /// Map page and its map view
    pub map: MapPageState,

    /// Site title and description
    pub metadata: SiteMetadata,
}

impl AppState {
    /// Creates the state from configuration and persisted preferences.
    pub fn new(config: &AppConfig, metadata: SiteMetadata, preference: ThemePreference, route: Route) -> Self {
        Self {
            theme: ThemeState::with_preference(preference),
            router: RouterState::new(route),
            map: MapPageState::new(config.locations(), Document::new(), config.access_token.clone()),
            metadata,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            &AppConfig::default(),
            SiteMetadata::default(),
            ThemePreference::default(),
            Route::default(),
        )
    }
}
