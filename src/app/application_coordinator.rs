//! Application-level coordination.
//!
//! Page navigation and theme toggling, plus the map teardown that leaving the
//! map page implies.

use crate::app::AppState;
use crate::state::Route;

/// Coordinates application-level operations.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Switches to `route`. Leaving the map page tears the map down.
    pub fn navigate(state: &mut AppState, route: Route) {
        let previous = state.router.navigate(route);
        if previous == route {
            return;
        }
        tracing::debug!(from = previous.path(), to = route.path(), "navigate");
        if previous == Route::Map {
            state.map.teardown();
        }
    }

    /// Advances the theme preference (Light → Dark → System).
    ///
    /// The map picks the change up on the next frame through the resolved theme.
    pub fn toggle_theme(state: &mut AppState) {
        state.theme.cycle_preference();
        tracing::info!(preference = %state.theme.preference(), "theme preference changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MAP_SURFACE_ID;
    use cliffvibe::map::document::ATTRIBUTION_SELECTOR;
    use cliffvibe::map::Surface;
    use cliffvibe::{MapStyle, MapWidget, ResolvedTheme, ThemePreference};

    fn open_map(state: &mut AppState) {
        ApplicationCoordinator::navigate(state, Route::Map);
        let surface = Surface::new(MAP_SURFACE_ID, 800.0, 600.0);
        state.map.on_frame(surface, state.theme.resolved());
        state.map.on_frame(surface, state.theme.resolved());
    }

    #[test]
    fn test_leaving_map_tears_it_down() {
        let mut state = AppState::default();
        open_map(&mut state);
        assert!(!state.map.view().is_inert());
        assert!(state.map.view().document().is_hidden(ATTRIBUTION_SELECTOR));

        ApplicationCoordinator::navigate(&mut state, Route::Home);
        assert!(state.map.view().is_inert());
        assert!(!state.map.view().document().is_hidden(ATTRIBUTION_SELECTOR));
    }

    #[test]
    fn test_navigating_to_same_route_keeps_map() {
        let mut state = AppState::default();
        open_map(&mut state);
        ApplicationCoordinator::navigate(&mut state, Route::Map);
        assert!(!state.map.view().is_inert());
    }

    #[test]
    fn test_toggle_theme_restyles_map() {
        let mut state = AppState::default();
        state.theme.set_preference(ThemePreference::Light);
        open_map(&mut state);
        assert_eq!(state.map.view().widget().unwrap().config().style, MapStyle::Outdoors);

        ApplicationCoordinator::toggle_theme(&mut state);
        assert_eq!(state.theme.resolved(), ResolvedTheme::Dark);
        let surface = Surface::new(MAP_SURFACE_ID, 800.0, 600.0);
        state.map.on_frame(surface, state.theme.resolved());
        assert_eq!(state.map.view().widget().unwrap().config().style, MapStyle::Dark);
        assert_eq!(state.map.view().provider().created(), 2);
    }
}
