//! Theme resolution and persistence coordination.

use cliffvibe::{ResolvedTheme, ThemePreference};

use crate::app::{AppState, SettingsCoordinator};

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference during startup. Defaults to `System`.
    pub fn load_preference(storage: Option<&dyn eframe::Storage>) -> ThemePreference {
        SettingsCoordinator::load_setting(storage, THEME_KEY)
    }

    /// Saves the theme preference.
    pub fn save_preference(storage: &mut dyn eframe::Storage, preference: ThemePreference) {
        SettingsCoordinator::save_setting(storage, THEME_KEY, &preference);
    }

    /// Resolves the theme for this frame and applies it to the egui context.
    ///
    /// Called every frame so OS theme switches are picked up.
    pub fn apply_current_theme(ctx: &egui::Context, state: &mut AppState) -> ResolvedTheme {
        state.theme.observe_system(ctx.system_theme().map(ResolvedTheme::from));
        let resolved = state.theme.resolved();
        ctx.set_visuals(state.theme.theme_manager().visuals(resolved));
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings_coordinator::tests::MockStorage;

    #[test]
    fn test_preference_round_trip() {
        let mut storage = MockStorage::new();
        assert_eq!(ThemeCoordinator::load_preference(Some(&storage)), ThemePreference::System);

        ThemeCoordinator::save_preference(&mut storage, ThemePreference::Dark);
        assert_eq!(ThemeCoordinator::load_preference(Some(&storage)), ThemePreference::Dark);
    }

    #[test]
    fn test_no_storage_uses_system() {
        assert_eq!(ThemeCoordinator::load_preference(None), ThemePreference::System);
    }
}
