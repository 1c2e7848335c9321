//! Theme state management.
//!
//! This module encapsulates the user's theme preference, the last OS theme
//! reported by the windowing layer, and the palettes for both resolved themes.

use cliffvibe::{ResolvedTheme, ThemeManager, ThemePreference};

/// State related to visual theme.
///
/// Responsibilities:
/// - Tracking the user's preference
/// - Tracking the OS theme for `System` resolution
/// - Providing the resolved theme
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// User preference (persisted)
    preference: ThemePreference,
    /// OS theme as last reported, if known
    system: Option<ResolvedTheme>,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("preference", &self.preference)
            .field("system", &self.system)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::with_preference(ThemePreference::default())
    }
}

impl ThemeState {
    /// Creates a new theme state with a specific preference.
    pub fn with_preference(preference: ThemePreference) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            preference,
            system: None,
        }
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The concrete theme to render with.
    pub fn resolved(&self) -> ResolvedTheme {
        self.preference.resolve(self.system)
    }

    // ===== Theme Mutations =====

    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
    }

    /// Advances the preference the way the toggle button does.
    pub fn cycle_preference(&mut self) {
        self.set_preference(self.preference.next());
    }

    /// Records the OS theme reported for this frame.
    pub fn observe_system(&mut self, system: Option<ResolvedTheme>) {
        self.system = system;
    }
}
