//! Theme support module for CliffVibe
//!
//! This module provides the light/dark theming used by the site shell and the map.
//! A user picks a [`ThemePreference`]; the runtime resolves it against the
//! operating system theme into a concrete [`ResolvedTheme`], which is the only
//! input the map view uses to pick its style.
//!
//! # Examples
//!
//! ```
//! use cliffvibe::theme::{ThemePreference, ResolvedTheme};
//!
//! let resolved = ThemePreference::System.resolve(Some(ResolvedTheme::Dark));
//! assert_eq!(resolved, ResolvedTheme::Dark);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Theme chosen by the user. `System` follows the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete theme after resolving `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolves the preference against the OS theme.
    ///
    /// An unknown OS theme resolves to light.
    pub fn resolve(self, system: Option<ResolvedTheme>) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System => system.unwrap_or_default(),
        }
    }

    /// Next preference for the toggle button: Light → Dark → System → Light.
    pub fn next(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }

    /// Icon shown on the theme toggle.
    pub fn icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "☀",
            ThemePreference::Dark => "🌙",
            ThemePreference::System => "💻",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        };
        f.write_str(name)
    }
}

impl From<egui::Theme> for ResolvedTheme {
    fn from(theme: egui::Theme) -> Self {
        match theme {
            egui::Theme::Dark => ResolvedTheme::Dark,
            egui::Theme::Light => ResolvedTheme::Light,
        }
    }
}

/// Color palette for the site shell
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub primary: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
}

/// A theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Holds the palette for each resolved theme
pub struct ThemeManager {
    themes: HashMap<ResolvedTheme, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager with the light and dark themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert(ResolvedTheme::Light, light_theme());
        themes.insert(ResolvedTheme::Dark, dark_theme());

        Self { themes }
    }

    /// Retrieves the theme for a resolved value
    pub fn get_theme(&self, theme: ResolvedTheme) -> &Theme {
        // Both variants are inserted in `new`.
        &self.themes[&theme]
    }

    /// Builds egui visuals for a resolved theme
    pub fn visuals(&self, theme: ResolvedTheme) -> egui::Visuals {
        let mut visuals = match theme {
            ResolvedTheme::Light => egui::Visuals::light(),
            ResolvedTheme::Dark => egui::Visuals::dark(),
        };
        self.apply_theme(self.get_theme(theme), &mut visuals);
        visuals
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.primary;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#ffffff"),
            panel_background: hex_to_color32("#ffffff"),
            extreme_background: hex_to_color32("#f4f4f5"),

            text: hex_to_color32("#09090b"),
            text_dim: hex_to_color32("#71717a"),
            text_strong: hex_to_color32("#09090b"),

            primary: hex_to_color32("#18181b"),
            selection: hex_to_color32("#e4e4e7"),
            hover: hex_to_color32("#f4f4f5"),
            border: hex_to_color32("#e4e4e7"),

            accent: hex_to_color32("#2563eb"),
            error: hex_to_color32("#dc2626"),
            warning: hex_to_color32("#d97706"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#09090b"),
            panel_background: hex_to_color32("#09090b"),
            extreme_background: hex_to_color32("#18181b"),

            text: hex_to_color32("#fafafa"),
            text_dim: hex_to_color32("#a1a1aa"),
            text_strong: hex_to_color32("#fafafa"),

            primary: hex_to_color32("#fafafa"),
            selection: hex_to_color32("#27272a"),
            hover: hex_to_color32("#27272a"),
            border: hex_to_color32("#27272a"),

            accent: hex_to_color32("#60a5fa"),
            error: hex_to_color32("#f87171"),
            warning: hex_to_color32("#fbbf24"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
