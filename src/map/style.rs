//! Style selection for the map widget.
//!
//! The widget configuration is a pure function of the resolved theme, so a
//! theme change is just a change of key: the old widget goes, a new one is
//! built from the new configuration.

use crate::config::AccessToken;
use crate::theme::ResolvedTheme;

/// Initial map center as `[lng, lat]` (Central Europe).
pub const INITIAL_CENTER: [f64; 2] = [13.4, 47.5];
/// Initial zoom level.
pub const INITIAL_ZOOM: f64 = 5.0;

/// Basemap style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapStyle {
    Outdoors,
    Dark,
}

impl MapStyle {
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Dark => MapStyle::Dark,
            ResolvedTheme::Light => MapStyle::Outdoors,
        }
    }

    /// Provider style identifier.
    pub fn style_url(self) -> &'static str {
        match self {
            MapStyle::Outdoors => "mapbox://styles/mapbox/outdoors-v12",
            MapStyle::Dark => "mapbox://styles/mapbox/dark-v11",
        }
    }
}

/// Everything the provider needs to construct a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub style: MapStyle,
    /// `[lng, lat]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub attribution_control: bool,
    pub access_token: Option<AccessToken>,
}

/// Builds the widget configuration for a resolved theme.
pub fn widget_config(theme: ResolvedTheme, access_token: Option<&AccessToken>) -> WidgetConfig {
    WidgetConfig {
        style: MapStyle::for_theme(theme),
        center: INITIAL_CENTER,
        zoom: INITIAL_ZOOM,
        attribution_control: false,
        access_token: access_token.cloned(),
    }
}
