pub mod config;
pub mod location;
pub mod logging;
pub mod map;
pub mod packaging;
pub mod theme;

// Export configuration
pub use config::{AccessToken, AppConfig};

// Export locations
pub use location::{default_locations, MarkerLocation};

// Export map lifecycle and provider boundary
pub use map::{
    CanvasMap, CanvasMapProvider, Document, Lifecycle, MapProvider, MapStyle, MapView, MapWidget,
    Surface, WidgetConfig,
};

// Export packaging
pub use packaging::{BuildMode, PackagingManifest, SiteMetadata};

// Export theme support
pub use theme::{ResolvedTheme, Theme, ThemeColors, ThemeManager, ThemePreference};
