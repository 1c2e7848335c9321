//! Interactive map: lifecycle, provider boundary and the egui widget.
//!
//! - `view` - [`MapView`] lifecycle and theme reactivity
//! - `style` - pure theme → widget configuration
//! - `provider` - traits and marker/popup values the view talks to
//! - `document` - document-wide style rules with scoped removal
//! - `projection` - Web Mercator helpers
//! - `canvas` - the egui-painted widget

pub mod canvas;
pub mod document;
pub mod projection;
pub mod provider;
pub mod style;
pub mod view;

pub use canvas::{CanvasMap, CanvasMapProvider};
pub use document::{Document, StyleRuleGuard};
pub use provider::{ControlPosition, MapProvider, MapWidget, Marker, NavigationControl, Popup, PopupContent, Surface};
pub use style::{widget_config, MapStyle, WidgetConfig};
pub use view::{Lifecycle, MapView};
