//! Map provider boundary.
//!
//! `MapView` only talks to a map implementation through these traits and the
//! plain marker/popup values below. The canvas widget in [`crate::map::canvas`]
//! is the production implementation; tests plug in recording fakes.

use crate::location::MarkerLocation;
use crate::map::style::WidgetConfig;

/// Coordinate pair in `[lng, lat]` order.
pub type LngLat = [f64; 2];

/// UI region a widget renders into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Stable identity of the hosting element
    pub id: u64,
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(id: u64, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

/// Screen corner for map controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Zoom buttons plus a reset-view button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationControl {
    pub show_zoom: bool,
    pub show_compass: bool,
}

impl Default for NavigationControl {
    fn default() -> Self {
        Self {
            show_zoom: true,
            show_compass: true,
        }
    }
}

/// Text shown inside a popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub description: Option<String>,
}

impl PopupContent {
    pub fn from_location(location: &MarkerLocation) -> Self {
        Self {
            title: location.title.clone(),
            description: location.description.clone(),
        }
    }

    /// Rendered lines: title, then the description when present.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.title.as_str()];
        if let Some(description) = &self.description {
            lines.push(description.as_str());
        }
        lines
    }
}

/// Informational panel attached to a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    content: Option<PopupContent>,
    /// Distance in points between the marker tip and the popup
    offset: f32,
}

impl Default for Popup {
    fn default() -> Self {
        Self {
            content: None,
            offset: 25.0,
        }
    }
}

impl Popup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_content(mut self, content: PopupContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn content(&self) -> Option<&PopupContent> {
        self.content.as_ref()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// Point overlay, optionally with a popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    id: Option<String>,
    lng_lat: LngLat,
    popup: Option<Popup>,
}

impl Marker {
    pub fn new(lng_lat: LngLat) -> Self {
        Self {
            id: None,
            lng_lat,
            popup: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    /// Attaches the marker to a widget.
    pub fn add_to<W: MapWidget + ?Sized>(self, widget: &mut W) {
        widget.add_marker(self);
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn lng_lat(&self) -> LngLat {
        self.lng_lat
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }
}

/// Builds the marker + popup pair for one location.
pub fn marker_for(location: &MarkerLocation) -> Marker {
    Marker::new(location.lng_lat())
        .with_id(location.id.clone())
        .with_popup(Popup::new().with_content(PopupContent::from_location(location)))
}

/// A live map instance.
pub trait MapWidget {
    /// Configuration the widget was built with
    fn config(&self) -> &WidgetConfig;

    /// Adds a control at a screen corner
    fn add_control(&mut self, control: NavigationControl, position: ControlPosition);

    /// Adds a marker; its popup travels with it
    fn add_marker(&mut self, marker: Marker);

    /// Markers currently attached
    fn markers(&self) -> &[Marker];

    /// Releases everything the widget holds. Must be safe to call once per widget.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// Factory for map widgets.
pub trait MapProvider {
    type Widget: MapWidget;

    /// Constructs a widget on the given surface.
    fn create(&mut self, surface: &Surface, config: &WidgetConfig) -> Self::Widget;
}
