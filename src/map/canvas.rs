//! Map widget painted with egui.
//!
//! Draws a schematic basemap (background and graticule) in the style's palette,
//! marker pins with click-to-open popups, the navigation control and the
//! provider branding. Drag pans, scroll zooms.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Vec2};

use crate::map::document::{Document, ATTRIBUTION_SELECTOR, LOGO_SELECTOR};
use crate::map::projection;
use crate::map::provider::{ControlPosition, LngLat, MapProvider, MapWidget, Marker, NavigationControl, Surface};
use crate::map::style::{MapStyle, WidgetConfig};
use crate::theme::{hex_to_color32, with_alpha};

const CONTROL_BUTTON_SIZE: f32 = 28.0;
const CONTROL_MARGIN: f32 = 10.0;
const PIN_RADIUS: f32 = 7.0;
const PIN_HEIGHT: f32 = 18.0;
/// Click distance in points that still selects a marker
const HIT_RADIUS: f32 = 14.0;
const SCROLL_ZOOM_RATE: f64 = 1.0 / 200.0;

/// Colors for one basemap style.
#[derive(Debug, Clone)]
pub struct MapPalette {
    pub land: Color32,
    pub graticule: Color32,
    pub equator: Color32,
    pub label: Color32,
    pub marker: Color32,
    pub marker_outline: Color32,
    pub popup_background: Color32,
    pub popup_text: Color32,
    pub popup_text_dim: Color32,
    pub control_background: Color32,
}

impl MapPalette {
    pub fn for_style(style: MapStyle) -> Self {
        match style {
            MapStyle::Outdoors => Self {
                land: hex_to_color32("#e8ecdc"),
                graticule: hex_to_color32("#c9d3b5"),
                equator: hex_to_color32("#a7b98a"),
                label: hex_to_color32("#5b6b4a"),
                marker: hex_to_color32("#e55e5e"),
                marker_outline: hex_to_color32("#ffffff"),
                popup_background: hex_to_color32("#ffffff"),
                popup_text: hex_to_color32("#111111"),
                popup_text_dim: hex_to_color32("#555555"),
                control_background: hex_to_color32("#ffffff"),
            },
            MapStyle::Dark => Self {
                land: hex_to_color32("#191a1a"),
                graticule: hex_to_color32("#2c2e2f"),
                equator: hex_to_color32("#3f4244"),
                label: hex_to_color32("#8a8f93"),
                marker: hex_to_color32("#ff8c42"),
                marker_outline: hex_to_color32("#191a1a"),
                popup_background: hex_to_color32("#242526"),
                popup_text: hex_to_color32("#f0f0f0"),
                popup_text_dim: hex_to_color32("#a8a8a8"),
                control_background: hex_to_color32("#2f3133"),
            },
        }
    }
}

/// Navigation button actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    ZoomIn,
    ZoomOut,
    ResetView,
}

/// Map widget rendered onto an egui surface.
pub struct CanvasMap {
    config: WidgetConfig,
    surface: Surface,
    document: Document,
    center: LngLat,
    zoom: f64,
    markers: Vec<Marker>,
    controls: Vec<(NavigationControl, ControlPosition)>,
    open_popup: Option<usize>,
    disposed: bool,
}

impl CanvasMap {
    fn new(surface: Surface, config: &WidgetConfig, document: Document) -> Self {
        Self {
            config: config.clone(),
            surface,
            document,
            center: config.center,
            zoom: projection::clamp_zoom(config.zoom),
            markers: Vec::new(),
            controls: Vec::new(),
            open_popup: None,
            disposed: false,
        }
    }

    pub fn center(&self) -> LngLat {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn open_popup(&self) -> Option<usize> {
        self.open_popup
    }

    pub fn controls(&self) -> &[(NavigationControl, ControlPosition)] {
        &self.controls
    }

    pub fn apply(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::ZoomIn => self.zoom = projection::clamp_zoom(self.zoom + 1.0),
            NavigationAction::ZoomOut => self.zoom = projection::clamp_zoom(self.zoom - 1.0),
            NavigationAction::ResetView => {
                self.center = self.config.center;
                self.zoom = projection::clamp_zoom(self.config.zoom);
            }
        }
    }

    /// Screen position of each marker's tip inside `rect`.
    pub fn marker_positions(&self, rect: Rect) -> Vec<Pos2> {
        let origin = rect.center();
        self.markers
            .iter()
            .map(|marker| {
                let (dx, dy) = projection::screen_offset(marker.lng_lat(), self.center, self.zoom);
                origin + Vec2::new(dx as f32, dy as f32)
            })
            .collect()
    }

    /// Index of the marker whose pin is closest to `pos`, within the hit radius.
    pub fn hit_test(&self, rect: Rect, pos: Pos2) -> Option<usize> {
        self.marker_positions(rect)
            .into_iter()
            .enumerate()
            .map(|(i, tip)| (i, pin_center(tip).distance(pos)))
            .filter(|(_, distance)| *distance <= HIT_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Handles a click: toggles the hit marker's popup, closes it otherwise.
    pub fn click(&mut self, rect: Rect, pos: Pos2) {
        self.open_popup = match self.hit_test(rect, pos) {
            Some(i) if self.open_popup == Some(i) => None,
            Some(i) => Some(i),
            None => None,
        };
    }

    /// Whether the attribution text and the logo are drawn.
    pub fn branding_visible(&self) -> (bool, bool) {
        let attribution = self.config.attribution_control && !self.document.is_hidden(ATTRIBUTION_SELECTOR);
        let logo = !self.document.is_hidden(LOGO_SELECTOR);
        (attribution, logo)
    }

    /// Paints the widget into `rect` and handles input.
    pub fn show(&mut self, ui: &mut egui::Ui, rect: Rect) -> egui::Response {
        let response = ui.interact(rect, ui.id().with(("canvas_map", self.surface.id)), Sense::click_and_drag());
        if self.disposed {
            return response;
        }
        self.surface.width = rect.width();
        self.surface.height = rect.height();

        if response.dragged() {
            let delta = response.drag_delta();
            self.center = projection::pan(self.center, self.zoom, delta.x as f64, delta.y as f64);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.zoom = projection::clamp_zoom(self.zoom + scroll as f64 * SCROLL_ZOOM_RATE);
            }
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.click(rect, pos);
            }
        }

        let palette = MapPalette::for_style(self.config.style);
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, palette.land);
        self.paint_graticule(&painter, rect, &palette);
        self.paint_markers(&painter, rect, &palette);
        self.paint_branding(&painter, rect, &palette);

        let mut actions = Vec::new();
        for (control, position) in self.controls.clone() {
            actions.extend(show_navigation_control(ui, rect, control, position, &palette));
        }
        for action in actions {
            self.apply(action);
        }

        if response.dragged() || response.hovered() {
            ui.ctx().request_repaint();
        }
        response
    }

    fn paint_graticule(&self, painter: &egui::Painter, rect: Rect, palette: &MapPalette) {
        let step = projection::graticule_step(self.zoom);
        let origin = rect.center();
        let stroke = Stroke::new(1.0, palette.graticule);

        // Visible longitude/latitude span from the corners
        let (cx, cy) = projection::lng_lat_to_world(self.center, self.zoom);
        let half = rect.size() / 2.0;
        let west = projection::world_to_lng_lat(cx - half.x as f64, cy, self.zoom)[0];
        let east = projection::world_to_lng_lat(cx + half.x as f64, cy, self.zoom)[0];
        let north = projection::world_to_lng_lat(cx, cy - half.y as f64, self.zoom)[1];
        let south = projection::world_to_lng_lat(cx, cy + half.y as f64, self.zoom)[1];

        let mut lng = (west / step).floor() * step;
        while lng <= east {
            let (dx, _) = projection::screen_offset([lng, self.center[1]], self.center, self.zoom);
            let x = origin.x + dx as f32;
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
            lng += step;
        }

        let mut lat = (south / step).floor() * step;
        while lat <= north {
            let (_, dy) = projection::screen_offset([self.center[0], lat], self.center, self.zoom);
            let y = origin.y + dy as f32;
            let line_stroke = if lat.abs() < step / 2.0 {
                Stroke::new(1.5, palette.equator)
            } else {
                stroke
            };
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], line_stroke);
            painter.text(
                Pos2::new(rect.left() + 4.0, y - 2.0),
                Align2::LEFT_BOTTOM,
                format!("{:.1}°", lat),
                FontId::proportional(10.0),
                palette.label,
            );
            lat += step;
        }
    }

    fn paint_markers(&self, painter: &egui::Painter, rect: Rect, palette: &MapPalette) {
        let positions = self.marker_positions(rect);
        for tip in &positions {
            if !rect.expand(PIN_HEIGHT).contains(*tip) {
                continue;
            }
            let center = pin_center(*tip);
            painter.add(Shape::convex_polygon(
                vec![*tip, center + Vec2::new(-PIN_RADIUS * 0.8, 2.0), center + Vec2::new(PIN_RADIUS * 0.8, 2.0)],
                palette.marker,
                Stroke::NONE,
            ));
            painter.circle_filled(center, PIN_RADIUS, palette.marker);
            painter.circle_stroke(center, PIN_RADIUS, Stroke::new(1.5, palette.marker_outline));
            painter.circle_filled(center, PIN_RADIUS * 0.35, palette.marker_outline);
        }

        let Some(index) = self.open_popup else {
            return;
        };
        let (Some(marker), Some(tip)) = (self.markers.get(index), positions.get(index)) else {
            return;
        };
        let Some(popup) = marker.popup() else {
            return;
        };
        let Some(content) = popup.content() else {
            return;
        };

        let title = painter.layout_no_wrap(content.title.clone(), FontId::proportional(14.0), palette.popup_text);
        let description = content
            .description
            .as_ref()
            .map(|d| painter.layout_no_wrap(d.clone(), FontId::proportional(12.0), palette.popup_text_dim));

        let padding = Vec2::splat(8.0);
        let mut size = title.size();
        if let Some(description) = &description {
            size.x = size.x.max(description.size().x);
            size.y += 4.0 + description.size().y;
        }
        let box_size = size + padding * 2.0;
        let anchor = *tip - Vec2::new(0.0, popup.offset());
        let box_rect = Rect::from_min_size(anchor - Vec2::new(box_size.x / 2.0, box_size.y), box_size);

        painter.rect_filled(box_rect.translate(Vec2::new(0.0, 2.0)), 6.0, with_alpha(Color32::BLACK, 40));
        painter.rect_filled(box_rect, 6.0, palette.popup_background);
        painter.rect_stroke(box_rect, 6.0, Stroke::new(1.0, palette.graticule), StrokeKind::Inside);

        let mut cursor = box_rect.min + padding;
        let title_height = title.size().y;
        painter.galley(cursor, title, palette.popup_text);
        if let Some(description) = description {
            cursor.y += title_height + 4.0;
            painter.galley(cursor, description, palette.popup_text_dim);
        }
    }

    fn paint_branding(&self, painter: &egui::Painter, rect: Rect, palette: &MapPalette) {
        let (attribution, logo) = self.branding_visible();
        if attribution {
            painter.text(
                rect.right_bottom() - Vec2::new(4.0, 4.0),
                Align2::RIGHT_BOTTOM,
                "© CliffVibe contributors",
                FontId::proportional(10.0),
                palette.label,
            );
        }
        if logo {
            painter.text(
                rect.left_bottom() + Vec2::new(6.0, -6.0),
                Align2::LEFT_BOTTOM,
                "◆ map",
                FontId::proportional(12.0),
                palette.label,
            );
        }
    }
}

impl MapWidget for CanvasMap {
    fn config(&self) -> &WidgetConfig {
        &self.config
    }

    fn add_control(&mut self, control: NavigationControl, position: ControlPosition) {
        self.controls.push((control, position));
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.markers.clear();
        self.controls.clear();
        self.open_popup = None;
        self.disposed = true;
        tracing::debug!(surface = self.surface.id, "canvas map disposed");
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Builds [`CanvasMap`] widgets.
#[derive(Debug, Clone, Default)]
pub struct CanvasMapProvider {
    document: Document,
    created: u64,
}

impl CanvasMapProvider {
    /// Widgets consult `document` for rules that hide their branding.
    pub fn new(document: Document) -> Self {
        Self { document, created: 0 }
    }

    /// Number of widgets built so far.
    pub fn created(&self) -> u64 {
        self.created
    }
}

impl MapProvider for CanvasMapProvider {
    type Widget = CanvasMap;

    fn create(&mut self, surface: &Surface, config: &WidgetConfig) -> CanvasMap {
        self.created += 1;
        tracing::debug!(surface = surface.id, style = config.style.style_url(), "canvas map created");
        CanvasMap::new(*surface, config, self.document.clone())
    }
}

fn pin_center(tip: Pos2) -> Pos2 {
    tip - Vec2::new(0.0, PIN_HEIGHT - PIN_RADIUS)
}

/// Top-left corner of a control block of `size` placed at `position`.
fn control_origin(rect: Rect, position: ControlPosition, size: Vec2) -> Pos2 {
    let x = match position {
        ControlPosition::TopLeft | ControlPosition::BottomLeft => rect.left() + CONTROL_MARGIN,
        ControlPosition::TopRight | ControlPosition::BottomRight => rect.right() - CONTROL_MARGIN - size.x,
    };
    let y = match position {
        ControlPosition::TopLeft | ControlPosition::TopRight => rect.top() + CONTROL_MARGIN,
        ControlPosition::BottomLeft | ControlPosition::BottomRight => rect.bottom() - CONTROL_MARGIN - size.y,
    };
    Pos2::new(x, y)
}

fn show_navigation_control(
    ui: &mut egui::Ui,
    rect: Rect,
    control: NavigationControl,
    position: ControlPosition,
    palette: &MapPalette,
) -> Vec<NavigationAction> {
    let mut buttons = Vec::new();
    if control.show_zoom {
        buttons.push(("+", "Zoom in", NavigationAction::ZoomIn));
        buttons.push(("−", "Zoom out", NavigationAction::ZoomOut));
    }
    if control.show_compass {
        buttons.push(("⌖", "Reset view", NavigationAction::ResetView));
    }

    let size = Vec2::new(CONTROL_BUTTON_SIZE, CONTROL_BUTTON_SIZE * buttons.len() as f32);
    let origin = control_origin(rect, position, size);

    let mut actions = Vec::new();
    for (i, (label, hover, action)) in buttons.into_iter().enumerate() {
        let button_rect = Rect::from_min_size(
            origin + Vec2::new(0.0, i as f32 * CONTROL_BUTTON_SIZE),
            Vec2::splat(CONTROL_BUTTON_SIZE),
        );
        let button = egui::Button::new(egui::RichText::new(label).size(16.0).color(palette.popup_text))
            .fill(palette.control_background);
        if ui.put(button_rect, button).on_hover_text(hover).clicked() {
            actions.push(action);
        }
    }
    actions
}
