//! Map page rendering
//!
//! Lays out the full-page map area, feeds it to the map state, and paints the
//! widget once it exists.

use eframe::egui;
use cliffvibe::map::Surface;
use cliffvibe::ResolvedTheme;

use crate::state::{MapPageState, MAP_SURFACE_ID};

/// Renders the map page into the remaining space of `ui`.
pub fn render_map_page(ui: &mut egui::Ui, map: &mut MapPageState, theme: ResolvedTheme) {
    let rect = ui.available_rect_before_wrap();
    ui.allocate_rect(rect, egui::Sense::hover());

    map.on_frame(Surface::new(MAP_SURFACE_ID, rect.width(), rect.height()), theme);

    if map.view().is_inert() {
        // Inert pass: come back next frame to mount
        ui.ctx().request_repaint();
        return;
    }
    if let Some(widget) = map.view_mut().widget_mut() {
        widget.show(ui, rect);
    }
}
