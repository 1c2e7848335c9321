//! Navigation bar rendering
//!
//! Brand link on the left, page buttons on the right.

use eframe::egui;
use egui::RichText;

use crate::state::Route;

/// Renders the navigation bar.
///
/// # Returns
/// * `Option<Route>` - Page the user asked to open
pub fn render_navbar(ui: &mut egui::Ui, current: Route, brand: &str) -> Option<Route> {
    let mut requested = None;

    ui.horizontal(|ui| {
        ui.set_min_height(48.0);

        let brand_button = egui::Button::new(RichText::new(format!("⛰ {}", brand)).strong().size(18.0)).frame(false);
        if ui.add(brand_button).clicked() {
            requested = Some(Route::Home);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left: last item first
            for (route, label) in [(Route::Map, "Map"), (Route::Home, "Home")] {
                if ui.selectable_label(current == route, label).clicked() {
                    requested = Some(route);
                }
            }
        });
    });

    requested.filter(|route| *route != current)
}
