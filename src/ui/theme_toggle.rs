//! Theme toggle button

use eframe::egui;
use cliffvibe::ThemePreference;

/// Renders the toggle. Returns true when clicked.
pub fn render_theme_toggle(ui: &mut egui::Ui, preference: ThemePreference) -> bool {
    let button = egui::Button::new(egui::RichText::new(preference.icon()).size(20.0))
        .min_size(egui::vec2(48.0, 48.0))
        .corner_radius(24.0);

    ui.add(button)
        .on_hover_text(format!("Theme: {} (click to switch to {})", preference, preference.next()))
        .clicked()
}
