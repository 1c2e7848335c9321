//! Home page rendering
//!
//! Landing hero with the call to action and the theme toggle.

use eframe::egui;
use egui::RichText;
use cliffvibe::ThemeColors;

use crate::app::AppState;
use crate::ui::theme_toggle::render_theme_toggle;

pub const HEADLINE: &str = "TAKE THE LEAP";
pub const TAGLINE: &str = "Community-driven spots for thrill seekers.";
pub const CATEGORIES: [&str; 5] = ["Cliffs", "Bridges", "Buildings", "Water", "Urban"];

/// Result of user interaction with the home page
pub enum HomeInteraction {
    /// "EXPLORE" clicked
    ExploreRequested,
    ThemeToggled,
}

pub fn categories_line() -> String {
    CATEGORIES.join(" • ")
}

/// Renders the home page
pub fn render_home_page(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) -> Option<HomeInteraction> {
    let mut interaction = None;

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.25).max(32.0));

        ui.label(RichText::new(HEADLINE).size(72.0).strong().color(colors.text_strong));
        ui.add_space(24.0);
        ui.label(RichText::new(TAGLINE).size(20.0).color(colors.text_dim));
        ui.add_space(6.0);
        ui.label(RichText::new(categories_line()).size(16.0).color(colors.text));
        ui.add_space(32.0);

        ui.horizontal(|ui| {
            // Center the button row
            let row_width = 200.0 + 24.0 + 48.0;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

            let explore = egui::Button::new(RichText::new("EXPLORE").size(18.0).strong().color(colors.background))
                .fill(colors.primary)
                .min_size(egui::vec2(200.0, 48.0))
                .corner_radius(24.0);
            if ui.add(explore).clicked() {
                interaction = Some(HomeInteraction::ExploreRequested);
            }

            ui.add_space(24.0);

            if render_theme_toggle(ui, state.theme.preference()) {
                interaction = Some(HomeInteraction::ThemeToggled);
            }
        });
    });

    interaction
}
