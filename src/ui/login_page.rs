//! Login page rendering
//!
//! Accounts are not part of the site yet; the page only leads back home.

use eframe::egui;

/// Renders the login page. Returns true when the user asks to go home.
pub fn render_login_page(ui: &mut egui::Ui) -> bool {
    let mut go_home = false;
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.3).max(32.0));
        ui.heading("Sign in");
        ui.add_space(8.0);
        ui.label("Accounts are not available yet.");
        ui.add_space(16.0);
        if ui.button("Back to home").clicked() {
            go_home = true;
        }
    });
    go_home
}
