//! Panel orchestration and layout management.
//!
//! Places the navbar and the current page, and turns page-level interactions
//! into [`PanelInteraction`]s for the application to handle.

use cliffvibe::ResolvedTheme;

use crate::app::AppState;
use crate::state::Route;
use crate::ui::{home_page, login_page, map_page, navbar};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInteraction {
    /// User asked to open a page
    Navigate(Route),
    /// User clicked the theme toggle
    ToggleTheme,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole window for the current route.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        theme: ResolvedTheme,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let route = state.router.current();
        let colors = state.theme.theme_manager().get_theme(theme).colors.clone();

        if route.shows_navbar() {
            egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
                if let Some(target) = navbar::render_navbar(ui, route, &state.metadata.title) {
                    interaction = Some(PanelInteraction::Navigate(target));
                }
            });
        }

        // The map fills the page edge to edge
        let frame = match route {
            Route::Map => egui::Frame::NONE,
            Route::Home | Route::Login => egui::Frame::default()
                .inner_margin(egui::Margin::same(16))
                .fill(colors.background),
        };

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| match route {
            Route::Home => {
                if let Some(home) = home_page::render_home_page(ui, state, &colors) {
                    interaction = Some(match home {
                        home_page::HomeInteraction::ExploreRequested => PanelInteraction::Navigate(Route::Map),
                        home_page::HomeInteraction::ThemeToggled => PanelInteraction::ToggleTheme,
                    });
                }
            }
            Route::Map => map_page::render_map_page(ui, &mut state.map, theme),
            Route::Login => {
                if login_page::render_login_page(ui) {
                    interaction = Some(PanelInteraction::Navigate(Route::Home));
                }
            }
        });

        interaction
    }
}
