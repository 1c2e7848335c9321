//! CliffVibe GUI Application
//!
//! Landing page and interactive map of extreme spots, built with egui.
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators
//! - `state/` - Theme, routing and map page state
//! - `ui/` - Navbar, pages and panel orchestration
//!
//! The map itself (lifecycle, provider boundary, canvas widget) lives in the
//! `cliffvibe` library.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use cliffvibe::{logging, AppConfig, SiteMetadata};
use state::Route;
use ui::panel_manager::{PanelInteraction, PanelManager};

const ROUTE_KEY: &str = "route";

/// Entry point: `cliffvibe [PATH]`, where PATH is a page such as `/map`.
fn main() -> eframe::Result {
    logging::init_logging();

    let initial_route = std::env::args().nth(1).and_then(|path| {
        let route = Route::from_path(&path);
        if route.is_none() {
            tracing::warn!(path = %path, "unknown page; opening the last visited one");
        }
        route
    });

    let config = AppConfig::load();
    config.report_problems();
    let metadata = SiteMetadata::default();
    let title = metadata.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title(format!("{} - {}", metadata.title, metadata.description)),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(CliffVibeApp::new(cc, &config, metadata, initial_route)))),
    )
}

/// The CliffVibe application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles navigation and theme toggling
/// - `ThemeCoordinator` resolves, applies and persists the theme
/// - `PanelManager` lays out and renders the pages
struct CliffVibeApp {
    state: AppState,
}

impl CliffVibeApp {
    /// Creates the app with preferences loaded from persistent storage.
    fn new(
        cc: &eframe::CreationContext,
        config: &AppConfig,
        metadata: SiteMetadata,
        initial_route: Option<Route>,
    ) -> Self {
        let preference = ThemeCoordinator::load_preference(cc.storage);
        let route = initial_route
            .unwrap_or_else(|| SettingsCoordinator::load_setting_or(cc.storage, ROUTE_KEY, Route::Home));
        tracing::info!(route = route.path(), %preference, "starting");

        Self {
            state: AppState::new(config, metadata, preference, route),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::Navigate(route) => ApplicationCoordinator::navigate(&mut self.state, route),
            PanelInteraction::ToggleTheme => ApplicationCoordinator::toggle_theme(&mut self.state),
        }
    }
}

impl eframe::App for CliffVibeApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_preference(storage, self.state.theme.preference());
        SettingsCoordinator::save_setting(storage, ROUTE_KEY, &self.state.router.current());
    }

    /// Main update loop:
    /// 1. Resolve and apply the theme
    /// 2. Render the navbar and current page
    /// 3. Handle page interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = ThemeCoordinator::apply_current_theme(ctx, &mut self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, theme) {
            self.handle_panel_interaction(interaction);
            ctx.request_repaint();
        }
    }
}
