//! Map page state.
//!
//! Wraps the [`MapView`] with the two-phase mount the page needs: the first
//! frame after the page opens only lays out an empty area, and the widget is
//! created on the next frame once that area is known to be on screen.

use cliffvibe::map::{CanvasMapProvider, Document, MapView, Surface};
use cliffvibe::{AccessToken, MarkerLocation, ResolvedTheme};
use std::sync::Arc;

/// Identity of the map page's hosting surface.
pub const MAP_SURFACE_ID: u64 = 1;

pub struct MapPageState {
    view: MapView<CanvasMapProvider>,
    /// Set after the first (inert) layout pass of the page
    layout_confirmed: bool,
}

impl MapPageState {
    pub fn new(
        locations: Arc<[MarkerLocation]>,
        document: Document,
        access_token: Option<AccessToken>,
    ) -> Self {
        let provider = CanvasMapProvider::new(document.clone());
        Self {
            view: MapView::new(provider, locations, document).with_access_token(access_token),
            layout_confirmed: false,
        }
    }

    pub fn view(&self) -> &MapView<CanvasMapProvider> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MapView<CanvasMapProvider> {
        &mut self.view
    }

    /// Feeds one frame's layout and theme into the view.
    ///
    /// The first frame after the page opens is the inert pass.
    pub fn on_frame(&mut self, surface: Surface, theme: ResolvedTheme) {
        if !self.layout_confirmed {
            self.layout_confirmed = true;
            return;
        }
        self.view.attach_surface(surface);
        self.view.set_resolved_theme(theme);
    }

    /// The page was left: dispose the widget and start over on return.
    pub fn teardown(&mut self) {
        self.view.unmount();
        self.layout_confirmed = false;
    }
}
