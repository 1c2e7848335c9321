//! Map view lifecycle.
//!
//! A [`MapView`] owns at most one live widget. It builds the widget once both a
//! hosting surface and a resolved theme are known, rebuilds it from scratch
//! whenever the resolved theme changes, and disposes it on teardown.
//!
//! ```text
//! Unmounted -> Mounting -> Ready -> Reinitializing -> Ready -> Unmounted
//! ```
//!
//! `Mounting` and `Reinitializing` only exist while a call to
//! [`MapView::attach_surface`] or [`MapView::set_resolved_theme`] is running;
//! between calls the view is either `Unmounted` or `Ready`.

use std::sync::Arc;

use crate::config::AccessToken;
use crate::location::MarkerLocation;
use crate::map::document::{self, Document, StyleRuleGuard};
use crate::map::provider::{marker_for, ControlPosition, MapProvider, MapWidget, NavigationControl, Surface};
use crate::map::style::widget_config;
use crate::theme::ResolvedTheme;

/// Lifecycle state of a [`MapView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unmounted,
    Mounting,
    Ready,
    Reinitializing,
}

/// Live widget together with the theme it was built for.
struct Mounted<W> {
    widget: W,
    theme: ResolvedTheme,
}

/// Owner of the map widget.
pub struct MapView<P: MapProvider> {
    provider: P,
    locations: Arc<[MarkerLocation]>,
    document: Document,
    access_token: Option<AccessToken>,
    lifecycle: Lifecycle,
    surface: Option<Surface>,
    theme: Option<ResolvedTheme>,
    mounted: Option<Mounted<P::Widget>>,
    /// Held for the whole mount, across theme rebuilds
    attribution: Option<StyleRuleGuard>,
}

impl<P: MapProvider> MapView<P> {
    /// Creates an unmounted view. Nothing is constructed until a surface and a
    /// theme have both been supplied.
    pub fn new(provider: P, locations: Arc<[MarkerLocation]>, document: Document) -> Self {
        Self {
            provider,
            locations,
            document,
            access_token: None,
            lifecycle: Lifecycle::Unmounted,
            surface: None,
            theme: None,
            mounted: None,
            attribution: None,
        }
    }

    pub fn with_access_token(mut self, access_token: Option<AccessToken>) -> Self {
        self.access_token = access_token;
        self
    }

    // ===== Queries =====

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// True while no widget exists (the pre-mount render pass, or after teardown).
    pub fn is_inert(&self) -> bool {
        self.mounted.is_none()
    }

    pub fn widget(&self) -> Option<&P::Widget> {
        self.mounted.as_ref().map(|m| &m.widget)
    }

    pub fn widget_mut(&mut self) -> Option<&mut P::Widget> {
        self.mounted.as_mut().map(|m| &mut m.widget)
    }

    /// Last theme supplied by the theme provider.
    pub fn resolved_theme(&self) -> Option<ResolvedTheme> {
        self.theme
    }

    /// Theme the live widget was built for.
    pub fn mounted_theme(&self) -> Option<ResolvedTheme> {
        self.mounted.as_ref().map(|m| m.theme)
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    pub fn locations(&self) -> &[MarkerLocation] {
        &self.locations
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Document the attribution rule is installed into.
    pub fn document(&self) -> &Document {
        &self.document
    }

    // ===== Inputs =====

    /// Reports that the hosting surface is laid out and attached.
    ///
    /// Re-attaching the same surface only refreshes its geometry. A different
    /// surface tears the current widget down first.
    pub fn attach_surface(&mut self, surface: Surface) {
        match self.surface {
            Some(current) if current.id == surface.id => {
                self.surface = Some(surface);
            }
            Some(current) => {
                tracing::debug!(old = current.id, new = surface.id, "map surface replaced");
                self.unmount();
                self.surface = Some(surface);
            }
            None => {
                self.surface = Some(surface);
            }
        }
        self.sync();
    }

    /// Reports that the hosting surface went away.
    pub fn detach_surface(&mut self) {
        self.unmount();
    }

    /// Reports the current resolved theme. Only a change rebuilds the widget.
    pub fn set_resolved_theme(&mut self, theme: ResolvedTheme) {
        self.theme = Some(theme);
        self.sync();
    }

    /// Tears the view down. Safe to call any number of times.
    pub fn unmount(&mut self) {
        let was_mounted = self.mounted.is_some();
        self.dispose_current();
        self.attribution = None;
        self.surface = None;
        self.transition(Lifecycle::Unmounted);
        if was_mounted {
            tracing::info!("map view unmounted");
        }
    }

    // ===== Internals =====

    fn sync(&mut self) {
        let (Some(surface), Some(theme)) = (self.surface, self.theme) else {
            tracing::debug!(
                has_surface = self.surface.is_some(),
                has_theme = self.theme.is_some(),
                "map mount deferred"
            );
            return;
        };
        if surface.width <= 0.0 || surface.height <= 0.0 {
            tracing::debug!(surface = surface.id, "map surface has no area yet; mount skipped");
            return;
        }

        match self.mounted.as_ref().map(|m| m.theme) {
            None => {
                self.transition(Lifecycle::Mounting);
                if self.attribution.is_none() {
                    self.attribution = Some(document::hide_attribution(&self.document));
                }
                self.mount(&surface, theme);
                tracing::info!(?theme, markers = self.locations.len(), "map view mounted");
            }
            Some(current) if current != theme => {
                self.transition(Lifecycle::Reinitializing);
                self.dispose_current();
                self.mount(&surface, theme);
                tracing::info!(from = ?current, to = ?theme, "map view rebuilt for theme change");
            }
            Some(_) => {}
        }
    }

    fn mount(&mut self, surface: &Surface, theme: ResolvedTheme) {
        let config = widget_config(theme, self.access_token.as_ref());
        let mut widget = self.provider.create(surface, &config);
        widget.add_control(NavigationControl::default(), ControlPosition::TopRight);
        for location in self.locations.iter() {
            marker_for(location).add_to(&mut widget);
        }
        self.mounted = Some(Mounted { widget, theme });
        self.transition(Lifecycle::Ready);
    }

    fn dispose_current(&mut self) {
        if let Some(mut mounted) = self.mounted.take() {
            mounted.widget.dispose();
        }
    }

    fn transition(&mut self, next: Lifecycle) {
        if self.lifecycle != next {
            tracing::debug!(from = ?self.lifecycle, to = ?next, "map lifecycle");
            self.lifecycle = next;
        }
    }
}

impl<P: MapProvider> Drop for MapView<P> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::default_locations;
    use crate::map::provider::Marker;
    use crate::map::style::{MapStyle, WidgetConfig};

    struct StubWidget {
        config: WidgetConfig,
        markers: Vec<Marker>,
        controls: Vec<ControlPosition>,
        disposed: bool,
    }

    impl MapWidget for StubWidget {
        fn config(&self) -> &WidgetConfig {
            &self.config
        }

        fn add_control(&mut self, _control: NavigationControl, position: ControlPosition) {
            self.controls.push(position);
        }

        fn add_marker(&mut self, marker: Marker) {
            self.markers.push(marker);
        }

        fn markers(&self) -> &[Marker] {
            &self.markers
        }

        fn dispose(&mut self) {
            self.disposed = true;
        }

        fn is_disposed(&self) -> bool {
            self.disposed
        }
    }

    #[derive(Default)]
    struct StubProvider {
        created: usize,
    }

    impl MapProvider for StubProvider {
        type Widget = StubWidget;

        fn create(&mut self, _surface: &Surface, config: &WidgetConfig) -> StubWidget {
            self.created += 1;
            StubWidget {
                config: config.clone(),
                markers: Vec::new(),
                controls: Vec::new(),
                disposed: false,
            }
        }
    }

    fn view() -> MapView<StubProvider> {
        MapView::new(StubProvider::default(), default_locations(), Document::new())
    }

    #[test]
    fn test_starts_unmounted_and_inert() {
        let view = view();
        assert_eq!(view.lifecycle(), Lifecycle::Unmounted);
        assert!(view.is_inert());
        assert_eq!(view.provider().created, 0);
    }

    #[test]
    fn test_needs_both_surface_and_theme() {
        let mut view = view();
        view.set_resolved_theme(ResolvedTheme::Light);
        assert!(view.is_inert());

        view.attach_surface(Surface::new(1, 800.0, 600.0));
        assert_eq!(view.lifecycle(), Lifecycle::Ready);
        assert_eq!(view.provider().created, 1);
    }

    #[test]
    fn test_zero_area_surface_is_skipped() {
        let mut view = view();
        view.set_resolved_theme(ResolvedTheme::Dark);
        view.attach_surface(Surface::new(1, 0.0, 0.0));
        assert!(view.is_inert());

        view.attach_surface(Surface::new(1, 640.0, 480.0));
        assert_eq!(view.widget().unwrap().config().style, MapStyle::Dark);
    }

    #[test]
    fn test_mount_adds_control_and_markers() {
        let mut view = view();
        view.attach_surface(Surface::new(1, 800.0, 600.0));
        view.set_resolved_theme(ResolvedTheme::Light);

        let widget = view.widget().unwrap();
        assert_eq!(widget.controls, vec![ControlPosition::TopRight]);
        assert_eq!(widget.markers().len(), 3);
        assert_eq!(view.mounted_theme(), Some(ResolvedTheme::Light));
    }

    #[test]
    fn test_same_theme_does_not_rebuild() {
        let mut view = view();
        view.attach_surface(Surface::new(1, 800.0, 600.0));
        view.set_resolved_theme(ResolvedTheme::Light);
        view.set_resolved_theme(ResolvedTheme::Light);
        view.attach_surface(Surface::new(1, 1024.0, 768.0));

        assert_eq!(view.provider().created, 1);
        assert_eq!(view.surface().unwrap().width, 1024.0);
    }

    #[test]
    fn test_other_surface_rebuilds() {
        let mut view = view();
        view.set_resolved_theme(ResolvedTheme::Light);
        view.attach_surface(Surface::new(1, 800.0, 600.0));
        view.attach_surface(Surface::new(2, 800.0, 600.0));

        assert_eq!(view.provider().created, 2);
        assert_eq!(view.surface().unwrap().id, 2);
        assert_eq!(view.lifecycle(), Lifecycle::Ready);
    }

    #[test]
    fn test_detach_then_reattach_remounts_with_known_theme() {
        let mut view = view();
        view.set_resolved_theme(ResolvedTheme::Dark);
        view.attach_surface(Surface::new(1, 800.0, 600.0));
        view.detach_surface();
        assert!(view.is_inert());
        assert_eq!(view.resolved_theme(), Some(ResolvedTheme::Dark));

        view.attach_surface(Surface::new(1, 800.0, 600.0));
        assert_eq!(view.provider().created, 2);
        assert_eq!(view.mounted_theme(), Some(ResolvedTheme::Dark));
    }
}
