use cliffvibe::map::document::{ATTRIBUTION_SELECTOR, LOGO_SELECTOR};
use cliffvibe::map::provider::{ControlPosition, Marker, NavigationControl, Popup};
use cliffvibe::{
    default_locations, AccessToken, AppConfig, Document, Lifecycle, MapProvider, MapStyle, MapView,
    MapWidget, MarkerLocation, ResolvedTheme, Surface, ThemePreference, WidgetConfig,
};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// What the recording provider saw, in order.
#[derive(Debug, Clone, PartialEq)]
enum Event {
    Created { instance: usize, style: MapStyle },
    Disposed { instance: usize },
}

#[derive(Default)]
struct Log {
    events: Vec<Event>,
    live: usize,
    max_live: usize,
}

type SharedLog = Rc<RefCell<Log>>;

struct RecordingWidget {
    instance: usize,
    config: WidgetConfig,
    markers: Vec<Marker>,
    controls: Vec<(NavigationControl, ControlPosition)>,
    disposed: bool,
    log: SharedLog,
}

impl MapWidget for RecordingWidget {
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
        assert!(!self.disposed, "widget {} disposed twice", self.instance);
        self.disposed = true;
        let mut log = self.log.borrow_mut();
        log.live -= 1;
        log.events.push(Event::Disposed { instance: self.instance });
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

struct RecordingProvider {
    log: SharedLog,
    next_instance: usize,
}

impl MapProvider for RecordingProvider {
    type Widget = RecordingWidget;

    fn create(&mut self, _surface: &Surface, config: &WidgetConfig) -> RecordingWidget {
        let instance = self.next_instance;
        self.next_instance += 1;

        let mut log = self.log.borrow_mut();
        log.live += 1;
        log.max_live = log.max_live.max(log.live);
        log.events.push(Event::Created { instance, style: config.style });

        RecordingWidget {
            instance,
            config: config.clone(),
            markers: Vec::new(),
            controls: Vec::new(),
            disposed: false,
            log: Rc::clone(&self.log),
        }
    }
}

fn recording_view(document: &Document) -> (MapView<RecordingProvider>, SharedLog) {
    let log = SharedLog::default();
    let provider = RecordingProvider {
        log: Rc::clone(&log),
        next_instance: 0,
    };
    (MapView::new(provider, default_locations(), document.clone()), log)
}

fn surface() -> Surface {
    Surface::new(7, 1024.0, 768.0)
}

#[test]
fn test_unmount_is_idempotent() {
    let document = Document::new();
    let (mut view, log) = recording_view(&document);

    // Never mounted
    view.unmount();
    view.unmount();
    assert!(log.borrow().events.is_empty());

    view.attach_surface(surface());
    view.set_resolved_theme(ResolvedTheme::Light);
    view.unmount();
    view.unmount();

    assert_eq!(
        log.borrow().events,
        vec![
            Event::Created { instance: 0, style: MapStyle::Outdoors },
            Event::Disposed { instance: 0 },
        ]
    );
    assert_eq!(view.lifecycle(), Lifecycle::Unmounted);
}

#[test]
fn test_at_most_one_live_widget_across_theme_changes() {
    let document = Document::new();
    let (mut view, log) = recording_view(&document);
    view.attach_surface(surface());

    let themes = [
        ResolvedTheme::Light,
        ResolvedTheme::Dark,
        ResolvedTheme::Dark,
        ResolvedTheme::Light,
        ResolvedTheme::Dark,
        ResolvedTheme::Light,
        ResolvedTheme::Light,
    ];
    for theme in themes {
        view.set_resolved_theme(theme);
        assert_eq!(view.lifecycle(), Lifecycle::Ready);
        assert_eq!(log.borrow().live, 1);
    }

    let log = log.borrow();
    assert_eq!(log.max_live, 1);
    // Light, Dark, Light, Dark, Light: five distinct keys
    let created = log.events.iter().filter(|e| matches!(e, Event::Created { .. })).count();
    assert_eq!(created, 5);

    // Every rebuild disposes the previous instance before creating the next
    for pair in log.events.windows(2) {
        if let [Event::Created { instance: a, .. }, Event::Created { instance: b, .. }] = pair {
            panic!("instance {} created while {} was live", b, a);
        }
    }
}

#[test]
fn test_style_follows_resolved_theme() {
    let document = Document::new();
    let (mut view, _log) = recording_view(&document);
    view.attach_surface(surface());

    view.set_resolved_theme(ResolvedTheme::Dark);
    assert_eq!(view.widget().unwrap().config().style, MapStyle::Dark);

    view.set_resolved_theme(ResolvedTheme::Light);
    assert_eq!(view.widget().unwrap().config().style, MapStyle::Outdoors);

    // An unresolved system theme defaults to light
    view.set_resolved_theme(ThemePreference::System.resolve(None));
    assert_eq!(view.widget().unwrap().config().style, MapStyle::Outdoors);
}

#[test]
fn test_markers_and_popups_for_default_locations() {
    let document = Document::new();
    let (mut view, _log) = recording_view(&document);
    view.set_resolved_theme(ResolvedTheme::Light);
    view.attach_surface(surface());

    let widget = view.widget().unwrap();
    let markers = widget.markers();
    assert_eq!(markers.len(), 3);

    let popups: Vec<&Popup> = markers.iter().filter_map(Marker::popup).collect();
    assert_eq!(popups.len(), 3);

    let expected = [
        ("Budapest", [19.040236, 47.497913]),
        ("Vienna", [16.373819, 48.208176]),
        ("Prague", [14.4378, 50.075538]),
    ];
    for ((marker, popup), (title, lng_lat)) in markers.iter().zip(&popups).zip(expected) {
        assert_eq!(marker.lng_lat(), lng_lat);
        let content = popup.content().unwrap();
        let lines = content.lines();
        assert!(lines.contains(&title));
        if let Some(description) = &content.description {
            assert!(lines.contains(&description.as_str()));
        }
    }

    assert_eq!(widget.controls, vec![(NavigationControl::default(), ControlPosition::TopRight)]);
}

#[test]
fn test_popup_omits_missing_description() {
    let document = Document::new();
    let log = SharedLog::default();
    let provider = RecordingProvider {
        log: Rc::clone(&log),
        next_instance: 0,
    };
    let locations = vec![MarkerLocation::new("tower", 45.0, 7.0, "Tower", None)];
    let mut view = MapView::new(provider, locations.into(), document);
    view.set_resolved_theme(ResolvedTheme::Dark);
    view.attach_surface(surface());

    let marker = &view.widget().unwrap().markers()[0];
    assert_eq!(marker.popup().unwrap().content().unwrap().lines(), vec!["Tower"]);
}

#[test]
fn test_no_construction_before_surface_is_attached() {
    let document = Document::new();
    let (mut view, log) = recording_view(&document);

    view.set_resolved_theme(ResolvedTheme::Dark);
    view.set_resolved_theme(ResolvedTheme::Light);
    assert!(view.is_inert());
    assert!(log.borrow().events.is_empty());
    assert_eq!(document.rule_count(), 0);

    view.attach_surface(surface());
    assert_eq!(log.borrow().events.len(), 1);
}

#[test]
fn test_unmount_cleans_up_rule_and_disposes_each_instance_once() {
    let document = Document::new();
    let (mut view, log) = recording_view(&document);
    view.attach_surface(surface());
    view.set_resolved_theme(ResolvedTheme::Light);
    assert!(document.is_hidden(ATTRIBUTION_SELECTOR));
    assert!(document.is_hidden(LOGO_SELECTOR));

    view.set_resolved_theme(ResolvedTheme::Dark);
    // Still one rule across the rebuild
    assert_eq!(document.rule_count(), 1);

    view.unmount();
    assert_eq!(document.rule_count(), 0);
    assert!(!document.is_hidden(ATTRIBUTION_SELECTOR));

    let log = log.borrow();
    for instance in 0..2 {
        let disposals = log
            .events
            .iter()
            .filter(|e| **e == Event::Disposed { instance })
            .count();
        assert_eq!(disposals, 1, "instance {}", instance);
    }
}

#[test]
fn test_dropping_the_view_cleans_up() {
    let document = Document::new();
    let (mut view, log) = recording_view(&document);
    view.attach_surface(surface());
    view.set_resolved_theme(ResolvedTheme::Dark);
    assert_eq!(document.rule_count(), 1);

    drop(view);
    assert_eq!(document.rule_count(), 0);
    assert_eq!(log.borrow().live, 0);
}

#[test]
fn test_config_file_drives_locations_and_token() -> Result<()> {
    let path = std::env::temp_dir()
        .join(format!("cliffvibe-integration-config-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "access_token": "pk.integration",
            "locations": [
                {"id": "oslo", "lat": 59.91, "lng": 10.75, "title": "Oslo", "description": "Opera roof"},
                {"id": "bergen", "lat": 60.39, "lng": 5.32, "title": "Bergen"}
            ]
        }"#,
    )?;
    let config = AppConfig::load_from(&path)?;
    std::fs::remove_file(&path)?;

    let document = Document::new();
    let provider = RecordingProvider {
        log: SharedLog::default(),
        next_instance: 0,
    };
    let mut view = MapView::new(provider, config.locations(), document)
        .with_access_token(config.access_token.clone());
    view.set_resolved_theme(ResolvedTheme::Light);
    view.attach_surface(surface());

    let widget = view.widget().unwrap();
    assert_eq!(widget.markers().len(), 2);
    assert_eq!(widget.config().access_token, AccessToken::new("pk.integration"));
    Ok(())
}
