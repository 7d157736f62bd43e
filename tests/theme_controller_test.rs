//! Controller tests against in-memory store, root element and worker fakes.
//! A "page load" is a fresh MemorySurface over the same MemoryStore.

use pretty_assertions::assert_eq;
use std::cell::RefCell;
use todo_frontend::error::{Result, ThemeError};
use todo_frontend::store::{MemoryStore, PreferenceStore};
use todo_frontend::surface::{MemorySurface, ThemeSurface};
use todo_frontend::worker::{NoWorkers, WorkerRegistrar};
use todo_frontend::{Theme, ThemeConfig, ThemeController};

const KEY: &str = "theme";
const ATTR: &str = "data-theme";

struct RecordingWorkers {
    supported: bool,
    registered: RefCell<Vec<String>>,
}

impl RecordingWorkers {
    fn new(supported: bool) -> Self {
        Self {
            supported,
            registered: RefCell::new(Vec::new()),
        }
    }
}

impl WorkerRegistrar for RecordingWorkers {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn register(&self, path: &str) {
        self.registered.borrow_mut().push(path.to_string());
    }
}

struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ThemeError::Storage("QuotaExceededError".to_string()))
    }
}

fn page<'a>(
    store: &'a MemoryStore,
    surface: &'a MemorySurface,
) -> ThemeController<&'a MemoryStore, &'a MemorySurface, NoWorkers> {
    ThemeController::new(ThemeConfig::default(), store, surface, NoWorkers)
}

#[test]
fn toggle_from_each_theme_writes_complement_to_attribute_and_store() {
    for start in Theme::ALL {
        let store = MemoryStore::new();
        let surface = MemorySurface::new();
        surface.set_attribute(ATTR, start.as_str()).unwrap();

        let next = page(&store, &surface).toggle().unwrap();

        assert_eq!(next, start.toggled());
        assert_eq!(surface.attribute(ATTR).as_deref(), Some(next.as_str()));
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some(next.as_str()));
    }
}

#[test]
fn toggle_without_marker_goes_dark() {
    let store = MemoryStore::new();
    let surface = MemorySurface::new();

    assert_eq!(page(&store, &surface).toggle().unwrap(), Theme::Dark);
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn toggle_treats_unknown_marker_as_not_dark() {
    let store = MemoryStore::new();
    let surface = MemorySurface::new();
    surface.set_attribute(ATTR, "high-contrast").unwrap();

    assert_eq!(page(&store, &surface).toggle().unwrap(), Theme::Dark);
    assert_eq!(surface.attribute(ATTR).as_deref(), Some("dark"));
}

#[test]
fn restore_with_empty_store_writes_nothing() {
    let store = MemoryStore::new();
    let surface = MemorySurface::new();

    let restored = page(&store, &surface).restore_on_load().unwrap();

    assert_eq!(restored, None);
    assert_eq!(surface.write_count(), 0);
    assert_eq!(surface.attribute(ATTR), None);
}

#[test]
fn restore_twice_is_same_as_once() {
    let store = MemoryStore::with_entry(KEY, "dark");
    let surface = MemorySurface::new();
    let controller = page(&store, &surface);

    assert_eq!(controller.restore_on_load().unwrap(), Some(Theme::Dark));
    let after_once = surface.attribute(ATTR);
    assert_eq!(controller.restore_on_load().unwrap(), Some(Theme::Dark));

    assert_eq!(surface.attribute(ATTR), after_once);
    assert_eq!(controller.current(), Some(Theme::Dark));
}

#[test]
fn restore_copies_unrecognized_stored_value_verbatim() {
    let store = MemoryStore::with_entry(KEY, "sepia");
    let surface = MemorySurface::new();
    let controller = page(&store, &surface);

    assert_eq!(controller.restore_on_load().unwrap(), None);
    assert_eq!(surface.write_count(), 1);
    assert_eq!(surface.attribute(ATTR).as_deref(), Some("sepia"));
    assert_eq!(controller.current(), None);
}

#[test]
fn restore_treats_empty_stored_value_as_absent() {
    let store = MemoryStore::with_entry(KEY, "");
    let surface = MemorySurface::new();

    assert_eq!(page(&store, &surface).restore_on_load().unwrap(), None);
    assert_eq!(surface.write_count(), 0);
}

#[test]
fn toggle_then_reload_restores_the_same_theme() {
    let store = MemoryStore::new();
    let written = page(&store, &MemorySurface::new()).toggle().unwrap();

    let fresh = MemorySurface::new();
    let restored = page(&store, &fresh).restore_on_load().unwrap();

    assert_eq!(restored, Some(written));
    assert_eq!(fresh.attribute(ATTR).as_deref(), Some(written.as_str()));
}

#[test]
fn load_toggle_reload_toggle_scenario() {
    let store = MemoryStore::new();

    let first = MemorySurface::new();
    let controller = page(&store, &first);
    assert_eq!(controller.restore_on_load().unwrap(), None);
    assert_eq!(controller.current(), None);
    assert_eq!(controller.toggle().unwrap(), Theme::Dark);
    assert_eq!(first.attribute(ATTR).as_deref(), Some("dark"));
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("dark"));

    let second = MemorySurface::new();
    let controller = page(&store, &second);
    assert_eq!(controller.restore_on_load().unwrap(), Some(Theme::Dark));
    assert_eq!(second.attribute(ATTR).as_deref(), Some("dark"));
    assert_eq!(controller.toggle().unwrap(), Theme::Light);
    assert_eq!(second.attribute(ATTR).as_deref(), Some("light"));
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(store.len(), 1);
}

#[test]
fn failing_store_write_propagates_from_toggle() {
    let surface = MemorySurface::new();
    let controller = ThemeController::new(ThemeConfig::default(), ReadOnlyStore, &surface, NoWorkers);

    let err = controller.toggle().unwrap_err();

    assert!(matches!(err, ThemeError::Storage(_)));
    // Attribute is written before the store is touched.
    assert_eq!(surface.attribute(ATTR).as_deref(), Some("dark"));
}

#[test]
fn custom_config_names_are_used() {
    let config = ThemeConfig::from_json(r#"{"storage_key":"todo.theme","attribute":"data-mode"}"#).unwrap();
    let store = MemoryStore::new();
    let surface = MemorySurface::new();
    let controller = ThemeController::new(config, &store, &surface, NoWorkers);

    controller.toggle().unwrap();

    assert_eq!(store.get("todo.theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(KEY).unwrap(), None);
    assert_eq!(surface.attribute("data-mode").as_deref(), Some("dark"));
}

#[test]
fn worker_registration_skipped_without_capability() {
    let workers = RecordingWorkers::new(false);
    let controller = ThemeController::new(
        ThemeConfig::default(),
        MemoryStore::new(),
        MemorySurface::new(),
        &workers,
    );

    assert!(!controller.register_background_worker());
    assert!(workers.registered.borrow().is_empty());
}

#[test]
fn native_workers_report_no_capability() {
    let store = MemoryStore::new();
    let surface = MemorySurface::new();

    assert!(!page(&store, &surface).register_background_worker());
}

#[test]
fn worker_registration_requests_configured_path() {
    let workers = RecordingWorkers::new(true);
    let controller = ThemeController::new(
        ThemeConfig::default(),
        MemoryStore::new(),
        MemorySurface::new(),
        &workers,
    );

    assert!(controller.register_background_worker());
    assert_eq!(*workers.registered.borrow(), vec!["/sw.js".to_string()]);
}
