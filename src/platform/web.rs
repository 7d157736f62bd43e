//! Browser wiring: `localStorage`, `document.documentElement`, `navigator.serviceWorker`.

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::{Result, ThemeError};
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::worker::WorkerRegistrar;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub type PlatformController = ThemeController<LocalStorage, RootElement, NavigatorWorkers>;

pub fn controller(config: ThemeConfig) -> Result<PlatformController> {
    Ok(ThemeController::new(
        config,
        LocalStorage::open()?,
        RootElement,
        NavigatorWorkers,
    ))
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Fails when the window has no storage (disabled by policy, sandboxed frame).
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .ok_or(ThemeError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| ThemeError::Storage(js_err(e)))?
            .ok_or(ThemeError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_err(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_err(e)))
    }
}

/// `<html>` of the current document, looked up on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RootElement;

impl RootElement {
    fn element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

impl ThemeSurface for RootElement {
    fn attribute(&self, name: &str) -> Option<String> {
        Self::element()?.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        Self::element()
            .ok_or(ThemeError::NoDocument)?
            .set_attribute(name, value)
            .map_err(|e| ThemeError::Document(js_err(e)))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorWorkers;

impl NavigatorWorkers {
    fn navigator() -> Option<web_sys::Navigator> {
        web_sys::window().map(|w| w.navigator())
    }
}

impl WorkerRegistrar for NavigatorWorkers {
    fn is_supported(&self) -> bool {
        // `'serviceWorker' in navigator`; the web-sys getter assumes it exists.
        Self::navigator()
            .map(|nav| js_sys::Reflect::has(&nav, &JsValue::from_str("serviceWorker")).unwrap_or(false))
            .unwrap_or(false)
    }

    fn register(&self, path: &str) {
        let Some(nav) = Self::navigator() else {
            return;
        };
        let promise = nav.service_worker().register(path);
        let path = path.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(reg) => {
                    let scope = reg
                        .dyn_into::<web_sys::ServiceWorkerRegistration>()
                        .map(|r| r.scope())
                        .unwrap_or_default();
                    tracing::debug!(%path, %scope, "service worker registered");
                }
                Err(e) => tracing::warn!(%path, "service worker registration failed: {}", js_err(e)),
            }
        });
    }
}
