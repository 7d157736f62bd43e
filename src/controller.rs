//! Theme controller: toggle, restore on load, service worker bootstrap.
//!
//! The three collaborators are injected so the browser, desktop and test builds
//! share this logic. Store and document failures propagate to the caller; only
//! worker registration is capability-gated.

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;
use crate::theme::Theme;
use crate::worker::WorkerRegistrar;

pub struct ThemeController<S, D, W> {
    config: ThemeConfig,
    store: S,
    surface: D,
    workers: W,
}

impl<S, D, W> ThemeController<S, D, W>
where
    S: PreferenceStore,
    D: ThemeSurface,
    W: WorkerRegistrar,
{
    pub fn new(config: ThemeConfig, store: S, surface: D, workers: W) -> Self {
        Self {
            config,
            store,
            surface,
            workers,
        }
    }

    /// Theme currently marked on the root element, if it is a known one.
    pub fn current(&self) -> Option<Theme> {
        self.surface
            .attribute(&self.config.attribute)
            .and_then(|v| v.parse().ok())
    }

    /// Flip the root attribute and persist the new value.
    /// The attribute is written first; a failing store write is returned after it.
    pub fn toggle(&self) -> Result<Theme> {
        let marker = self.surface.attribute(&self.config.attribute);
        let next = Theme::next_after(marker.as_deref());
        self.surface.set_attribute(&self.config.attribute, next.as_str())?;
        self.store.set(&self.config.storage_key, next.as_str())?;
        tracing::debug!(from = ?marker, to = %next, "theme toggled");
        Ok(next)
    }

    /// Copy the persisted value onto the root attribute. Nothing stored (or an empty
    /// string) leaves the document untouched. Any other value is written as-is; the
    /// return is `Some` only when it names a known theme.
    pub fn restore_on_load(&self) -> Result<Option<Theme>> {
        let stored = self.store.get(&self.config.storage_key)?;
        let Some(stored) = stored.filter(|v| !v.is_empty()) else {
            tracing::debug!(key = %self.config.storage_key, "no stored theme, keeping default");
            return Ok(None);
        };
        self.surface.set_attribute(&self.config.attribute, &stored)?;
        match stored.parse::<Theme>() {
            Ok(theme) => {
                tracing::info!(theme = %theme, "restored theme");
                Ok(Some(theme))
            }
            Err(e) => {
                tracing::warn!(key = %self.config.storage_key, "restored {}", e);
                Ok(None)
            }
        }
    }

    /// Request registration of the configured worker script when the environment supports it.
    /// Returns whether a request was issued.
    pub fn register_background_worker(&self) -> bool {
        if !self.workers.is_supported() {
            tracing::debug!("service workers not supported, skipping registration");
            return false;
        }
        self.workers.register(&self.config.worker_path);
        true
    }
}
