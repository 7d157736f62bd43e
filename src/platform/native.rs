//! Desktop/native wiring: JSON preference file, in-memory root element, no service workers.
//! The desktop webview mirrors the attribute through the `App` wrapper element instead.

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::Result;
use crate::store::FileStore;
use crate::surface::MemorySurface;
use crate::worker::NoWorkers;

pub type PlatformController = ThemeController<FileStore, MemorySurface, NoWorkers>;

pub fn controller(config: ThemeConfig) -> Result<PlatformController> {
    let store = FileStore::open_default()?;
    tracing::debug!(path = %store.path().display(), "using preference file");
    Ok(ThemeController::new(config, store, MemorySurface::new(), NoWorkers))
}
