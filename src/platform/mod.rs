//! Platform implementations of the controller seams, picked by target.

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::{controller, LocalStorage, NavigatorWorkers, PlatformController, RootElement};

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::{controller, PlatformController};
