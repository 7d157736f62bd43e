use dioxus::prelude::*;
use std::rc::Rc;
use crate::config::{ThemeConfig, DEFAULT_ATTRIBUTE};
use crate::platform::{self, PlatformController};
use crate::theme::{self, spacing, Theme};
use crate::widgets::{ThemeToggle, ThemedBackground};

#[component]
pub fn App() -> Element {
    let controller = use_hook(|| {
        platform::controller(ThemeConfig::default())
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });
    let initial = use_hook({
        let controller = controller.clone();
        move || bootstrap(&controller)
    });
    let mut current = use_signal(move || initial);

    let stylesheet = theme::stylesheet(DEFAULT_ATTRIBUTE);
    let toggle_controller = controller.clone();
    let on_toggle = move |_| {
        let Ok(c) = &toggle_controller else {
            return;
        };
        match c.toggle() {
            Ok(next) => current.set(Some(next)),
            Err(e) => tracing::warn!("theme toggle failed: {}", e),
        }
    };

    rsx! {
        style { "{stylesheet}" }
        div {
            "data-theme": current().map(Theme::as_str),
            style: "font-family: system-ui, sans-serif;",
            ThemedBackground {
                div { style: "display: flex; padding: 12px {spacing::LG}; gap: 12px; align-items: center; border-bottom: 1px solid var(--outline);",
                    h1 { style: "margin: 0; font-size: 1.25rem;", "Todos" }
                    div { style: "flex: 1;" }
                    ThemeToggle {
                        current: current(),
                        disabled: controller.is_err(),
                        on_toggle,
                    }
                }
                div { style: "padding: {spacing::LG};",
                    if let Err(e) = &controller {
                        p { style: "color: var(--outline);", "Theme preference unavailable: {e}" }
                    }
                }
            }
        }
    }
}

/// Page-load work, run once: restore the stored theme and kick off worker registration.
fn bootstrap(controller: &Result<Rc<PlatformController>, String>) -> Option<Theme> {
    let c = match controller {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("theme controller unavailable: {}", e);
            return None;
        }
    };
    if let Err(e) = c.restore_on_load() {
        tracing::warn!("theme restore failed: {}", e);
    }
    c.register_background_worker();
    c.current()
}
