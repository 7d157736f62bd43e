use dioxus::prelude::*;
use crate::theme::{spacing, Theme};

/// Button that flips the theme. Labelled with the theme a click switches to.
#[component]
pub fn ThemeToggle(
    current: Option<Theme>,
    disabled: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    let next = Theme::next_after(current.map(Theme::as_str));
    let icon = if next.is_dark() { "\u{263E}" } else { "\u{2600}" };
    let title = format!("Switch to {} theme", next);

    rsx! {
        button {
            class: "theme-toggle",
            title: "{title}",
            disabled: disabled,
            onclick: move |_| on_toggle.call(()),
            style: "padding: {spacing::SM} {spacing::MD}; border-radius: 8px; border: 1px solid var(--outline); background: var(--primary); color: var(--on-primary); cursor: pointer;",
            "{icon} {next}"
        }
    }
}
