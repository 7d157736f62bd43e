use dioxus::prelude::*;

/// Full-height surface painted from the palette variables of the active theme.
#[component]
pub fn ThemedBackground(children: Element) -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: var(--surface); color: var(--on-surface); transition: background 0.2s, color 0.2s;",
            {children}
        }
    }
}
