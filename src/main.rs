//! Todo frontend - Dioxus shell with persisted light/dark theme.
//! Browser: dx serve (cargo run wraps it). Desktop: cargo run --features desktop.

#[cfg(target_arch = "wasm32")]
fn main() {
    use dioxus::logger::tracing::Level;
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(todo_frontend::app::App);
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
fn main() {
    use dioxus::logger::tracing::Level;
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(todo_frontend::app::App);
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
fn main() {
    // Native `cargo run` of the web build: hand off to the Dioxus CLI, which
    // compiles for wasm32 and serves the page.
    let status = std::process::Command::new("dx").arg("serve").status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
