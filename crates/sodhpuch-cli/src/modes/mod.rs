//! Runtime execution modes.
//!
//! - `tui`: Full-screen interactive terminal UI (optional feature)

#[cfg(feature = "tui")]
pub use sodhpuch_tui::run_interactive;

#[cfg(not(feature = "tui"))]
pub async fn run_interactive(
    _client: sodhpuch_core::api::ApiClient,
    _store: std::sync::Arc<dyn sodhpuch_core::session::TokenStore>,
    _start: sodhpuch_core::pages::Route,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
