//! Full-screen TUI for the CollegeSodhpuch client.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};
use std::sync::Arc;

use anyhow::Result;
pub use features::{dashboard, home, login};
pub use runtime::TuiRuntime;
use sodhpuch_core::api::ApiClient;
use sodhpuch_core::pages::Route;
use sodhpuch_core::session::TokenStore;

/// Runs the interactive client starting on `start`.
///
/// # Errors
/// Returns an error if stderr is not a terminal or the terminal fails.
pub async fn run_interactive(
    client: ApiClient,
    store: Arc<dyn TokenStore>,
    start: Route,
) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `sodhpuch login` and `sodhpuch dashboard` for non-interactive use."
        );
    }

    tracing::info!(api = client.base_url(), page = start.path(), "starting tui");

    let mut runtime = TuiRuntime::new(client, store)?;
    runtime.run(start)
}
