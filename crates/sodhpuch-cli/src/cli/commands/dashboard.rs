//! Dashboard command handler.

use anyhow::Result;
use sodhpuch_core::api::{ApiClient, UserProfile};
use sodhpuch_core::pages::dashboard::{self, DashboardOutcome, DashboardView};
use sodhpuch_core::session::TokenStore;

/// Fetches and prints the profile for the stored session.
///
/// Without a session nothing is requested. A rejected session is cleared.
pub async fn show(client: &ApiClient, store: &dyn TokenStore) -> Result<()> {
    match dashboard::load(client, store).await {
        DashboardOutcome::Redirect(_) => {
            anyhow::bail!("Not logged in. Sign in with `sodhpuch login --email <EMAIL>`.")
        }
        DashboardOutcome::Shown(DashboardView::Ready(profile)) => {
            print_profile(&profile);
            Ok(())
        }
        DashboardOutcome::Shown(DashboardView::Failed(message)) => anyhow::bail!(
            "{message}\nYour session has been cleared. Sign in again with `sodhpuch login`."
        ),
        DashboardOutcome::Shown(DashboardView::Loading) => {
            anyhow::bail!("Profile did not load")
        }
    }
}

fn print_profile(profile: &UserProfile) {
    for (label, value) in dashboard::profile_rows(profile) {
        println!("{label}: {value}");
    }
}
