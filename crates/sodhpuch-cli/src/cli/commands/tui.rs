//! Interactive client command.

use std::sync::Arc;

use anyhow::Result;
use sodhpuch_core::api::ApiClient;
use sodhpuch_core::pages::Route;
use sodhpuch_core::session::TokenStore;

use crate::modes;

pub async fn run(client: ApiClient, store: Arc<dyn TokenStore>, page: &str) -> Result<()> {
    let Some(start) = Route::from_path(page) else {
        let known: Vec<&str> = Route::ALL.iter().map(|route| route.path()).collect();
        anyhow::bail!("Unknown page '{page}' (expected one of {})", known.join(", "));
    };

    modes::run_interactive(client, store, start).await
}
