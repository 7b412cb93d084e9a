//! Login, logout and registration command handlers.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use sodhpuch_core::api::{ApiClient, NewUser};
use sodhpuch_core::pages::login::{self, LoginForm, LoginOutcome};
use sodhpuch_core::session::TokenStore;

use super::dashboard;

/// Signs in, stores the session, then shows the dashboard.
pub async fn login(
    client: &ApiClient,
    store: &dyn TokenStore,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let mut form = LoginForm::new();
    form.email = email.to_string();
    form.password = resolve_password(password)?;

    eprintln!("Signing in...");
    match login::submit(&mut form, client, store).await {
        LoginOutcome::Navigate(_) => {
            println!("Logged in as {}.", email.trim());
            dashboard::show(client, store).await
        }
        LoginOutcome::Stay => {
            anyhow::bail!("{}", form.error().unwrap_or("Login failed"))
        }
    }
}

/// Clears the stored session.
pub fn logout(store: &dyn TokenStore) -> Result<()> {
    if store.clear().context("clear session")? {
        tracing::info!("logged out");
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Creates an account. Does not sign in.
pub async fn register(
    client: &ApiClient,
    email: &str,
    full_name: &str,
    password: Option<String>,
) -> Result<()> {
    let user = NewUser {
        email: email.trim().to_string(),
        full_name: full_name.trim().to_string(),
        password: resolve_password(password)?,
    };
    if user.email.is_empty() || user.full_name.is_empty() || user.password.is_empty() {
        anyhow::bail!("Email, full name and password are required");
    }

    eprintln!("Registering...");
    let profile = client.register(&user).await?;
    tracing::info!(email = %profile.email, "registered account");

    println!("Registered {}.", profile.email);
    println!("Sign in with `sodhpuch login --email {}`.", profile.email);
    Ok(())
}

/// Uses the given password, or reads one line from stdin.
fn resolve_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush()?;
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
