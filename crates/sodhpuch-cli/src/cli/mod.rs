//! CLI entry and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sodhpuch_core::api::ApiClient;
use sodhpuch_core::config::{self, resolve_api_base_url};
use sodhpuch_core::logging;
use sodhpuch_core::session::{FileTokenStore, TokenStore};

mod commands;

#[derive(Parser)]
#[command(name = "sodhpuch")]
#[command(version)]
#[command(about = "CollegeSodhpuch terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API base URL (overrides SODHPUCH_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,
}

/// Password input shared by commands that authenticate.
#[derive(clap::Args, Debug, Clone, Default)]
struct PasswordArgs {
    /// Account password (read from stdin when omitted)
    #[arg(long, env = "SODHPUCH_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive client
    Tui {
        /// Page to open first (/, /login or /dashboard)
        #[arg(long, value_name = "PATH", default_value = "/")]
        page: String,
    },

    /// Show the landing page
    Home,

    /// Sign in and store the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        #[command(flatten)]
        password: PasswordArgs,
    },

    /// Show the signed-in user's profile
    Dashboard,

    /// Clear the stored session
    Logout,

    /// Create a new account
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Full name shown on the dashboard
        #[arg(long = "full-name")]
        full_name: String,

        #[command(flatten)]
        password: PasswordArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Save the API base URL to the config file
    SetApiUrl {
        /// Base URL, e.g. https://api.example.com/api
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best effort; commands still run without it.
    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_url } = cli;
    let api_url = api_url.as_deref();

    // default to the interactive client on the home page
    let Some(command) = command else {
        let (client, store) = connect(api_url)?;
        return commands::tui::run(client, store, "/").await;
    };

    match command {
        Commands::Tui { page } => {
            let (client, store) = connect(api_url)?;
            commands::tui::run(client, store, &page).await
        }
        Commands::Home => {
            commands::home::show();
            Ok(())
        }
        Commands::Login { email, password } => {
            let (client, store) = connect(api_url)?;
            commands::auth::login(&client, &*store, &email, password.password).await
        }
        Commands::Dashboard => {
            let (client, store) = connect(api_url)?;
            commands::dashboard::show(&client, &*store).await
        }
        Commands::Logout => commands::auth::logout(&FileTokenStore::default_location()),
        Commands::Register {
            email,
            full_name,
            password,
        } => {
            let (client, _) = connect(api_url)?;
            commands::auth::register(&client, &email, &full_name, password.password).await
        }
        // Config commands must work even when the config file is broken.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetApiUrl { url } => commands::config::set_api_url(&url),
        },
    }
}

/// Loads config and opens the API client plus the session store.
fn connect(api_url: Option<&str>) -> Result<(ApiClient, Arc<dyn TokenStore>)> {
    let config = config::Config::load().context("load config")?;
    let client = build_client(&config, api_url)?;
    tracing::debug!(api = client.base_url(), "using API");
    let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::default_location());
    Ok((client, store))
}

fn build_client(config: &config::Config, api_url: Option<&str>) -> Result<ApiClient> {
    match api_url {
        Some(url) => ApiClient::new(
            resolve_api_base_url(Some(url), None),
            config.request_timeout(),
        ),
        None => ApiClient::from_config(config),
    }
}
