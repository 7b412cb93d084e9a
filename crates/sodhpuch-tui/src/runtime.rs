//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! HTTP calls are spawned on tokio and report back through an inbox channel
//! that the loop drains every frame. Session reads and writes are small file
//! operations and run inline.

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sodhpuch_core::api::ApiClient;
use sodhpuch_core::pages::Route;
use sodhpuch_core::pages::dashboard::{self, Gate};
use sodhpuch_core::session::TokenStore;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick interval while a request is pending (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(80);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: ApiClient,
    store: Arc<dyn TokenStore>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a runtime and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(client: ApiClient, store: Arc<dyn TokenStore>) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state: AppState::new(),
            client,
            store,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the event loop starting on `start`, restoring the terminal on exit.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal input fails.
    pub fn run(&mut self, start: Route) -> Result<()> {
        let effects = update::navigate(&mut self.state, start);
        self.execute_effects(effects);

        let result = self.event_loop();
        let restored = terminal::restore_terminal();
        result.and(restored)
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;
            for event in events {
                if !matches!(event, UiEvent::Tick) {
                    dirty = true;
                }
                self.dispatch_event(event);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = self.state.is_busy();
            }
        }

        Ok(())
    }

    /// Collects events from the inbox and the terminal.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let tick_interval = if self.state.is_busy() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async job that reports its result through the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::SubmitLogin(credentials) => {
                tracing::info!(email = %credentials.email, "signing in");
                let client = self.client.clone();
                self.spawn_effect(move || async move {
                    let result = client
                        .login(&credentials.email, &credentials.password)
                        .await;
                    UiEvent::LoginFinished { result }
                });
            }
            UiEffect::StoreSession { token } => {
                if let Err(e) = self.store.save(&token) {
                    tracing::error!("failed to store session: {e:#}");
                    self.dispatch_event(UiEvent::SessionSaveFailed {
                        message: format!("Could not save session: {e:#}"),
                    });
                }
            }
            UiEffect::CheckSession { visit } => {
                let token = match dashboard::gate(&*self.store) {
                    Gate::Proceed(token) => Some(token),
                    Gate::Redirect(_) => None,
                };
                self.dispatch_event(UiEvent::SessionChecked { visit, token });
            }
            UiEffect::FetchProfile { visit, token } => {
                let client = self.client.clone();
                self.spawn_effect(move || async move {
                    let result = client.current_user(&token).await;
                    UiEvent::ProfileLoaded { visit, result }
                });
            }
            UiEffect::ClearSession { reason } => {
                dashboard::clear_session(&*self.store, reason);
            }
        }
    }
}
