//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod home;
pub mod tui;
