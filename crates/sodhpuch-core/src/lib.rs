//! Core sodhpuch library (config, API client, session storage, page flows).

pub mod api;
pub mod config;
pub mod logging;
pub mod pages;
pub mod session;
