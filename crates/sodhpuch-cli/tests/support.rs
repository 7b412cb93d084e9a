//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;
use wiremock::ResponseTemplate;

/// Creates a temp SODHPUCH_HOME directory for test isolation.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp sodhpuch home")
}

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

pub fn session_path(home: &Path) -> PathBuf {
    home.join("session.json")
}

/// Writes a stored session holding `token`.
pub fn write_session(home: &Path, token: &str) {
    fs::write(
        session_path(home),
        json!({ "access_token": token }).to_string(),
    )
    .unwrap();
}

/// Reads the stored token, if any.
pub fn stored_token(home: &Path) -> Option<String> {
    let contents = fs::read_to_string(session_path(home)).ok()?;
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    value["access_token"].as_str().map(str::to_string)
}

pub fn token_response(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": token,
        "token_type": "bearer",
    }))
}

pub fn profile_response(email: &str, full_name: &str, is_active: bool) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": 7,
        "email": email,
        "full_name": full_name,
        "is_active": is_active,
        "created_at": "2024-03-01T10:15:00",
    }))
}
