//! Page slices: each owns its state, key handling and view.

pub mod dashboard;
pub mod home;
pub mod login;
