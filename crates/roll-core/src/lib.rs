pub mod config;
pub mod error;
pub mod qr;
pub mod roster;
pub mod sessions;
pub mod status;
pub mod window;

pub mod types;

pub use crate::config::RollConfig;
pub use crate::error::RollError;
pub use crate::status::{derive_status, derive_status_for_input};
pub use crate::window::{evaluate, evaluate_input};
