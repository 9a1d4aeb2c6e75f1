pub mod qr;
pub mod roster;
pub mod window;

use chrono::{DateTime, Utc};
use roll_core::RollError;
use roll_core::window::parse_instant;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Resolves `--now`, falling back to the wall clock.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>, RollError> {
    match now {
        None => Ok(Utc::now()),
        Some(raw) => parse_instant(raw)
            .ok_or_else(|| RollError::invalid_input(format!("--now is not an RFC 3339 instant: {raw}"))),
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RollError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
