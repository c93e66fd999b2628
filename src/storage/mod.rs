//! Storage module for saving and loading player progress
//!
//! This module provides save/load functionality using JSON serialization.

use crate::domain::player::Player;

/// Save a player to bytes using JSON serialization
pub fn save(player: &Player) -> anyhow::Result<Vec<u8>> {
    let json = serde_json::to_string_pretty(player)?;
    Ok(json.into_bytes())
}

/// Load a player from bytes using JSON deserialization
///
/// The loaded values go through the same validation as [`Player::builder`].
pub fn load(bytes: &[u8]) -> anyhow::Result<Player> {
    let json = std::str::from_utf8(bytes)?;
    let player = serde_json::from_str(json)?;
    Ok(player)
}
