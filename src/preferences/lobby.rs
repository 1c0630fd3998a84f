//! Multiplayer lobby preferences.

use anyhow::{bail, Result};
use serde::Serialize;

use super::PreferenceStore;

pub fn whisper_friends_only(prefs: &impl PreferenceStore) -> bool {
    prefs.get_bool("lobby_whisper_friends_only", false)
}

pub fn set_whisper_friends_only(prefs: &mut impl PreferenceStore, value: bool) {
    prefs.set_bool("lobby_whisper_friends_only", value);
}

pub fn auto_open_whisper_windows(prefs: &impl PreferenceStore) -> bool {
    prefs.get_bool("lobby_auto_open_whisper_windows", true)
}

// Game list filters

pub fn fi_invert(prefs: &impl PreferenceStore) -> bool {
    prefs.get_bool("fi_invert", false)
}

pub fn set_fi_invert(prefs: &mut impl PreferenceStore, value: bool) {
    prefs.set_bool("fi_invert", value);
}

pub fn fi_vacant_slots(prefs: &impl PreferenceStore) -> bool {
    prefs.get_bool("fi_vacant_slots", false)
}

pub fn set_fi_vacant_slots(prefs: &mut impl PreferenceStore, value: bool) {
    prefs.set_bool("fi_vacant_slots", value);
}

pub fn fi_friends_in_game(prefs: &impl PreferenceStore) -> bool {
    prefs.get_bool("fi_friends_in_game", false)
}

pub fn set_fi_friends_in_game(prefs: &mut impl PreferenceStore, value: bool) {
    prefs.set_bool("fi_friends_in_game", value);
}

pub fn fi_blocked_in_game(prefs: &impl PreferenceStore) -> bool {
    prefs.get_bool("fi_blocked_in_game", false)
}

pub fn set_fi_blocked_in_game(prefs: &mut impl PreferenceStore, value: bool) {
    prefs.set_bool("fi_blocked_in_game", value);
}

/// Snapshot of every lobby preference, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LobbySettings {
    pub whisper_friends_only: bool,
    pub auto_open_whisper_windows: bool,
    pub fi_invert: bool,
    pub fi_vacant_slots: bool,
    pub fi_friends_in_game: bool,
    pub fi_blocked_in_game: bool,
}

impl LobbySettings {
    pub fn read(prefs: &impl PreferenceStore) -> Self {
        Self {
            whisper_friends_only: whisper_friends_only(prefs),
            auto_open_whisper_windows: auto_open_whisper_windows(prefs),
            fi_invert: fi_invert(prefs),
            fi_vacant_slots: fi_vacant_slots(prefs),
            fi_friends_in_game: fi_friends_in_game(prefs),
            fi_blocked_in_game: fi_blocked_in_game(prefs),
        }
    }
}

/// Set a lobby preference by accessor name, as typed on the command line.
pub fn set_by_name(prefs: &mut impl PreferenceStore, name: &str, value: bool) -> Result<()> {
    match name {
        "whisper_friends_only" => set_whisper_friends_only(prefs, value),
        "fi_invert" => set_fi_invert(prefs, value),
        "fi_vacant_slots" => set_fi_vacant_slots(prefs, value),
        "fi_friends_in_game" => set_fi_friends_in_game(prefs, value),
        "fi_blocked_in_game" => set_fi_blocked_in_game(prefs, value),
        "auto_open_whisper_windows" => bail!("'{}' is read-only", name),
        _ => bail!("Unknown lobby preference: {}", name),
    }
    Ok(())
}
