//! Saved-progress slot
//!
//! The only persisted state is the current level, stored under a fixed key.
//! The host reads it at start-up to offer level resumption and writes it
//! whenever the level advances during play; the simulation core itself only
//! accepts a starting level at construction.

use crate::consts::MAX_LEVEL;

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "corp_ladder_progress";

/// Sanity-check a stored value before offering resumption
pub fn valid_level(level: u32) -> bool {
    (1..=MAX_LEVEL).contains(&level)
}

/// Load the saved level from LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load() -> Option<u32> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()?;

    let json = storage.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str::<u32>(&json) {
        Ok(level) if valid_level(level) => {
            log::info!("resuming at saved level {level}");
            Some(level)
        }
        _ => None,
    }
}

/// Save the current level to LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save(level: u32) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        if let Ok(json) = serde_json::to_string(&level) {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }
}

/// Drop the slot once the run is complete (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn clear() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Option<u32> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_level: u32) {
    // No-op for native
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear() {
    // No-op for native
}
