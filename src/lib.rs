//! Corp Ladder - a side-scrolling corporate tower platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level state)
//! - `render`: Display-list drawing against a host-provided surface
//! - `progress`: Saved-level slot for level resumption

pub mod progress;
pub mod render;
pub mod sim;

pub use sim::{FrameInput, GameEvent, GameState, Viewport, step};

/// Game configuration constants
pub mod consts {
    /// Highest tower level; advancing past it ends the run
    pub const MAX_LEVEL: u32 = 25;

    /// Player avatar dimensions (square sprite)
    pub const PLAYER_SIZE: f32 = 48.0;
    /// Horizontal run speed (px/s)
    pub const MOVE_SPEED: f32 = 300.0;
    /// Jump impulse magnitude (px/s, sign follows gravity orientation)
    pub const JUMP_SPEED: f32 = 650.0;
    /// Gravity magnitude (px/s²)
    pub const GRAVITY: f32 = 1200.0;
    /// Player spawn x for every level
    pub const SPAWN_X: f32 = 100.0;
    /// Player spawn y under flipped gravity (just below the ceiling ledge)
    pub const FLIPPED_SPAWN_Y: f32 = 120.0;

    /// Standard hazard dimensions
    pub const OBSTACLE_SIZE: f32 = 32.0;
    /// Homing missile dimensions
    pub const MISSILE_SIZE: f32 = 24.0;
    /// Goal door dimensions
    pub const GOAL_SIZE: f32 = 48.0;
    /// Platform slab height
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Cumulative contact time before a crumbling platform gives way (s)
    pub const CRUMBLE_CONTACT_SECS: f32 = 1.5;
    /// Phantom platform visibility toggle period (s)
    pub const PHANTOM_FLICKER_SECS: f32 = 2.0;
    /// Frames between visible-group swaps on the alternating level
    pub const FADE_INTERVAL_FRAMES: u64 = 120;

    /// Easing rate for homing missile velocity (per second)
    pub const HOMING_EASE_RATE: f32 = 3.0;
    /// Rejection hazard drift speed toward the player (px/s)
    pub const REJECTION_DRIFT_SPEED: f32 = 30.0;
    /// Rejection hazard wakes up inside this radius (px)
    pub const REJECTION_DRIFT_RANGE: f32 = 200.0;

    /// Gravity well influence radius (px)
    pub const WELL_RADIUS: f32 = 150.0;
    /// Gravity well peak attraction (px/s²)
    pub const WELL_FORCE: f32 = 800.0;

    /// Missile spawn points sit this far outside the viewport edge
    pub const EDGE_SPAWN_MARGIN: f32 = 50.0;
    /// Base homing speed for a fresh missile (px/s)
    pub const MISSILE_BASE_SPEED: f32 = 80.0;
    /// Uniform random addition to missile homing speed (px/s)
    pub const MISSILE_SPEED_JITTER: f32 = 40.0;
    /// Homing speed gained per level past the missile threshold (px/s)
    pub const MISSILE_SPEED_PER_LEVEL: f32 = 10.0;
    /// No missiles spawn for this long after a player reset (s)
    pub const SPAWN_SUPPRESSION_SECS: f32 = 1.0;

    /// Camera horizontal smoothing factor (fraction per frame)
    pub const CAMERA_SMOOTHING: f32 = 0.1;

    /// Fixed display window for short narrative messages (ms)
    pub const MESSAGE_DISPLAY_MS: u32 = 2000;
    /// Typing reveal cadence (s per character)
    pub const TYPING_CHAR_SECS: f32 = 0.05;

    /// Hosts must clamp deltaTime to this before calling step
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;
}

/// Install console logging and panic hooks (call once from the host shell)
#[cfg(target_arch = "wasm32")]
pub fn init_console(level: log::Level) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(level);
}
