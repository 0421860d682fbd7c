//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, deltaTime pre-clamped by the host
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod behavior;
pub mod collision;
pub mod level;
pub mod messages;
pub mod physics;
pub mod state;
pub mod tick;

pub use level::{LevelLayout, build_level, mechanics_for_level, missile_policy_for_level};
pub use state::{
    FrameInput, GameEvent, GameState, Goal, MechanicsFlags, MissileSpawnPolicy, Obstacle,
    ObstacleKind, Platform, PlatformBehavior, Player, Rect, Scheduled, Viewport,
};
pub use tick::step;
