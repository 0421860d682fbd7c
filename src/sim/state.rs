//! Game state and core simulation types
//!
//! The engine instance exclusively owns every entity collection for the
//! active level; hosts see only the `GameEvent` stream and read-only
//! snapshots for drawing.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle, the resolver's sole geometric primitive
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Strict AABB overlap test (touching edges do not count)
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// The player avatar. Singleton, reset (never destroyed) on hits and falls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    pub moving: bool,
    pub facing_left: bool,
    /// Real-valued run-cycle phase, advances while moving
    pub animation_frame: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(PLAYER_SIZE),
            vel: Vec2::ZERO,
            on_ground: false,
            moving: false,
            facing_left: false,
            animation_frame: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Optional dynamic behavior carried by a platform.
///
/// At most one payload is active per platform, enforced by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum PlatformBehavior {
    #[default]
    Static,
    /// Gives way after sustained player contact
    Crumble { contact: f32 },
    /// Oscillates horizontally around its origin
    Oscillate {
        origin_x: f32,
        direction: f32,
        speed: f32,
        range: f32,
    },
    /// Periodically toggles visibility on an independent timer
    Phantom { timer: f32 },
}

/// A platform slab. Created per level, discarded wholesale on level change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub visible: bool,
    pub behavior: PlatformBehavior,
}

impl Platform {
    pub fn slab(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            visible: true,
            behavior: PlatformBehavior::Static,
        }
    }

    pub fn with_behavior(pos: Vec2, size: Vec2, behavior: PlatformBehavior) -> Self {
        Self {
            pos,
            size,
            visible: true,
            behavior,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Fixed catalog of hazard kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Rejection,
    Deadline,
    Requirement,
    Email,
    Spam,
    Interview,
    Reference,
    Teleport,
    Laser,
    Bomb,
    Quicksand,
    Lightning,
    Portal,
    GravityWell,
    Virus,
    Spy,
    DataBreach,
    Corruption,
    Boss,
}

impl ObstacleKind {
    /// Homing missiles are the only hazards spawned at runtime
    pub fn is_missile(&self) -> bool {
        matches!(self, ObstacleKind::Email | ObstacleKind::Spam)
    }
}

/// A hazard. Inactive obstacles are purged at the end of the frame in which
/// they deactivate; they never persist or re-activate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    pub active: bool,
    pub animation_frame: f32,
    pub vel: Vec2,
    /// Pursuit speed, present only on email/spam missiles
    pub homing_speed: Option<f32>,
    /// Countdown fuse, present only on bombs (ms)
    pub fuse_ms: Option<f32>,
    /// Link id, present only on portals
    pub portal_id: Option<u32>,
}

impl Obstacle {
    fn base(kind: ObstacleKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            kind,
            active: true,
            animation_frame: 0.0,
            vel: Vec2::ZERO,
            homing_speed: None,
            fuse_ms: None,
            portal_id: None,
        }
    }

    /// A stationary hazard at its catalog dimensions
    pub fn hazard(kind: ObstacleKind, pos: Vec2) -> Self {
        let size = match kind {
            ObstacleKind::Quicksand => Vec2::new(64.0, 32.0),
            ObstacleKind::GravityWell => Vec2::splat(48.0),
            ObstacleKind::Boss => Vec2::splat(64.0),
            _ => Vec2::splat(OBSTACLE_SIZE),
        };
        Self::base(kind, pos, size)
    }

    pub fn bomb(pos: Vec2, fuse_ms: f32) -> Self {
        let mut o = Self::hazard(ObstacleKind::Bomb, pos);
        o.fuse_ms = Some(fuse_ms);
        o
    }

    pub fn portal(pos: Vec2, portal_id: u32) -> Self {
        let mut o = Self::hazard(ObstacleKind::Portal, pos);
        o.portal_id = Some(portal_id);
        o
    }

    pub fn missile(kind: ObstacleKind, pos: Vec2, homing_speed: f32) -> Self {
        let mut o = Self::base(kind, pos, Vec2::splat(MISSILE_SIZE));
        o.homing_speed = Some(homing_speed);
        o
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A level exit. Exactly one per level is real; decoys are punitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec2,
    pub size: Vec2,
    pub is_real: bool,
    pub animation_frame: f32,
}

impl Goal {
    pub fn real(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(GOAL_SIZE),
            is_real: true,
            animation_frame: 0.0,
        }
    }

    pub fn decoy(pos: Vec2) -> Self {
        Self {
            is_real: false,
            ..Self::real(pos)
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Per-level rule set, derived purely from the level index.
///
/// Never mutated independently of a level change; re-deriving for the same
/// index always yields the same flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MechanicsFlags {
    pub platform_fade: bool,
    pub controls_reversed: bool,
    pub gravity_flipped: bool,
    pub fake_goals: bool,
    pub crumbling_platforms: bool,
    pub moving_platforms: bool,
    pub homing_missiles: bool,
    pub spam_filter: bool,
    pub phantom_platforms: bool,
    pub teleport_traps: bool,
    pub wind_tunnel: bool,
    pub laser_grid: bool,
    pub time_bombs: bool,
    pub mirror_dimension: bool,
    pub quicksand: bool,
    pub electric_storm: bool,
    pub portal_nexus: bool,
    pub gravity_wells: bool,
    pub virus_outbreak: bool,
    pub corporate_espionage: bool,
    pub data_breach: bool,
    pub system_corruption: bool,
    pub final_boss: bool,
}

/// Missile pressure for a level, monotone in the index from level 8 up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissileSpawnPolicy {
    pub max_concurrent: u32,
    pub interval_ms: f32,
}

impl Default for MissileSpawnPolicy {
    fn default() -> Self {
        Self {
            max_concurrent: 1,
            interval_ms: 3000.0,
        }
    }
}

/// Host viewport dimensions, read at level builds and every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pressed-key state for one frame. `jump` must be an edge (true only on
/// the frame the key went down), the held keys are level-triggered.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Outgoing notifications, drained by the host once per step.
///
/// The host translates these into its own state/view updates; the core
/// assumes no particular re-render mechanism.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The level index changed (host persists this for resumption)
    LevelChanged(u32),
    /// Success counter incremented
    ApplicationFiled,
    /// Rejection counter incremented
    RejectionLogged,
    /// Show a short narrative message
    Message {
        text: &'static str,
        auto_hide_ms: u32,
    },
    MessageCleared,
    /// Current prefix of a character-by-character reveal
    TypingMessage(String),
    TypingMessageCleared,
    /// Play a named cue
    Sound(&'static str),
    /// Terminal condition: the level index exceeded the last level
    TowerConquered { message: &'static str },
}

/// Delayed presentational transition, fired from inside step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduled {
    ClearMessage,
    ClearTyping,
    AdvanceLevel,
}

/// Queue entry tagged with the epoch it was scheduled in. Entries whose
/// epoch predates the latest level rebuild are discarded when they expire.
#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub remaining: f32,
    pub epoch: u64,
    pub what: Scheduled,
}

/// In-flight character-by-character message reveal
#[derive(Debug, Clone)]
pub struct TypingReveal {
    pub full: &'static str,
    pub shown: usize,
    pub timer: f32,
}

/// Complete engine state for the active level
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed; level layouts derive their RNG streams from it
    pub seed: u64,
    pub level: u32,
    /// Success counter (monotone)
    pub applications: u32,
    /// Rejection counter (monotone)
    pub rejections: u32,
    pub viewport: Viewport,
    pub mechanics: MechanicsFlags,
    pub missile_policy: MissileSpawnPolicy,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub goals: Vec<Goal>,
    pub camera_x: f32,
    pub frame_count: u64,
    /// Incremented on every level rebuild; stale scheduled events fizzle
    pub epoch: u64,
    pub scheduled: Vec<ScheduledEvent>,
    pub typing: Option<TypingReveal>,
    /// Accumulator against the missile spawn interval (ms)
    pub spawn_timer_ms: f32,
    /// Remaining missile suppression after a player reset (s)
    pub spawn_suppression: f32,
    /// A real-goal hit is being celebrated; goal checks pause until rebuild
    pub level_transition_pending: bool,
    /// Terminal: the run is over, step becomes inert
    pub tower_conquered: bool,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create engine state and build the starting level.
    ///
    /// `starting_level` comes from the host's saved progress; callers supply
    /// indices in 1..=MAX_LEVEL.
    pub fn new(viewport: Viewport, starting_level: u32, seed: u64) -> Self {
        let mut state = Self {
            seed,
            level: starting_level,
            applications: 0,
            rejections: 0,
            viewport,
            mechanics: MechanicsFlags::default(),
            missile_policy: MissileSpawnPolicy::default(),
            player: Player::new(Vec2::ZERO),
            platforms: Vec::new(),
            obstacles: Vec::new(),
            goals: Vec::new(),
            camera_x: 0.0,
            frame_count: 0,
            epoch: 0,
            scheduled: Vec::new(),
            typing: None,
            spawn_timer_ms: 0.0,
            spawn_suppression: 0.0,
            level_transition_pending: false,
            tower_conquered: false,
            rng: Pcg32::seed_from_u64(seed),
        };
        let mut events = Vec::new();
        state.rebuild_level(&mut events);
        state
    }

    /// Viewport updates take effect at the next clamp/spawn computation
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Player spawn point for the current mechanics
    pub fn spawn_point(&self) -> Vec2 {
        if self.mechanics.gravity_flipped {
            Vec2::new(SPAWN_X, FLIPPED_SPAWN_Y)
        } else {
            Vec2::new(SPAWN_X, self.viewport.height - 200.0)
        }
    }

    /// Reposition the player at spawn and open the missile suppression window
    pub fn reset_player(&mut self) {
        self.player.pos = self.spawn_point();
        self.player.vel = Vec2::ZERO;
        self.player.on_ground = false;
        self.player.animation_frame = 0.0;
        self.spawn_timer_ms = 0.0;
        self.spawn_suppression = SPAWN_SUPPRESSION_SECS;
    }

    /// Tear down the current level's entities and build the layout for
    /// `self.level`. Bumps the epoch so stale scheduled transitions fizzle.
    pub fn rebuild_level(&mut self, events: &mut Vec<GameEvent>) {
        self.epoch += 1;
        self.level_transition_pending = false;

        if self.typing.take().is_some() {
            events.push(GameEvent::TypingMessageCleared);
        }

        let layout = super::level::build_level(self.level, self.viewport, self.seed);
        self.mechanics = layout.mechanics;
        self.missile_policy = layout.missile_policy;
        self.platforms = layout.platforms;
        self.obstacles = layout.obstacles;
        self.goals = layout.goals;

        self.player = Player::new(self.spawn_point());
        self.spawn_timer_ms = 0.0;

        log::info!(
            "level {} built: {} platforms, {} obstacles, {} goals",
            self.level,
            self.platforms.len(),
            self.obstacles.len(),
            self.goals.len()
        );
    }

    /// Number of live homing missiles
    pub fn missile_count(&self) -> usize {
        self.obstacles
            .iter()
            .filter(|o| o.active && o.kind.is_missile())
            .count()
    }

    /// Enqueue a presentational transition against the current epoch
    pub fn schedule(&mut self, what: Scheduled, delay_secs: f32) {
        self.scheduled.push(ScheduledEvent {
            remaining: delay_secs,
            epoch: self.epoch,
            what,
        });
    }
}
