//! LevelDirector: pure mapping from a level index to a layout
//!
//! `build_level` is deterministic for a given (level, viewport, seed): the
//! per-level RNG stream is derived from the run seed, so mechanics flags and
//! entity counts never vary between rebuilds of the same level. Randomness
//! is confined to the spots that call for it: phantom assignment and the
//! seeded missile.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::behavior;
use super::state::{
    Goal, MechanicsFlags, MissileSpawnPolicy, Obstacle, ObstacleKind, Platform, PlatformBehavior,
    Viewport,
};
use crate::consts::*;

/// Everything a level (re)start produces
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub goals: Vec<Goal>,
    pub mechanics: MechanicsFlags,
    pub missile_policy: MissileSpawnPolicy,
}

/// Derive the rule set for a level. Pure in the level index.
pub fn mechanics_for_level(level: u32) -> MechanicsFlags {
    MechanicsFlags {
        platform_fade: level == 1,
        controls_reversed: matches!(level, 2 | 5 | 10),
        gravity_flipped: level == 3,
        fake_goals: matches!(level, 4 | 5),
        crumbling_platforms: matches!(level, 6 | 10),
        moving_platforms: level == 7,
        homing_missiles: level >= 8,
        spam_filter: level == 9,
        phantom_platforms: level == 11,
        teleport_traps: level == 12,
        wind_tunnel: level == 13,
        laser_grid: level == 14,
        time_bombs: level == 15,
        mirror_dimension: level == 16,
        quicksand: level == 17,
        electric_storm: level == 18,
        portal_nexus: level == 19,
        gravity_wells: level == 20,
        virus_outbreak: level == 21,
        corporate_espionage: level == 22,
        data_breach: level == 23,
        system_corruption: level == 24,
        final_boss: level == 25,
    }
}

/// Missile pressure ramps from level 8: one more concurrent missile every
/// two levels (capped at 4), spawn interval shrinking 200 ms per level
/// (floored at 1500 ms).
pub fn missile_policy_for_level(level: u32) -> MissileSpawnPolicy {
    if level < 8 {
        return MissileSpawnPolicy::default();
    }
    let past = level - 8;
    MissileSpawnPolicy {
        max_concurrent: (1 + past / 2).min(4),
        interval_ms: (4000.0 - past as f32 * 200.0).max(1500.0),
    }
}

/// Per-level RNG stream, independent of build order within a run
fn level_rng(seed: u64, level: u32) -> Pcg32 {
    Pcg32::seed_from_u64(seed ^ (level as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Build the full layout for a level. No side effects beyond the returned
/// collections.
pub fn build_level(level: u32, viewport: Viewport, seed: u64) -> LevelLayout {
    let mut rng = level_rng(seed, level);
    let mechanics = mechanics_for_level(level);
    let missile_policy = missile_policy_for_level(level);

    let platforms = build_platforms(level, viewport, &mut rng);
    let (mut obstacles, goals) = populate_hazards(level, viewport);

    // Levels with missile pressure start with one already inbound
    if mechanics.homing_missiles {
        obstacles.push(behavior::spawn_missile(viewport, level, &mut rng));
    }

    LevelLayout {
        platforms,
        obstacles,
        goals,
        mechanics,
        missile_policy,
    }
}

fn build_platforms(level: u32, viewport: Viewport, rng: &mut Pcg32) -> Vec<Platform> {
    let w = viewport.width;
    let h = viewport.height;
    let mut platforms = Vec::new();

    if level == 3 {
        // Inverted gravity: a ceiling ledge, then a descending staircase
        platforms.push(Platform::slab(
            Vec2::new(0.0, 100.0),
            Vec2::new(w * 0.3, PLATFORM_HEIGHT),
        ));
        let steps = [
            (0.25, 200.0),
            (0.45, 280.0),
            (0.65, 360.0),
            (0.85, 440.0),
            (0.7, 520.0),
            (0.5, 600.0),
        ];
        for &(fx, y) in &steps {
            platforms.push(Platform::slab(
                Vec2::new(w * fx - 80.0, y),
                Vec2::new(160.0, PLATFORM_HEIGHT),
            ));
        }
        platforms.push(Platform::slab(
            Vec2::new(w - 200.0, h - 150.0),
            Vec2::new(200.0, PLATFORM_HEIGHT),
        ));
        return platforms;
    }

    // Ground slab under the spawn point
    platforms.push(Platform::slab(
        Vec2::new(0.0, h - 100.0),
        Vec2::new(w * 0.3, 100.0),
    ));

    match level {
        1 => {
            // Two visibility groups that will swap every 120 frames
            for i in 1..=8u32 {
                let x = w / 9.0 * i as f32;
                let y = h - 150.0 - i as f32 * 40.0;
                let mut platform = Platform::slab(
                    Vec2::new(x - 80.0, y),
                    Vec2::new(160.0, PLATFORM_HEIGHT),
                );
                platform.visible = i % 2 == 1;
                platforms.push(platform);
            }
        }
        6 | 10 => {
            for i in 1..=6u32 {
                let x = w / 7.0 * i as f32;
                let y = h - 120.0 - i as f32 * 50.0;
                platforms.push(Platform::with_behavior(
                    Vec2::new(x - 60.0, y),
                    Vec2::new(120.0, PLATFORM_HEIGHT),
                    PlatformBehavior::Crumble { contact: 0.0 },
                ));
            }
        }
        7 => {
            for i in 1..=5u32 {
                let x = w / 6.0 * i as f32;
                let y = h - 150.0 - i as f32 * 60.0;
                platforms.push(Platform::with_behavior(
                    Vec2::new(x - 50.0, y),
                    Vec2::new(100.0, PLATFORM_HEIGHT),
                    PlatformBehavior::Oscillate {
                        origin_x: x - 50.0,
                        direction: if i % 2 == 0 { 1.0 } else { -1.0 },
                        speed: 50.0,
                        range: 100.0,
                    },
                ));
            }
        }
        11 => {
            for i in 1..=7u32 {
                let x = w / 8.0 * i as f32;
                let y = h - 120.0 - i as f32 * 45.0;
                let behavior = if rng.random::<f32>() < 0.4 {
                    PlatformBehavior::Phantom { timer: 0.0 }
                } else {
                    PlatformBehavior::Static
                };
                platforms.push(Platform::with_behavior(
                    Vec2::new(x - 50.0, y),
                    Vec2::new(100.0, PLATFORM_HEIGHT),
                    behavior,
                ));
            }
        }
        _ => stable_platforms(level, viewport, &mut platforms),
    }

    // Exit shelf below the goal
    platforms.push(Platform::slab(
        Vec2::new(w - 200.0, h - 450.0),
        Vec2::new(200.0, PLATFORM_HEIGHT),
    ));

    platforms
}

/// Tiered stable generator: density steps up with the level range, and the
/// densest tier gets a sinusoidal height perturbation for vertical variety.
fn stable_platforms(level: u32, viewport: Viewport, platforms: &mut Vec<Platform>) {
    let w = viewport.width;
    let h = viewport.height;

    let (count, spacing, y_step, width) = if level <= 5 {
        (6u32, 7.0, 50.0, 120.0)
    } else if level <= 15 {
        (8, 9.0, 45.0, 90.0)
    } else {
        (10, 11.0, 40.0, 80.0)
    };

    for i in 1..=count {
        let x = w / spacing * i as f32;
        let variation = if level > 15 {
            (i as f32 * 0.5).sin() * 60.0
        } else {
            0.0
        };
        let y = h - 120.0 - i as f32 * y_step + variation;
        platforms.push(Platform::slab(
            Vec2::new(x - width / 2.0, y),
            Vec2::new(width, PLATFORM_HEIGHT),
        ));
    }
}

/// Explicit per-level hazard and goal catalog. Positions are fractions of
/// the viewport; out-of-range indices fall back to the level 1 table.
fn populate_hazards(level: u32, viewport: Viewport) -> (Vec<Obstacle>, Vec<Goal>) {
    use ObstacleKind::*;

    let w = viewport.width;
    let h = viewport.height;
    let mut obstacles = Vec::new();
    let mut goals = Vec::new();

    // The real goal sits on the exit shelf on almost every level
    let exit = Vec2::new(w - 150.0, h - 500.0);

    match level {
        2 => {
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.3, h - 200.0)));
            obstacles.push(Obstacle::hazard(Deadline, Vec2::new(w * 0.6, h - 300.0)));
            goals.push(Goal::real(exit));
        }
        3 => {
            obstacles.push(Obstacle::hazard(Requirement, Vec2::new(w * 0.4, 350.0)));
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.7, 500.0)));
            goals.push(Goal::real(Vec2::new(w - 150.0, h - 200.0)));
        }
        4 => {
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.5, h - 300.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.3, h - 500.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.6, h - 450.0)));
            goals.push(Goal::real(exit));
        }
        5 => {
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.3, h - 200.0)));
            obstacles.push(Obstacle::hazard(Deadline, Vec2::new(w * 0.5, h - 300.0)));
            obstacles.push(Obstacle::hazard(Requirement, Vec2::new(w * 0.7, h - 400.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.2, h - 450.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.5, h - 480.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.8, h - 420.0)));
            goals.push(Goal::real(exit));
        }
        6 => {
            obstacles.push(Obstacle::hazard(Deadline, Vec2::new(w * 0.4, h - 250.0)));
            obstacles.push(Obstacle::hazard(Requirement, Vec2::new(w * 0.7, h - 350.0)));
            goals.push(Goal::real(exit));
        }
        7 => {
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.3, h - 200.0)));
            obstacles.push(Obstacle::hazard(Deadline, Vec2::new(w * 0.6, h - 350.0)));
            goals.push(Goal::real(exit));
        }
        8 => {
            obstacles.push(Obstacle::hazard(Deadline, Vec2::new(w * 0.5, h - 250.0)));
            goals.push(Goal::real(exit));
        }
        9 => {
            obstacles.push(Obstacle::hazard(Interview, Vec2::new(w * 0.4, h - 300.0)));
            obstacles.push(Obstacle::hazard(Reference, Vec2::new(w * 0.6, h - 400.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.4, h - 500.0)));
            goals.push(Goal::real(exit));
        }
        10 => {
            obstacles.push(Obstacle::hazard(Interview, Vec2::new(w * 0.3, h - 200.0)));
            obstacles.push(Obstacle::hazard(Reference, Vec2::new(w * 0.7, h - 350.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.25, h - 500.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.5, h - 470.0)));
            goals.push(Goal::decoy(Vec2::new(w * 0.75, h - 480.0)));
            goals.push(Goal::real(exit));
        }
        11 => {
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.4, h - 250.0)));
            goals.push(Goal::real(exit));
        }
        12 => {
            obstacles.push(Obstacle::hazard(Teleport, Vec2::new(w * 0.3, h - 200.0)));
            obstacles.push(Obstacle::hazard(Teleport, Vec2::new(w * 0.7, h - 350.0)));
            goals.push(Goal::real(exit));
        }
        13 => {
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.5, h - 300.0)));
            goals.push(Goal::real(exit));
        }
        14 => {
            obstacles.push(Obstacle::hazard(Laser, Vec2::new(w * 0.2, h - 200.0)));
            obstacles.push(Obstacle::hazard(Laser, Vec2::new(w * 0.5, h - 300.0)));
            obstacles.push(Obstacle::hazard(Laser, Vec2::new(w * 0.8, h - 400.0)));
            goals.push(Goal::real(exit));
        }
        15 => {
            obstacles.push(Obstacle::bomb(Vec2::new(w * 0.3, h - 250.0), 5000.0));
            obstacles.push(Obstacle::bomb(Vec2::new(w * 0.7, h - 350.0), 3000.0));
            goals.push(Goal::real(exit));
        }
        16 => {
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.4, h - 300.0)));
            goals.push(Goal::real(exit));
        }
        17 => {
            obstacles.push(Obstacle::hazard(Quicksand, Vec2::new(w * 0.3, h - 200.0)));
            obstacles.push(Obstacle::hazard(Quicksand, Vec2::new(w * 0.6, h - 350.0)));
            goals.push(Goal::real(exit));
        }
        18 => {
            obstacles.push(Obstacle::hazard(Lightning, Vec2::new(w * 0.2, h - 200.0)));
            obstacles.push(Obstacle::hazard(Lightning, Vec2::new(w * 0.5, h - 300.0)));
            obstacles.push(Obstacle::hazard(Lightning, Vec2::new(w * 0.8, h - 400.0)));
            goals.push(Goal::real(exit));
        }
        19 => {
            obstacles.push(Obstacle::portal(Vec2::new(w * 0.3, h - 250.0), 1));
            obstacles.push(Obstacle::portal(Vec2::new(w * 0.7, h - 350.0), 2));
            goals.push(Goal::real(exit));
        }
        20 => {
            obstacles.push(Obstacle::hazard(GravityWell, Vec2::new(w * 0.4, h - 300.0)));
            goals.push(Goal::real(exit));
        }
        21 => {
            obstacles.push(Obstacle::hazard(Virus, Vec2::new(w * 0.2, h - 200.0)));
            obstacles.push(Obstacle::hazard(Virus, Vec2::new(w * 0.5, h - 300.0)));
            obstacles.push(Obstacle::hazard(Virus, Vec2::new(w * 0.8, h - 400.0)));
            goals.push(Goal::real(exit));
        }
        22 => {
            obstacles.push(Obstacle::hazard(Spy, Vec2::new(w * 0.3, h - 250.0)));
            obstacles.push(Obstacle::hazard(Spy, Vec2::new(w * 0.7, h - 350.0)));
            goals.push(Goal::real(exit));
        }
        23 => {
            obstacles.push(Obstacle::hazard(DataBreach, Vec2::new(w * 0.4, h - 300.0)));
            goals.push(Goal::real(exit));
        }
        24 => {
            obstacles.push(Obstacle::hazard(Corruption, Vec2::new(w * 0.2, h - 200.0)));
            obstacles.push(Obstacle::hazard(Corruption, Vec2::new(w * 0.5, h - 300.0)));
            obstacles.push(Obstacle::hazard(Corruption, Vec2::new(w * 0.8, h - 400.0)));
            goals.push(Goal::real(exit));
        }
        25 => {
            obstacles.push(Obstacle::hazard(Boss, Vec2::new(w * 0.5, h - 300.0)));
            goals.push(Goal::real(exit));
        }
        _ => {
            obstacles.push(Obstacle::hazard(Rejection, Vec2::new(w * 0.4, h - 200.0)));
            goals.push(Goal::real(exit));
        }
    }

    (obstacles, goals)
}
