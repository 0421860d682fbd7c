//! ObstacleBehaviorEngine: per-kind hazard dynamics, platform behaviors,
//! and the missile spawn subsystem
//!
//! Each hazard kind maps to one behavior policy; kinds without a dedicated
//! policy fall through to the stationary default (animation only).

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

use super::state::{GameState, Obstacle, ObstacleKind, PlatformBehavior, Viewport};

/// Advance every active obstacle by one frame
pub fn step_obstacles(state: &mut GameState, dt: f32) {
    let player_center = state.player.rect().center();
    let player_pos = state.player.pos;

    for obstacle in &mut state.obstacles {
        obstacle.animation_frame += dt * 5.0;

        match obstacle.kind {
            ObstacleKind::Email | ObstacleKind::Spam => {
                // Critically damped chase: velocity eases toward the
                // direction-to-player target instead of snapping
                if let Some(homing_speed) = obstacle.homing_speed {
                    let delta = player_center - obstacle.rect().center();
                    let distance = delta.length();
                    if distance > 0.0 {
                        let target = delta / distance * homing_speed;
                        obstacle.vel += (target - obstacle.vel) * dt * HOMING_EASE_RATE;
                        obstacle.pos += obstacle.vel * dt;
                    }
                }
            }
            ObstacleKind::Bomb => {
                if let Some(fuse) = &mut obstacle.fuse_ms {
                    *fuse -= dt * 1000.0;
                    if *fuse <= 0.0 {
                        // Silent expiry: no blast radius, no cue
                        obstacle.active = false;
                    }
                }
            }
            ObstacleKind::Rejection => {
                let delta = player_pos - obstacle.pos;
                let distance = delta.length();
                if distance > 0.0 && distance < REJECTION_DRIFT_RANGE {
                    obstacle.pos += delta / distance * REJECTION_DRIFT_SPEED * dt;
                }
            }
            // Everything else sits still; only its animation advances
            _ => {}
        }
    }
}

/// Advance platform dynamics: group alternation, crumble, oscillation,
/// and phantom flicker. Each behavior is gated on its level mechanic.
pub fn step_platforms(state: &mut GameState, dt: f32) {
    if state.mechanics.platform_fade && state.level == 1 {
        let swapped = (state.frame_count / FADE_INTERVAL_FRAMES) % 2 == 1;
        let last = state.platforms.len().saturating_sub(1);
        for (index, platform) in state.platforms.iter_mut().enumerate() {
            // First and last platforms are always safe ground
            if index == 0 || index == last {
                platform.visible = true;
                continue;
            }
            let group_a = (index - 1) % 2 == 0;
            platform.visible = if swapped { !group_a } else { group_a };
        }
    }

    if state.mechanics.crumbling_platforms {
        let player_rect = state.player.rect();
        let player_vy = state.player.vel.y;
        let player_y = state.player.pos.y;
        for platform in &mut state.platforms {
            let slab = platform.rect();
            let top = platform.pos.y;
            if let PlatformBehavior::Crumble { contact } = &mut platform.behavior {
                // Resting: overlapping from above while not moving upward
                let resting =
                    player_rect.intersects(&slab) && player_vy >= 0.0 && player_y < top;
                if resting {
                    *contact += dt;
                    if *contact > CRUMBLE_CONTACT_SECS {
                        // Permanent: visibility is never revisited
                        platform.visible = false;
                    }
                }
            }
        }
    }

    if state.mechanics.moving_platforms {
        for platform in &mut state.platforms {
            if let PlatformBehavior::Oscillate {
                origin_x,
                direction,
                speed,
                range,
            } = &mut platform.behavior
            {
                platform.pos.x += *direction * *speed * dt;
                if platform.pos.x <= *origin_x - *range || platform.pos.x >= *origin_x + *range {
                    *direction = -*direction;
                }
            }
        }
    }

    if state.mechanics.phantom_platforms {
        for platform in &mut state.platforms {
            if let PlatformBehavior::Phantom { timer } = &mut platform.behavior {
                // Independent timers keep phantom platforms out of sync
                *timer += dt;
                if *timer > PHANTOM_FLICKER_SECS {
                    platform.visible = !platform.visible;
                    *timer = 0.0;
                }
            }
        }
    }
}

/// Accumulate spawn time and launch a missile when the interval elapses,
/// unless the post-reset suppression window is open or the concurrency cap
/// is reached.
pub fn step_missile_spawning(state: &mut GameState, dt: f32) {
    if !state.mechanics.homing_missiles {
        return;
    }
    if state.spawn_suppression > 0.0 {
        return;
    }

    state.spawn_timer_ms += dt * 1000.0;
    if state.spawn_timer_ms >= state.missile_policy.interval_ms {
        state.spawn_timer_ms = 0.0;
        if (state.missile_count() as u32) < state.missile_policy.max_concurrent {
            let missile = spawn_missile(state.viewport, state.level, &mut state.rng);
            state.obstacles.push(missile);
        }
    }
}

/// Build a missile at a random point just outside one of the four viewport
/// edges: 70% email, 30% spam, homing speed scaling with the level.
pub(crate) fn spawn_missile(viewport: Viewport, level: u32, rng: &mut Pcg32) -> Obstacle {
    let w = viewport.width;
    let h = viewport.height;

    let pos = match rng.random_range(0..4u32) {
        0 => Vec2::new(rng.random::<f32>() * w, -EDGE_SPAWN_MARGIN),
        1 => Vec2::new(w + EDGE_SPAWN_MARGIN, rng.random::<f32>() * h),
        2 => Vec2::new(rng.random::<f32>() * w, h + EDGE_SPAWN_MARGIN),
        _ => Vec2::new(-EDGE_SPAWN_MARGIN, rng.random::<f32>() * h),
    };

    let kind = if rng.random::<f32>() < 0.7 {
        ObstacleKind::Email
    } else {
        ObstacleKind::Spam
    };

    let homing_speed = MISSILE_BASE_SPEED
        + rng.random::<f32>() * MISSILE_SPEED_JITTER
        + level.saturating_sub(8) as f32 * MISSILE_SPEED_PER_LEVEL;

    Obstacle::missile(kind, pos, homing_speed)
}
