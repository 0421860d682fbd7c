//! Player integration and camera tracking
//!
//! Semi-implicit Euler under per-level rules: reversed controls, flipped
//! gravity, wind drift, and gravity-well perturbation. deltaTime arrives
//! pre-clamped by the host; there is no internal sub-stepping.

use crate::consts::*;

use super::state::{FrameInput, GameEvent, GameState, ObstacleKind};

/// Advance the player one frame
pub fn step_player(state: &mut GameState, input: &FrameInput, dt: f32, events: &mut Vec<GameEvent>) {
    let mechanics = state.mechanics;

    let mut direction = 0.0f32;
    if input.left {
        direction = if mechanics.controls_reversed { 1.0 } else { -1.0 };
        state.player.facing_left = !mechanics.controls_reversed;
    }
    if input.right {
        direction = if mechanics.controls_reversed { -1.0 } else { 1.0 };
        state.player.facing_left = mechanics.controls_reversed;
    }

    // Forced drift on top of player input, not replacing it
    if mechanics.wind_tunnel {
        direction += (state.frame_count as f32 * 0.1).sin() * 0.5;
    }

    state.player.vel.x = direction * MOVE_SPEED;
    state.player.moving = direction.abs() > 0.1;
    if state.player.moving {
        state.player.animation_frame += dt * 8.0;
    } else {
        state.player.animation_frame = 0.0;
    }

    if input.jump && state.player.on_ground {
        state.player.vel.y = if mechanics.gravity_flipped {
            JUMP_SPEED
        } else {
            -JUMP_SPEED
        };
        state.player.on_ground = false;
        events.push(GameEvent::Sound("jump"));
    }

    let mut gravity = if mechanics.gravity_flipped {
        -GRAVITY
    } else {
        GRAVITY
    };

    // Wells pull on both axes: horizontal straight into velocity, vertical
    // as a signed addend to the gravity term. Multiple wells sum.
    if mechanics.gravity_wells {
        let player_pos = state.player.pos;
        for obstacle in &state.obstacles {
            if obstacle.kind != ObstacleKind::GravityWell || !obstacle.active {
                continue;
            }
            let delta = player_pos - obstacle.pos;
            let distance = delta.length();
            if distance > 0.0 && distance < WELL_RADIUS {
                let force = (WELL_RADIUS - distance) / WELL_RADIUS * WELL_FORCE;
                state.player.vel.x -= delta.x / distance * force * dt;
                gravity -= delta.y / distance * force;
            }
        }
    }

    state.player.vel.y += gravity * dt;

    state.player.pos.x += state.player.vel.x * dt;
    state.player.pos.y += state.player.vel.y * dt;

    let max_x = state.viewport.width - state.player.size.x;
    state.player.pos.x = state.player.pos.x.clamp(0.0, max_x);

    // Only the flipped-gravity level pens the player vertically
    if mechanics.gravity_flipped {
        state.player.pos.y = state
            .player
            .pos
            .y
            .clamp(100.0, state.viewport.height - 100.0);
    }
}

/// Exponentially smoothed horizontal tracking; no vertical movement
pub fn step_camera(state: &mut GameState) {
    let target = state.player.pos.x - state.viewport.width / 2.0;
    state.camera_x += (target - state.camera_x) * CAMERA_SMOOTHING;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use glam::Vec2;

    const VIEW: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn held_right() -> FrameInput {
        FrameInput {
            right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_horizontal_velocity_from_input() {
        let mut state = GameState::new(VIEW, 4, 1);
        let mut events = Vec::new();
        step_player(&mut state, &held_right(), 1.0 / 60.0, &mut events);
        assert_eq!(state.player.vel.x, MOVE_SPEED);
        assert!(state.player.moving);
        assert!(!state.player.facing_left);
    }

    #[test]
    fn test_reversed_controls_invert_direction() {
        // Level 2 reverses controls
        let mut state = GameState::new(VIEW, 2, 1);
        assert!(state.mechanics.controls_reversed);
        let mut events = Vec::new();
        step_player(&mut state, &held_right(), 1.0 / 60.0, &mut events);
        assert_eq!(state.player.vel.x, -MOVE_SPEED);
        assert!(state.player.facing_left);
    }

    #[test]
    fn test_flipped_gravity_sign() {
        // Level 3 flips gravity; the player accelerates upward on screen
        let mut state = GameState::new(VIEW, 3, 1);
        state.player.pos = Vec2::new(100.0, 120.0);
        state.player.vel = Vec2::ZERO;
        let mut events = Vec::new();
        step_player(&mut state, &FrameInput::default(), 1.0 / 60.0, &mut events);
        assert!(state.player.vel.y < 0.0);
    }

    #[test]
    fn test_normal_gravity_pulls_down() {
        let mut state = GameState::new(VIEW, 2, 1);
        state.player.vel = Vec2::ZERO;
        let mut events = Vec::new();
        step_player(&mut state, &FrameInput::default(), 1.0 / 60.0, &mut events);
        assert!(state.player.vel.y > 0.0);
    }

    #[test]
    fn test_horizontal_clamp() {
        let mut state = GameState::new(VIEW, 4, 1);
        state.player.pos.x = 0.5;
        let mut events = Vec::new();
        let input = FrameInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            step_player(&mut state, &input, 1.0 / 30.0, &mut events);
        }
        assert_eq!(state.player.pos.x, 0.0);
    }

    #[test]
    fn test_wind_tunnel_drifts_without_input() {
        let mut state = GameState::new(VIEW, 13, 1);
        assert!(state.mechanics.wind_tunnel);
        state.frame_count = 16; // sin(1.6) near peak
        let mut events = Vec::new();
        step_player(&mut state, &FrameInput::default(), 1.0 / 60.0, &mut events);
        assert!(state.player.vel.x.abs() > 0.0);
    }

    #[test]
    fn test_gravity_well_pulls_player() {
        let mut state = GameState::new(VIEW, 20, 1);
        assert!(state.mechanics.gravity_wells);
        let well = state
            .obstacles
            .iter()
            .find(|o| o.kind == ObstacleKind::GravityWell)
            .expect("level 20 has a gravity well")
            .pos;
        // Park the player 100 px left of the well, inside its radius
        state.player.pos = well - Vec2::new(100.0, 0.0);
        state.player.vel = Vec2::ZERO;
        let mut events = Vec::new();
        step_player(&mut state, &FrameInput::default(), 1.0 / 60.0, &mut events);
        assert!(
            state.player.vel.x > 0.0,
            "well to the right must pull velocity rightward"
        );
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut state = GameState::new(VIEW, 2, 1);
        let input = FrameInput {
            jump: true,
            ..Default::default()
        };
        let mut events = Vec::new();
        step_player(&mut state, &input, 1.0 / 60.0, &mut events);
        assert!(!events.contains(&GameEvent::Sound("jump")));

        state.player.on_ground = true;
        state.player.vel = Vec2::ZERO;
        events.clear();
        step_player(&mut state, &input, 1.0 / 60.0, &mut events);
        assert!(events.contains(&GameEvent::Sound("jump")));
        assert!(state.player.vel.y < 0.0);
        assert!(!state.player.on_ground);
    }

    #[test]
    fn test_camera_smoothing() {
        let mut state = GameState::new(VIEW, 2, 1);
        state.camera_x = 0.0;
        state.player.pos.x = 1000.0;
        step_camera(&mut state);
        let target = 1000.0 - VIEW.width / 2.0;
        assert!((state.camera_x - target * CAMERA_SMOOTHING).abs() < 1e-3);
    }
}
