//! Frame step orchestration
//!
//! One `step` per animation frame advances every subsystem on the same
//! deltaTime: player physics, platform and obstacle behaviors, the missile
//! spawner, collision resolution, the typing reveal, and the scheduled
//! presentational transitions. deltaTime must be pre-clamped by the host
//! (`consts::MAX_FRAME_DT`); the core performs no catch-up.

use super::state::{FrameInput, GameEvent, GameState, Scheduled};
use super::{behavior, collision, physics};
use crate::consts::*;

/// Advance the simulation by one frame and return the notifications the
/// host must translate into its own state/view updates.
pub fn step(state: &mut GameState, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.tower_conquered {
        return events;
    }

    state.frame_count += 1;
    if state.spawn_suppression > 0.0 {
        state.spawn_suppression = (state.spawn_suppression - dt).max(0.0);
    }

    physics::step_player(state, input, dt, &mut events);
    behavior::step_platforms(state, dt);
    behavior::step_obstacles(state, dt);
    for goal in &mut state.goals {
        goal.animation_frame += 0.1;
    }
    physics::step_camera(state);
    step_typing(state, dt, &mut events);
    behavior::step_missile_spawning(state, dt);
    collision::resolve(state, &mut events);
    fire_scheduled(state, dt, &mut events);

    // Obstacles deactivated this frame never see the next one
    state.obstacles.retain(|o| o.active);

    events
}

/// Reveal the next character of an in-flight typing message
fn step_typing(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    let Some(typing) = &mut state.typing else {
        return;
    };
    typing.timer += dt;
    if typing.timer >= TYPING_CHAR_SECS {
        typing.timer = 0.0;
        let total = typing.full.chars().count();
        if typing.shown < total {
            typing.shown += 1;
            let text: String = typing.full.chars().take(typing.shown).collect();
            events.push(GameEvent::TypingMessage(text));
        }
    }
}

/// Fire due scheduled transitions. Entries scheduled before the latest
/// level rebuild carry a stale epoch and are dropped unfired.
fn fire_scheduled(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    for entry in &mut state.scheduled {
        entry.remaining -= dt;
    }

    let mut fired = Vec::new();
    state.scheduled.retain(|entry| {
        if entry.remaining <= 0.0 {
            fired.push(entry.clone());
            false
        } else {
            true
        }
    });

    for entry in fired {
        if entry.epoch != state.epoch {
            continue;
        }
        match entry.what {
            Scheduled::ClearMessage => events.push(GameEvent::MessageCleared),
            Scheduled::ClearTyping => {
                if state.typing.take().is_some() {
                    events.push(GameEvent::TypingMessageCleared);
                }
            }
            Scheduled::AdvanceLevel => {
                events.push(GameEvent::MessageCleared);
                state.rebuild_level(events);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level;
    use crate::sim::state::{ObstacleKind, TypingReveal, Viewport};
    use glam::Vec2;

    const VIEW: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };
    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_landing_ends_frame_grounded() {
        let mut state = GameState::new(VIEW, 2, 1);
        let platform = state.platforms[0].clone();

        // One pixel above the slab, falling; one coarse step must land
        state.player.pos = Vec2::new(
            platform.pos.x + 20.0,
            platform.pos.y - state.player.size.y - 1.0,
        );
        state.player.vel = Vec2::ZERO;

        step(&mut state, &FrameInput::default(), 1.0 / 30.0);

        assert!(state.player.on_ground);
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(state.player.pos.y, platform.pos.y - state.player.size.y);
    }

    #[test]
    fn test_deactivated_obstacle_gone_next_frame() {
        let mut state = GameState::new(VIEW, 15, 1);
        let bombs_before = state
            .obstacles
            .iter()
            .filter(|o| o.kind == ObstacleKind::Bomb)
            .count();
        assert_eq!(bombs_before, 2);

        // Force one fuse to expire inside the next step
        let index = state
            .obstacles
            .iter()
            .position(|o| o.kind == ObstacleKind::Bomb)
            .unwrap();
        state.obstacles[index].fuse_ms = Some(5.0);

        step(&mut state, &FrameInput::default(), 1.0 / 30.0);

        let bombs_after = state
            .obstacles
            .iter()
            .filter(|o| o.kind == ObstacleKind::Bomb)
            .count();
        assert_eq!(bombs_after, 1);
        assert!(state.obstacles.iter().all(|o| o.active));
    }

    #[test]
    fn test_group_swap_after_120_frames() {
        let mut state = GameState::new(VIEW, 1, 1);
        let last = state.platforms.len() - 1;
        // Keep the player parked on the ground slab out of harm's way
        let rest = Vec2::new(50.0, state.platforms[0].pos.y - state.player.size.y);

        for _ in 0..119 {
            state.player.pos = rest;
            state.player.vel = Vec2::ZERO;
            step(&mut state, &FrameInput::default(), DT);
        }
        assert!(state.platforms[1].visible);
        assert!(!state.platforms[2].visible);

        state.player.pos = rest;
        step(&mut state, &FrameInput::default(), DT);
        assert!(!state.platforms[1].visible);
        assert!(state.platforms[2].visible);
        assert!(state.platforms[0].visible);
        assert!(state.platforms[last].visible);
    }

    #[test]
    fn test_goal_reach_rebuilds_after_display_delay() {
        let mut state = GameState::new(VIEW, 1, 1);
        let goal = state.goals.iter().find(|g| g.is_real).unwrap().pos;
        state.player.pos = goal;
        state.player.vel = Vec2::ZERO;

        let events = step(&mut state, &FrameInput::default(), DT);
        assert!(events.contains(&GameEvent::LevelChanged(2)));
        assert_eq!(state.level, 2);
        assert!(state.level_transition_pending);
        // Entities are still the old level's until the delay elapses
        assert_eq!(state.platforms.len(), 10);

        let epoch_before = state.epoch;
        let mut rebuilt = false;
        for _ in 0..80 {
            let events = step(&mut state, &FrameInput::default(), 1.0 / 30.0);
            if events.contains(&GameEvent::MessageCleared) {
                rebuilt = true;
            }
        }
        assert!(rebuilt);
        assert_eq!(state.epoch, epoch_before + 1);
        assert!(!state.level_transition_pending);
        assert_eq!(state.level, 2);
        assert_eq!(state.applications, 1);

        let expected = level::build_level(2, VIEW, state.seed);
        assert_eq!(state.platforms.len(), expected.platforms.len());
        assert_eq!(state.mechanics, expected.mechanics);
    }

    #[test]
    fn test_stale_scheduled_event_is_discarded() {
        let mut state = GameState::new(VIEW, 2, 1);
        state.schedule(Scheduled::ClearMessage, 0.05);

        // Level rebuild bumps the epoch before the entry expires
        let mut events = Vec::new();
        state.rebuild_level(&mut events);

        // Park the player so nothing else emits
        state.player.pos = Vec2::new(50.0, state.platforms[0].pos.y - state.player.size.y);
        state.player.vel = Vec2::ZERO;
        let mut cleared = false;
        for _ in 0..20 {
            state.player.pos = Vec2::new(50.0, state.platforms[0].pos.y - state.player.size.y);
            let events = step(&mut state, &FrameInput::default(), DT);
            cleared |= events.contains(&GameEvent::MessageCleared);
        }
        assert!(!cleared, "stale-epoch entry must fizzle");
        assert!(state.scheduled.is_empty());
    }

    #[test]
    fn test_typing_reveal_advances_per_character() {
        let mut state = GameState::new(VIEW, 2, 1);
        state.typing = Some(TypingReveal {
            full: "No.",
            shown: 0,
            timer: 0.0,
        });
        state.player.pos = Vec2::new(50.0, state.platforms[0].pos.y - state.player.size.y);
        state.player.vel = Vec2::ZERO;

        let mut revealed = Vec::new();
        for _ in 0..12 {
            state.player.pos = Vec2::new(50.0, state.platforms[0].pos.y - state.player.size.y);
            for event in step(&mut state, &FrameInput::default(), DT) {
                if let GameEvent::TypingMessage(text) = event {
                    revealed.push(text);
                }
            }
        }
        assert_eq!(revealed, vec!["N", "No", "No."]);
    }

    #[test]
    fn test_typing_clear_fires_after_display_window() {
        let mut state = GameState::new(VIEW, 2, 1);
        state.typing = Some(TypingReveal {
            full: "No.",
            shown: 3,
            timer: 0.0,
        });
        state.schedule(Scheduled::ClearTyping, 0.1);
        state.player.vel = Vec2::ZERO;

        let mut cleared = false;
        for _ in 0..10 {
            state.player.pos = Vec2::new(50.0, state.platforms[0].pos.y - state.player.size.y);
            let events = step(&mut state, &FrameInput::default(), DT);
            cleared |= events.contains(&GameEvent::TypingMessageCleared);
        }
        assert!(cleared);
        assert!(state.typing.is_none());
    }

    #[test]
    fn test_step_is_inert_after_conquest() {
        let mut state = GameState::new(VIEW, 2, 1);
        state.tower_conquered = true;
        let frame = state.frame_count;
        let events = step(&mut state, &FrameInput::default(), DT);
        assert!(events.is_empty());
        assert_eq!(state.frame_count, frame);
    }

    #[test]
    fn test_determinism_same_seed_same_run() {
        let script = [
            FrameInput {
                right: true,
                ..Default::default()
            },
            FrameInput {
                right: true,
                jump: true,
                ..Default::default()
            },
            FrameInput::default(),
            FrameInput {
                left: true,
                ..Default::default()
            },
        ];

        let mut a = GameState::new(VIEW, 8, 424242);
        let mut b = GameState::new(VIEW, 8, 424242);
        for _ in 0..120 {
            for input in &script {
                let ea = step(&mut a, input, DT);
                let eb = step(&mut b, input, DT);
                assert_eq!(ea, eb);
            }
        }
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.rejections, b.rejections);
    }

    #[test]
    fn test_fall_reset_suppresses_missile_spawns() {
        let mut state = GameState::new(VIEW, 8, 1);
        state.obstacles.clear();
        state.missile_policy.interval_ms = 10.0;

        // Drop the player out of the world: reset opens the window
        state.player.pos = Vec2::new(400.0, VIEW.height + 200.0);
        step(&mut state, &FrameInput::default(), DT);
        assert!(state.spawn_suppression > 0.0);
        let count_at_reset = state.missile_count();

        // Within the window nothing spawns, even at a 10 ms interval
        for _ in 0..30 {
            step(&mut state, &FrameInput::default(), DT);
        }
        assert_eq!(state.missile_count(), count_at_reset);
    }
}
