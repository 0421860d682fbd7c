//! Collision detection and resolution
//!
//! Axis-aligned bounding boxes only; no continuous or swept collision.
//! Fast motion can tunnel through thin obstacles, accepted given the
//! host-side deltaTime cap. Platform contact resolves only from the legal
//! side for the current gravity orientation; horizontal contact is never
//! resolved.

use crate::consts::*;

use super::messages;
use super::state::{GameEvent, GameState, Scheduled, TypingReveal};

/// Run the full resolution pass for one frame
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    resolve_platform_landings(state);
    resolve_obstacle_hits(state, events);
    resolve_goals(state, events);
    resolve_bounds(state);
}

/// Landing: snap to the contact surface, kill vertical velocity, ground
fn resolve_platform_landings(state: &mut GameState) {
    state.player.on_ground = false;
    let flipped = state.mechanics.gravity_flipped;

    let player = &mut state.player;
    for platform in &state.platforms {
        if !platform.visible {
            continue;
        }
        if !player.rect().intersects(&platform.rect()) {
            continue;
        }
        if flipped {
            // Rising into the underside of a platform
            if player.vel.y < 0.0 && player.pos.y + player.size.y > platform.pos.y + platform.size.y
            {
                player.pos.y = platform.pos.y + platform.size.y;
                player.vel.y = 0.0;
                player.on_ground = true;
            }
        } else if player.vel.y > 0.0 && player.pos.y < platform.pos.y {
            player.pos.y = platform.pos.y - player.size.y;
            player.vel.y = 0.0;
            player.on_ground = true;
        }
    }
}

/// Hazard hits are one-shot: the obstacle deactivates within the same frame
fn resolve_obstacle_hits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for index in 0..state.obstacles.len() {
        if !state.obstacles[index].active {
            continue;
        }
        if state
            .player
            .rect()
            .intersects(&state.obstacles[index].rect())
        {
            handle_obstacle_hit(state, index, events);
        }
    }
}

fn handle_obstacle_hit(state: &mut GameState, index: usize, events: &mut Vec<GameEvent>) {
    let kind = state.obstacles[index].kind;
    state.obstacles[index].active = false;

    if kind.is_missile() {
        // Missiles deliver a full rejection e-mail, typed out character by
        // character; display time scales with the body length
        let body = messages::random_rejection_email(&mut state.rng);
        state.typing = Some(TypingReveal {
            full: body,
            shown: 0,
            timer: 0.0,
        });
        events.push(GameEvent::TypingMessage(String::new()));
        let display_secs = body.chars().count() as f32 * TYPING_CHAR_SECS + 2.0;
        state.schedule(Scheduled::ClearTyping, display_secs);
    } else {
        events.push(GameEvent::Message {
            text: messages::hit_message(kind),
            auto_hide_ms: MESSAGE_DISPLAY_MS,
        });
        state.schedule(Scheduled::ClearMessage, MESSAGE_DISPLAY_MS as f32 / 1000.0);
    }

    state.rejections += 1;
    events.push(GameEvent::RejectionLogged);
    events.push(GameEvent::Sound("rejection"));
    state.reset_player();
}

/// Real goal advances the level after a display delay; decoys punish
fn resolve_goals(state: &mut GameState, events: &mut Vec<GameEvent>) {
    // A pending transition suppresses goal checks until the rebuild fires,
    // so the success counter moves by exactly one per level
    if state.level_transition_pending || state.tower_conquered {
        return;
    }

    let player_rect = state.player.rect();
    let Some(index) = state
        .goals
        .iter()
        .position(|goal| player_rect.intersects(&goal.rect()))
    else {
        return;
    };

    if state.goals[index].is_real {
        state.applications += 1;
        events.push(GameEvent::ApplicationFiled);
        state.level += 1;
        events.push(GameEvent::LevelChanged(state.level));
        events.push(GameEvent::Sound("success"));

        if state.level > MAX_LEVEL {
            state.tower_conquered = true;
            events.push(GameEvent::Message {
                text: messages::TOWER_CONQUERED,
                auto_hide_ms: 4000,
            });
            events.push(GameEvent::TowerConquered {
                message: messages::TOWER_CONQUERED,
            });
        } else {
            events.push(GameEvent::Message {
                text: messages::GOAL_REACHED,
                auto_hide_ms: MESSAGE_DISPLAY_MS,
            });
            state.level_transition_pending = true;
            state.schedule(Scheduled::AdvanceLevel, MESSAGE_DISPLAY_MS as f32 / 1000.0);
        }
    } else {
        state.rejections += 1;
        events.push(GameEvent::RejectionLogged);
        events.push(GameEvent::Message {
            text: messages::DECOY_GOAL,
            auto_hide_ms: MESSAGE_DISPLAY_MS,
        });
        state.schedule(Scheduled::ClearMessage, MESSAGE_DISPLAY_MS as f32 / 1000.0);
        events.push(GameEvent::Sound("rejection"));
        state.reset_player();
    }
}

/// Falling out of the world (or rising past the ceiling when flipped)
fn resolve_bounds(state: &mut GameState) {
    if state.mechanics.gravity_flipped {
        if state.player.pos.y < 50.0 {
            state.reset_player();
        }
    } else if state.player.pos.y > state.viewport.height + 100.0 {
        state.reset_player();
    }
}
