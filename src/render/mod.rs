//! Display-list rendering
//!
//! The core decides *what* is drawn each frame and hands primitives to a
//! host-implemented `Surface`; rasterization style is the host's business.
//! Everything world-positioned is submitted in camera space (horizontal
//! scroll only).

pub mod style;

use glam::Vec2;

use crate::sim::{GameState, ObstacleKind, PlatformBehavior};

pub use style::{HazardStyle, Rgb, hazard_style};

/// Host-provided draw target. A missing or unusable surface is a fatal
/// precondition at construction time on the host side, never a per-frame
/// condition here.
pub trait Surface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgb);
    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgb);
}

/// Submit one frame of draw commands
pub fn draw(state: &GameState, surface: &mut dyn Surface) {
    let cam = Vec2::new(state.camera_x, 0.0);

    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(state.viewport.width, state.viewport.height),
        style::BACKGROUND,
    );

    for platform in &state.platforms {
        if !platform.visible {
            continue;
        }
        let color = match platform.behavior {
            PlatformBehavior::Phantom { .. } => style::PLATFORM_PHANTOM,
            _ => style::PLATFORM_BODY,
        };
        surface.fill_rect(platform.pos - cam, platform.size, color);
    }

    for obstacle in &state.obstacles {
        if !obstacle.active {
            continue;
        }
        let hazard = hazard_style(obstacle.kind);
        surface.fill_rect(obstacle.pos - cam, obstacle.size, hazard.body);
        // Bombs flash in their final second
        if obstacle.kind == ObstacleKind::Bomb
            && obstacle.fuse_ms.is_some_and(|fuse| fuse < 1000.0)
            && (obstacle.animation_frame * 10.0).sin() > 0.0
        {
            surface.fill_rect(
                obstacle.pos - cam - Vec2::splat(2.0),
                obstacle.size + Vec2::splat(4.0),
                style::GOAL_DECOY,
            );
        }
        surface.fill_text(
            hazard.label,
            obstacle.pos - cam + obstacle.size / 2.0,
            style::LABEL,
        );
    }

    for goal in &state.goals {
        // Door post, then the door itself
        surface.fill_rect(
            goal.pos - cam - Vec2::new(4.0, 0.0),
            Vec2::new(4.0, goal.size.y + 20.0),
            style::GOAL_POST,
        );
        let color = if goal.is_real {
            style::GOAL_REAL
        } else {
            style::GOAL_DECOY
        };
        surface.fill_rect(goal.pos - cam, goal.size, color);
        surface.fill_text("CORP", goal.pos - cam + goal.size / 2.0, style::LABEL);
    }

    surface.fill_rect(state.player.pos - cam, state.player.size, style::PLAYER_BODY);
}
