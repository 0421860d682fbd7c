//! Corp Ladder entry point
//!
//! Native builds run a short headless session with scripted input and log
//! the event stream; the real game shell lives in the wasm host.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use corp_ladder::consts::MAX_FRAME_DT;
    use corp_ladder::{FrameInput, GameEvent, GameState, Viewport, step};

    env_logger::init();

    let starting_level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .filter(|&level| corp_ladder::progress::valid_level(level))
        .unwrap_or(1);

    let mut state = GameState::new(Viewport::new(1280.0, 720.0), starting_level, 0xC0FFEE);
    log::info!("headless run from level {starting_level}");

    let dt = (1.0f32 / 60.0).min(MAX_FRAME_DT);
    for frame in 0..1800u32 {
        // Run right and hop every second or so
        let input = FrameInput {
            right: true,
            jump: frame % 64 == 0,
            ..Default::default()
        };

        for event in step(&mut state, &input, dt) {
            match event {
                GameEvent::Message { text, .. } => log::info!("message: {text}"),
                GameEvent::TypingMessage(_) | GameEvent::MessageCleared => {}
                GameEvent::TowerConquered { message } => {
                    log::info!("{message}");
                    break;
                }
                other => log::debug!("{other:?}"),
            }
        }
    }

    println!(
        "30 s at level {}: {} applications, {} rejections, {} obstacles live",
        state.level,
        state.applications,
        state.rejections,
        state.obstacles.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is driven through the library interface
}
