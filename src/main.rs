//! Coin Dash entry point
//!
//! Runs a scripted headless session through the full frame loop and logs
//! the outcome. Hooking up a real window/audio backend means implementing
//! the `platform` traits and driving `App::frame` from its event loop.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use coin_dash::app::App;
use coin_dash::consts::*;
use coin_dash::platform::{CollectingPresenter, FrameInput, InputEvent, NullAudio, ScriptedInput};
use coin_dash::settings::Settings;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Coin Dash starting (seed {seed})");

    let settings = Settings::default();
    let mut app = App::new(seed, &settings);
    let mut input = ScriptedInput::new(demo_script());
    let mut presenter = CollectingPresenter::default();
    let mut audio = NullAudio::default();

    app.run(&mut input, &mut presenter, &mut audio, 100_000);

    let state = app.state();
    log::info!(
        "session over: score {}, lives {}, {} s survived, {} frames presented, {} cues played",
        state.score,
        state.lives,
        state.elapsed_secs(),
        presenter.frames,
        audio.played.len(),
    );
}

/// A short demo run: start the game, hop toward the coin for a while,
/// pause and resume once, then let the obstacle finish the session.
fn demo_script() -> Vec<FrameInput> {
    let mut frames = Vec::new();

    // Click start
    frames.push(FrameInput {
        events: vec![InputEvent::Click(Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0))],
        ..Default::default()
    });

    // Run right and jump in bursts
    for i in 0..600 {
        frames.push(FrameInput {
            right: i % 90 < 60,
            left: i % 90 >= 70,
            jump: i % 45 < 2,
            cursor: Vec2::new(400.0, 300.0),
            ..Default::default()
        });
    }

    // Pause, idle a second, resume
    let pause = FrameInput {
        events: vec![InputEvent::Click(Vec2::new(SCREEN_W - 70.0, 45.0))],
        cursor: Vec2::new(SCREEN_W - 70.0, 45.0),
        ..Default::default()
    };
    frames.push(pause.clone());
    for _ in 0..60 {
        frames.push(FrameInput::default());
    }
    frames.push(pause);

    // Then stand still; the obstacle drains the remaining lives
    frames
}
