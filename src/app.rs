//! The frame loop
//!
//! One `frame` call per display tick: drain input, resolve button clicks
//! and hovers, advance the fixed-step simulation, compose the scene for the
//! current phase, present it, and route sound cues.

use crate::audio::AudioManager;
use crate::consts::*;
use crate::platform::{AudioSink, InputEvent, InputProvider, Key, Presenter};
use crate::render::{self, Scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::ui::Button;

/// The whole game: session state, buttons, audio routing, loop bookkeeping
pub struct App {
    state: GameState,
    start_button: Button,
    pause_button: Button,
    audio: AudioManager,
    accumulator: f32,
    /// One-shot click flags, consumed by the next simulation tick
    pending: TickInput,
    /// Ticks the game-over summary stays up before shutdown
    linger_ticks: u64,
    should_exit: bool,
}

impl App {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            state: GameState::new(seed),
            start_button: Button::start(),
            pause_button: Button::pause(),
            audio: AudioManager::new(settings),
            accumulator: 0.0,
            pending: TickInput::default(),
            linger_ticks: GAME_OVER_LINGER_TICKS,
            should_exit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Run one display frame
    pub fn frame(
        &mut self,
        input: &mut impl InputProvider,
        presenter: &mut impl Presenter,
        audio_sink: &mut impl AudioSink,
        dt: f32,
    ) {
        if self.should_exit {
            return;
        }

        // Drain discrete events; a quit terminates the loop immediately
        for event in input.poll() {
            match event {
                InputEvent::Quit => {
                    log::info!("quit requested");
                    self.should_exit = true;
                    return;
                }
                InputEvent::Click(pos) => match self.state.phase {
                    GamePhase::NotStarted => {
                        if self.start_button.is_clicked(pos) {
                            self.pending.start = true;
                        }
                    }
                    _ => {
                        if self.pause_button.is_clicked(pos) {
                            self.pending.pause_toggle = true;
                        }
                    }
                },
            }
        }

        // Recompute hovers against the current cursor
        let cursor = input.cursor_pos();
        if self.state.phase == GamePhase::NotStarted {
            self.start_button.check_hover(cursor);
        }
        self.pause_button.check_hover(cursor);

        // Fixed-step simulation with an accumulator
        self.accumulator += dt.min(0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if self.state.phase == GamePhase::GameOver {
                // Terminal: hold the summary on screen, then shut down
                self.linger_ticks = self.linger_ticks.saturating_sub(1);
                if self.linger_ticks == 0 {
                    self.should_exit = true;
                }
            } else {
                let tick_input = TickInput {
                    left: input.is_key_held(Key::Left),
                    right: input.is_key_held(Key::Right),
                    jump: input.is_key_held(Key::Jump),
                    start: self.pending.start,
                    pause_toggle: self.pending.pause_toggle,
                };
                tick(&mut self.state, &tick_input);
                // Clear one-shot inputs after processing
                self.pending = TickInput::default();
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        // Route this frame's sound cues
        let events = self.state.drain_events();
        self.audio.route(&events, audio_sink);
        if events.contains(&GameEvent::SessionEnded) {
            self.linger_ticks = GAME_OVER_LINGER_TICKS;
        }

        presenter.present(&self.compose_scene());
    }

    /// Compose the scene for the current phase. Paused frames re-compose
    /// from the frozen state, which reproduces the last running frame while
    /// keeping the pause button's hover highlight live.
    fn compose_scene(&self) -> Scene {
        match self.state.phase {
            GamePhase::NotStarted => render::title_scene(&self.start_button),
            GamePhase::Running | GamePhase::Paused => {
                render::play_scene(&self.state, &self.pause_button)
            }
            GamePhase::GameOver => render::game_over_scene(&self.state),
        }
    }

    /// Drive frames at the fixed rate until the loop ends, capped so a
    /// scripted session without a quit can't spin forever
    pub fn run(
        &mut self,
        input: &mut impl InputProvider,
        presenter: &mut impl Presenter,
        audio_sink: &mut impl AudioSink,
        max_frames: u64,
    ) {
        for _ in 0..max_frames {
            if self.should_exit {
                break;
            }
            self.frame(input, presenter, audio_sink, SIM_DT);
        }
    }
}
