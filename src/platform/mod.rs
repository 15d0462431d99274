//! Platform abstraction layer
//!
//! The simulation and frame loop only ever talk to these seams:
//! - `InputProvider`: discrete events plus held-key snapshots per tick
//! - `AudioSink`: fire-and-forget sound playback
//! - `Presenter`: receives the composed scene and flips the frame
//!
//! A real window/audio backend implements these; the scripted doubles
//! below drive the demo binary and the tests.

use std::collections::VecDeque;

use glam::Vec2;

use crate::audio::SoundEffect;
use crate::render::Scene;

/// Keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
}

/// Discrete input events, already time-sliced to the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close / quit request
    Quit,
    /// Pointer click at a screen position
    Click(Vec2),
}

/// Input collaborator: ordered events plus held-key snapshots
pub trait InputProvider {
    /// Drain this tick's discrete events, in order
    fn poll(&mut self) -> Vec<InputEvent>;
    /// Snapshot of whether a key is currently held
    fn is_key_held(&self, key: Key) -> bool;
    /// Current cursor position (for button hover)
    fn cursor_pos(&self) -> Vec2;
}

/// Audio collaborator: fire-and-forget, no return value consumed
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Presentation collaborator: takes the composed frame and displays it
pub trait Presenter {
    fn present(&mut self, scene: &Scene);
}

/// Input for one scripted frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub cursor: Vec2,
}

/// Replays a pre-recorded input script, one frame at a time.
/// Reports quiet frames once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
    current: FrameInput,
}

impl ScriptedInput {
    pub fn new(frames: Vec<FrameInput>) -> Self {
        Self {
            frames: frames.into(),
            current: FrameInput::default(),
        }
    }

    pub fn push(&mut self, frame: FrameInput) {
        self.frames.push_back(frame);
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputProvider for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.current = self.frames.pop_front().unwrap_or_default();
        self.current.events.clone()
    }

    fn is_key_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.current.left,
            Key::Right => self.current.right,
            Key::Jump => self.current.jump,
        }
    }

    fn cursor_pos(&self) -> Vec2 {
        self.current.cursor
    }
}

/// Swallows audio; remembers what it played
#[derive(Debug, Clone, Default)]
pub struct NullAudio {
    pub played: Vec<SoundEffect>,
}

impl AudioSink for NullAudio {
    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        self.played.push(effect);
    }
}

/// Keeps the most recent scene and a frame count
#[derive(Debug, Clone, Default)]
pub struct CollectingPresenter {
    pub frames: u64,
    pub last_scene: Option<Scene>,
}

impl Presenter for CollectingPresenter {
    fn present(&mut self, scene: &Scene) {
        self.frames += 1;
        self.last_scene = Some(scene.clone());
    }
}
