//! Coin Dash - a single-screen coin-chasing platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, gravity, collisions, game state)
//! - `app`: Fixed-timestep frame loop driving the simulation
//! - `ui`: Clickable buttons and HUD composition
//! - `render`: Per-phase scene composition as draw commands
//! - `platform`: Input/audio/presentation collaborator seams
//! - `settings`: Player preferences

pub mod app;
pub mod audio;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the original frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per second
    pub const TICK_RATE: u64 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_W: f32 = 800.0;
    pub const SCREEN_H: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    /// Horizontal speed in pixels per tick
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Upward velocity applied on jump and double jump (y grows downward)
    pub const JUMP_VELOCITY: f32 = -20.0;
    /// Gravity in pixels per tick squared
    pub const GRAVITY: f32 = 1.0;
    /// Y of the player's top edge while standing on the floor
    pub const GROUND_Y: f32 = SCREEN_H - PLAYER_SIZE - 50.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 30.0;
    /// Coin spawn bounds (inclusive)
    pub const COIN_MIN_X: f32 = 200.0;
    pub const COIN_MAX_X: f32 = SCREEN_W - COIN_SIZE;
    pub const COIN_MIN_Y: f32 = 100.0;
    pub const COIN_MAX_Y: f32 = SCREEN_H - COIN_SIZE - 100.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 70.0;
    pub const OBSTACLE_Y: f32 = SCREEN_H - OBSTACLE_SIZE - 50.0;
    /// Initial leftward speed in pixels per tick
    pub const OBSTACLE_START_SPEED: f32 = 5.0;
    /// Speed gained each time the obstacle wraps off the left edge
    pub const OBSTACLE_SPEED_INCREMENT: f32 = 0.5;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    /// How long the game-over summary stays on screen (3 seconds)
    pub const GAME_OVER_LINGER_TICKS: u64 = 3 * TICK_RATE;
}
