//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Coin, GameEvent, GamePhase, GameState, JumpState, Obstacle, Player};
pub use tick::{TickInput, tick};
