//! Fixed timestep simulation tick
//!
//! Advances one frame of gameplay deterministically: input, movement,
//! gravity, collisions, and phase transitions, in the original frame order.

use super::state::{GameEvent, GamePhase, GameState, JumpState, Player};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// Button clicks are resolved against screen geometry by the app layer
/// before they reach the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left movement key held
    pub left: bool,
    /// Right movement key held
    pub right: bool,
    /// Jump key held (a snapshot, not a press edge; see jump handling)
    pub jump: bool,
    /// Start button clicked this tick
    pub start: bool,
    /// Pause button clicked this tick
    pub pause_toggle: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Start is only honored from the title screen
    if input.start && state.phase == GamePhase::NotStarted {
        state.phase = GamePhase::Running;
        log::info!("session started (seed {})", state.seed);
    }

    // Pause toggles once the session is underway
    if input.pause_toggle {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            _ => {}
        }
    }

    // Don't simulate unless actively running
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Horizontal movement, clamped to the screen
    if input.left {
        state.player.pos.x -= PLAYER_SPEED;
    }
    if input.right {
        state.player.pos.x += PLAYER_SPEED;
    }
    state.player.pos.x = state.player.pos.x.clamp(0.0, SCREEN_W - PLAYER_SIZE);

    // Jumping. The key is a held-state snapshot, gated only by JumpState:
    // a key held across two ticks fires the jump on the first and the
    // double jump on the second, no release required. This matches the
    // original's level-triggered check.
    if input.jump {
        match state.player.jump {
            JumpState::Grounded => {
                state.player.vel_y = JUMP_VELOCITY;
                state.player.jump = JumpState::Jumped;
                state.events.push(GameEvent::Jumped);
            }
            JumpState::Jumped => {
                state.player.vel_y = JUMP_VELOCITY;
                state.player.jump = JumpState::DoubleJumped;
                state.events.push(GameEvent::Jumped);
            }
            JumpState::DoubleJumped => {}
        }
    }

    // Gravity integration
    state.player.vel_y += GRAVITY;
    state.player.pos.y += state.player.vel_y;

    // Ground clamp
    if state.player.pos.y >= GROUND_Y {
        state.player.pos.y = GROUND_Y;
        state.player.vel_y = 0.0;
        state.player.jump = JumpState::Grounded;
    }

    // Coin pickup. The collected flag is set and cleared within the same
    // branch, exactly as the original does; it is never observable true.
    if state.player.rect().overlaps(&state.coin.rect()) {
        state.coin.collected = true;
        state.score += 1;
        state.respawn_coin();
        state.coin.collected = false;
        state.events.push(GameEvent::CoinCollected);
        log::debug!("coin collected, score {}", state.score);
    }

    // Obstacle advance; wrap to the right edge and speed up
    state.obstacle.x -= state.obstacle.speed;
    if state.obstacle.x < 0.0 {
        state.obstacle.x = SCREEN_W;
        state.obstacle.speed += OBSTACLE_SPEED_INCREMENT;
        log::debug!("obstacle wrapped, speed {}", state.obstacle.speed);
    }

    // Obstacle collision
    if state.player.rect().overlaps(&state.obstacle.rect()) {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::ObstacleHit);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::SessionEnded);
            log::info!(
                "game over: score {}, {} s survived",
                state.score,
                state.elapsed_secs()
            );
        } else {
            // Survived the hit: back to spawn, obstacle re-enters from the
            // right at its current (not reset) speed
            state.player = Player::spawn();
            state.obstacle.x = SCREEN_W;
            log::debug!("hit obstacle, {} lives left", state.lives);
        }
    }
}
