//! Clickable buttons and HUD composition
//!
//! The two buttons share one value type; hover and click are plain
//! rectangle tests against the cursor, recomputed every tick.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, Rect};

/// Solid RGB color
pub type Rgb = [u8; 3];

/// Which button this is; the app decides what a click means per phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Start,
    Pause,
}

/// A clickable screen button with a hover highlight
#[derive(Debug, Clone)]
pub struct Button {
    pub id: ButtonId,
    pub rect: Rect,
    pub label: &'static str,
    pub color: Rgb,
    pub hover_color: Rgb,
    pub hovered: bool,
}

impl Button {
    /// The start button, centered on screen
    pub fn start() -> Self {
        Self {
            id: ButtonId::Start,
            rect: Rect::new(SCREEN_W / 2.0 - 100.0, SCREEN_H / 2.0 - 50.0, 200.0, 100.0),
            label: "Start",
            color: [0, 128, 255],
            hover_color: [0, 102, 204],
            hovered: false,
        }
    }

    /// The pause button, top-right corner
    pub fn pause() -> Self {
        Self {
            id: ButtonId::Pause,
            rect: Rect::new(SCREEN_W - 120.0, 20.0, 100.0, 50.0),
            label: "Pause",
            color: [255, 128, 0],
            hover_color: [204, 102, 0],
            hovered: false,
        }
    }

    /// Recompute the hover flag from the current cursor position
    pub fn check_hover(&mut self, cursor: Vec2) {
        self.hovered = self.rect.contains_point(cursor);
    }

    /// Whether a click at this position lands on the button
    pub fn is_clicked(&self, pos: Vec2) -> bool {
        self.rect.contains_point(pos)
    }

    /// Fill color for the current hover state
    pub fn fill(&self) -> Rgb {
        if self.hovered { self.hover_color } else { self.color }
    }
}

/// One line of HUD text at a screen position
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub pos: Vec2,
}

/// Compose the HUD: score, lives, elapsed time, top-left column
pub fn hud_lines(state: &GameState) -> Vec<HudLine> {
    vec![
        HudLine {
            text: format!("Score: {}", state.score),
            pos: Vec2::new(10.0, 10.0),
        },
        HudLine {
            text: format!("Lives: {}", state.lives),
            pos: Vec2::new(10.0, 50.0),
        },
        HudLine {
            text: format!("Time: {}s", state.elapsed_secs()),
            pos: Vec2::new(10.0, 90.0),
        },
    ]
}

/// The game-over summary line
pub fn game_over_line(state: &GameState) -> HudLine {
    HudLine {
        text: format!("Game Over! Score: {}", state.score),
        pos: Vec2::new(SCREEN_W / 2.0 - 100.0, SCREEN_H / 2.0 - 50.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_RATE;

    #[test]
    fn test_hover_tracks_cursor() {
        let mut button = Button::start();
        button.check_hover(Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0));
        assert!(button.hovered);
        assert_eq!(button.fill(), button.hover_color);

        button.check_hover(Vec2::new(0.0, 0.0));
        assert!(!button.hovered);
        assert_eq!(button.fill(), button.color);
    }

    #[test]
    fn test_click_inside_and_outside() {
        let button = Button::pause();
        assert!(button.is_clicked(Vec2::new(SCREEN_W - 70.0, 45.0)));
        assert!(!button.is_clicked(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_hud_lines_content() {
        let mut state = GameState::new(1);
        state.score = 12;
        state.lives = 2;
        state.time_ticks = 5 * TICK_RATE;

        let lines = hud_lines(&state);
        assert_eq!(lines[0].text, "Score: 12");
        assert_eq!(lines[1].text, "Lives: 2");
        assert_eq!(lines[2].text, "Time: 5s");
    }
}
