//! Per-phase scene composition
//!
//! Builds the frame as a flat list of draw commands. A presentation backend
//! only has to know how to blit a sprite, fill a rectangle, and draw text;
//! the composition rules per game phase all live here.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, Rect};
use crate::ui::{self, Button, Rgb};

/// Sprite handles resolved by the asset loader at the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Background,
    Player,
    Coin,
    Obstacle,
}

/// One draw primitive, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite { id: SpriteId, pos: Vec2 },
    FillRect { rect: Rect, color: Rgb },
    /// Text anchored at its top-left corner
    Text { text: String, pos: Vec2 },
    /// Text centered on a point (button labels, summaries)
    CenteredText { text: String, center: Vec2 },
}

/// A composed frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

fn draw_button(scene: &mut Scene, button: &Button) {
    scene.push(DrawCommand::FillRect {
        rect: button.rect,
        color: button.fill(),
    });
    scene.push(DrawCommand::CenteredText {
        text: button.label.to_string(),
        center: button.rect.center(),
    });
}

/// Title screen: background and the start button only
pub fn title_scene(start_button: &Button) -> Scene {
    let mut scene = Scene::default();
    scene.push(DrawCommand::Sprite {
        id: SpriteId::Background,
        pos: Vec2::ZERO,
    });
    draw_button(&mut scene, start_button);
    scene
}

/// The running-game scene: entities, HUD, pause button
pub fn play_scene(state: &GameState, pause_button: &Button) -> Scene {
    let mut scene = Scene::default();
    scene.push(DrawCommand::Sprite {
        id: SpriteId::Background,
        pos: Vec2::ZERO,
    });
    draw_button(&mut scene, pause_button);
    scene.push(DrawCommand::Sprite {
        id: SpriteId::Player,
        pos: state.player.pos,
    });
    // The collected flag is cleared in the same tick it is set, so this
    // check never actually hides the coin (kept from the original).
    if !state.coin.collected {
        scene.push(DrawCommand::Sprite {
            id: SpriteId::Coin,
            pos: state.coin.pos,
        });
    }
    scene.push(DrawCommand::Sprite {
        id: SpriteId::Obstacle,
        pos: Vec2::new(state.obstacle.x, OBSTACLE_Y),
    });
    for line in ui::hud_lines(state) {
        scene.push(DrawCommand::Text {
            text: line.text,
            pos: line.pos,
        });
    }
    scene
}

/// Game-over summary: black screen with the final score
pub fn game_over_scene(state: &GameState) -> Scene {
    let mut scene = Scene::default();
    scene.push(DrawCommand::FillRect {
        rect: Rect::new(0.0, 0.0, SCREEN_W, SCREEN_H),
        color: [0, 0, 0],
    });
    let line = ui::game_over_line(state);
    scene.push(DrawCommand::Text {
        text: line.text,
        pos: line.pos,
    });
    scene
}
