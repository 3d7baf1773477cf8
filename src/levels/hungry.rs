use glam::Vec2;

use crate::arena::EntityId;
use crate::behavior::{Grabbable, GrowOnHover};
use crate::color::Color;
use crate::director::{Services, Tick};
use crate::level::Level;
use crate::scene::{Scene, SceneAction};

use super::{choice_positions, Lose, Win, CHOICE_SIZE, HEADING_SIZE, PROMPT_SIZE};

/// Drag puzzle: seven ate nine, so the 7 has to be fed the 9.
///
/// Every number can be picked up. Dropping the held number onto any other
/// decides the level: 7 and 9 together wins, anything else loses.
pub struct HungryNumber {
    level: Level,
    seven: EntityId,
    nine: EntityId,
}

impl HungryNumber {
    pub fn new(services: &mut Services) -> Self {
        let window = services.window().clone();
        let mut level = Level::with_backdrop(window.clone());
        let (cw, ch) = (window.cw(), window.ch());

        level.add_simple_text("level 4", HEADING_SIZE, Color::ORANGE, Vec2::new(cw, ch - 250.0), 0);
        let prompt = level.add_simple_text(
            "Feed the hungry number the proper food",
            PROMPT_SIZE,
            Color::RAY_WHITE,
            Vec2::new(cw, ch - 150.0),
            0,
        );
        level.text_mut(prompt).add_rotation(0.0, 4.0, 1.5);

        // The heading slot stays free; the numbers take the remaining four.
        let layout = choice_positions(&window);
        let positions = &layout[1..];

        let mut values = vec![7, 9];
        values.extend(services.random.random_unique_sequence(positions.len() - 2, 1, 8, &[7]));
        let colors = services.random.random_color_sequence(positions.len());

        let ids: Vec<EntityId> = positions
            .iter()
            .zip(&values)
            .zip(&colors)
            .map(|((&position, value), &color)| level.add_text_button(&value.to_string(), CHOICE_SIZE, color, position))
            .collect();

        for &id in &ids {
            let button = level.button_mut(id);
            button.add_behavior(GrowOnHover::default());
            button.add_behavior(Grabbable::new());
        }

        Self { level, seven: ids[0], nine: ids[1] }
    }

    pub fn seven(&self) -> EntityId {
        self.seven
    }

    pub fn nine(&self) -> EntityId {
        self.nine
    }
}

impl Scene for HungryNumber {
    fn name(&self) -> &str { "level 4" }
    fn level(&self) -> &Level { &self.level }
    fn level_mut(&mut self) -> &mut Level { &mut self.level }

    fn update(&mut self, tick: &mut Tick<'_>) -> SceneAction {
        let Some(held) = tick.services.held_button() else {
            return SceneAction::None;
        };
        let Some(held_rect) = self.level.get(held).and_then(|e| e.as_button()).map(|b| b.rect()) else {
            return SceneAction::None;
        };

        let touched = self
            .level
            .buttons()
            .iter()
            .copied()
            .find(|&other| other != held && self.level.button(other).rect().overlaps(&held_rect));

        match touched {
            Some(other) => {
                let fed = (held == self.seven && other == self.nine) || (held == self.nine && other == self.seven);
                if fed {
                    SceneAction::Switch(Box::new(Win::new(tick.services)))
                } else {
                    SceneAction::Switch(Box::new(Lose::new(tick.services)))
                }
            }
            None => SceneAction::None,
        }
    }
}
