use glam::Vec2;

use crate::arena::EntityId;
use crate::color::Color;
use crate::director::{Services, Tick};
use crate::entity::Text;
use crate::input::KeyCode;
use crate::level::Level;
use crate::scene::{Scene, SceneAction};

use super::SectionIntro;

pub struct Title {
    level: Level,
    play: EntityId,
}

impl Title {
    pub fn new(services: &mut Services) -> Self {
        let window = services.window().clone();
        let mut level = Level::with_backdrop(window.clone());

        let title = level.add_simple_text(
            services.title(),
            100.0,
            Color::GOLD,
            Vec2::new(window.cw(), window.ch() - 100.0),
            0,
        );
        level.text_mut(title).add_rotation(0.0, 5.0, 2.5);

        let play = level.add_ui_button("Play");

        let build = if cfg!(debug_assertions) { "debug" } else { "release" };
        let version = format!("v{} {build}", services.version());
        let version_pos = Vec2::new(window.width as f32 - 84.0, 20.0);
        level.add_entity(
            Text::new(version, 20.0, Color::RAY_WHITE, version_pos, 1000).with_outline(Color::TRANSPARENT, 0.0),
        );

        Self { level, play }
    }

    pub fn play_button(&self) -> EntityId {
        self.play
    }
}

impl Scene for Title {
    fn name(&self) -> &str { "title" }
    fn level(&self) -> &Level { &self.level }
    fn level_mut(&mut self) -> &mut Level { &mut self.level }

    fn on_enter(&mut self, services: &mut Services) {
        services.audio.request_track("title_theme", true);
    }

    fn update(&mut self, tick: &mut Tick<'_>) -> SceneAction {
        let pressed = self.level.button(self.play).is_pressed(tick.input);
        if pressed || tick.input.is_key_pressed(KeyCode::Enter) {
            return SceneAction::Switch(Box::new(SectionIntro::new(tick.services)));
        }
        SceneAction::None
    }
}
