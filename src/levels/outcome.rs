use glam::Vec2;

use crate::arena::EntityId;
use crate::color::Color;
use crate::director::{Services, Tick};
use crate::entity::Panel;
use crate::level::Level;
use crate::scene::{Scene, SceneAction};

use super::{SectionIntro, Title};

/// Music pitch while the lose screen is up.
pub const LOSE_PITCH: f32 = 0.8;

/// Padding between the banner text and its frame.
pub const BANNER_PADDING: f32 = 48.0;
/// Frame sits between the backdrop and the text.
pub const BANNER_FRAME_LAYER: i32 = -10;

fn banner(services: &Services, text: &str, color: Color) -> Level {
    let window = services.window().clone();
    let mut level = Level::with_backdrop(window.clone());
    let center = Vec2::new(window.cw(), window.ch() - 100.0);

    let id = level.add_simple_text(text, 100.0, color, center, 0);
    let text = level.text_mut(id);
    text.add_rotation(0.0, 5.0, 2.5);
    let frame = text.dimensions() + Vec2::splat(BANNER_PADDING);

    level.add_entity(Panel::new(Color::BLACK, Color::rgba(0, 0, 0, 120), frame, 9.0, center, BANNER_FRAME_LAYER));
    level
}

// ── Lose ─────────────────────────────────────────────────────────────────────

pub struct Lose {
    level: Level,
    restart: EntityId,
}

impl Lose {
    pub fn new(services: &mut Services) -> Self {
        let mut level = banner(services, "game over!", Color::RED);
        let restart = level.add_ui_button("Restart");
        Self { level, restart }
    }

    pub fn restart_button(&self) -> EntityId {
        self.restart
    }
}

impl Scene for Lose {
    fn name(&self) -> &str { "lose" }
    fn level(&self) -> &Level { &self.level }
    fn level_mut(&mut self) -> &mut Level { &mut self.level }

    fn on_enter(&mut self, services: &mut Services) {
        services.audio.request_pitch(LOSE_PITCH);
    }

    fn update(&mut self, tick: &mut Tick<'_>) -> SceneAction {
        if self.level.button(self.restart).is_pressed(tick.input) {
            return SceneAction::Switch(Box::new(SectionIntro::new(tick.services)));
        }
        SceneAction::None
    }
}

// ── Win ──────────────────────────────────────────────────────────────────────

pub struct Win {
    level: Level,
    title: EntityId,
}

impl Win {
    pub fn new(services: &mut Services) -> Self {
        let mut level = banner(services, "You win!", Color::GREEN);
        let title = level.add_ui_button("Title");
        Self { level, title }
    }

    pub fn title_button(&self) -> EntityId {
        self.title
    }
}

impl Scene for Win {
    fn name(&self) -> &str { "win" }
    fn level(&self) -> &Level { &self.level }
    fn level_mut(&mut self) -> &mut Level { &mut self.level }

    fn on_enter(&mut self, services: &mut Services) {
        services.audio.request_track("win_theme", false);
    }

    fn update(&mut self, tick: &mut Tick<'_>) -> SceneAction {
        if self.level.button(self.title).is_pressed(tick.input) {
            return SceneAction::Switch(Box::new(Title::new(tick.services)));
        }
        SceneAction::None
    }
}
