use glam::Vec2;

use crate::color::Color;
use crate::director::{Services, Tick};
use crate::level::Level;
use crate::scene::{Scene, SceneAction};
use crate::timer::Timer;

use super::{NumberQuiz, Question};

/// How long the section card stays up.
pub const INTRO_SECS: f32 = 3.0;

/// Section title card. Moves on to the first quiz by itself.
pub struct SectionIntro {
    level: Level,
    timer: Timer,
}

impl SectionIntro {
    pub fn new(services: &mut Services) -> Self {
        let window = services.window().clone();
        let mut level = Level::with_backdrop(window.clone());
        level.add_simple_text(
            "Levels 1-10: Numbers",
            60.0,
            Color::GREEN,
            Vec2::new(window.cw(), window.ch() - 100.0),
            0,
        );
        Self { level, timer: Timer::new(INTRO_SECS) }
    }
}

impl Scene for SectionIntro {
    fn name(&self) -> &str { "section intro" }
    fn level(&self) -> &Level { &self.level }
    fn level_mut(&mut self) -> &mut Level { &mut self.level }

    fn on_enter(&mut self, services: &mut Services) {
        services.audio.request_track("no_stopping_now", true);
        // Undo the lose screen's pitch drop.
        services.audio.request_pitch(1.0);
    }

    fn update(&mut self, tick: &mut Tick<'_>) -> SceneAction {
        self.timer.tick(tick.dt);
        if self.timer.is_finished() {
            return SceneAction::Switch(Box::new(NumberQuiz::new(tick.services, Question::Largest)));
        }
        SceneAction::None
    }
}
