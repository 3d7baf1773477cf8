//! The playable level sequence.
//!
//! Title -> section intro -> three number quizzes -> hungry-number drag
//! puzzle -> win. Any wrong answer goes to the lose screen, which restarts
//! the section.

mod hungry;
mod intro;
mod outcome;
mod quiz;
mod title;

pub use hungry::HungryNumber;
pub use intro::{SectionIntro, INTRO_SECS};
pub use outcome::{Lose, Win, BANNER_FRAME_LAYER, BANNER_PADDING, LOSE_PITCH};
pub use quiz::{NumberQuiz, Question, CHOICE_COUNT, MAX_CHOICE, MIN_CHOICE};
pub use title::Title;

use glam::Vec2;

use crate::config::WindowConfig;

/// Font size of heading text at the top of every numbered level.
pub const HEADING_SIZE: f32 = 80.0;
/// Font size of the question under the heading.
pub const PROMPT_SIZE: f32 = 40.0;
/// Font size of a numeric choice.
pub const CHOICE_SIZE: f32 = 80.0;

/// Fixed spots numeric choices are laid out on. The first sits right of the
/// "level" heading so it reads as the level number.
pub fn choice_positions(window: &WindowConfig) -> [Vec2; 5] {
    let (cw, ch) = (window.cw(), window.ch());
    [
        Vec2::new(cw + 122.0, ch - 250.0),
        Vec2::new(cw - 275.0, ch),
        Vec2::new(cw - 175.0, ch + 175.0),
        Vec2::new(cw + 175.0, ch + 175.0),
        Vec2::new(cw + 275.0, ch),
    ]
}
