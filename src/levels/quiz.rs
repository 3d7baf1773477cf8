use glam::Vec2;

use crate::arena::EntityId;
use crate::behavior::GrowOnHover;
use crate::color::Color;
use crate::director::{Services, Tick};
use crate::level::Level;
use crate::scene::{Scene, SceneAction};

use super::{choice_positions, HungryNumber, Lose, CHOICE_SIZE, HEADING_SIZE, PROMPT_SIZE};

pub const CHOICE_COUNT: usize = 5;
pub const MIN_CHOICE: i32 = 1;
pub const MAX_CHOICE: i32 = 25;

/// Which of the five numbers is the right one to click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Question {
    Largest,
    Smallest,
    /// The one that grows much bigger than the others when hovered.
    Tallest,
}

impl Question {
    /// Level number, also shown as the first choice.
    pub fn number(self) -> i32 {
        match self {
            Question::Largest => 1,
            Question::Smallest => 2,
            Question::Tallest => 3,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Question::Largest => "What is the largest number?",
            Question::Smallest => "What is the smallest number?",
            Question::Tallest => "What is the tallest number?",
        }
    }

    fn next_scene(self, services: &mut Services) -> Box<dyn Scene> {
        match self {
            Question::Largest => Box::new(NumberQuiz::new(services, Question::Smallest)),
            Question::Smallest => Box::new(NumberQuiz::new(services, Question::Tallest)),
            Question::Tallest => Box::new(HungryNumber::new(services)),
        }
    }
}

/// Five numeric text buttons, one of which answers the question.
pub struct NumberQuiz {
    question: Question,
    level: Level,
    choices: Vec<(EntityId, i32)>,
    correct: EntityId,
}

impl NumberQuiz {
    /// # Panics
    /// If the choice layout, values and colors disagree in length.
    pub fn new(services: &mut Services, question: Question) -> Self {
        let window = services.window().clone();
        let mut level = Level::with_backdrop(window.clone());
        let (cw, ch) = (window.cw(), window.ch());

        level.add_simple_text("level  ", HEADING_SIZE, Color::ORANGE, Vec2::new(cw - 4.0, ch - 250.0), 0);
        let prompt = level.add_simple_text(question.prompt(), PROMPT_SIZE, Color::RAY_WHITE, Vec2::new(cw, ch - 150.0), 0);
        level.text_mut(prompt).add_rotation(0.0, 4.0, 1.5);

        let n = question.number();
        let positions = choice_positions(&window);

        let mut values = vec![n];
        values.extend(services.random.random_unique_sequence(CHOICE_COUNT - 1, MIN_CHOICE, MAX_CHOICE, &[n]));

        let mut colors = vec![Color::ORANGE];
        colors.extend(services.random.random_color_sequence(CHOICE_COUNT - 1));

        assert!(
            positions.len() == CHOICE_COUNT && values.len() == CHOICE_COUNT && colors.len() == CHOICE_COUNT,
            "choice positions ({}), values ({}) and colors ({}) must all number {CHOICE_COUNT}",
            positions.len(),
            values.len(),
            colors.len(),
        );

        let tallest = services.random.random_int(0, CHOICE_COUNT as i32 - 1) as usize;

        let mut choices = Vec::with_capacity(CHOICE_COUNT);
        for (i, ((&position, &value), &color)) in positions.iter().zip(&values).zip(&colors).enumerate() {
            let id = level.add_text_button(&value.to_string(), CHOICE_SIZE, color, position);
            let grow = if question == Question::Tallest && i == tallest {
                GrowOnHover::new(20, 2.5)
            } else {
                GrowOnHover::default()
            };
            level.button_mut(id).add_behavior(grow);
            choices.push((id, value));
        }

        let correct_index = match question {
            Question::Largest => (0..CHOICE_COUNT).max_by_key(|&i| values[i]).unwrap_or(0),
            Question::Smallest => (0..CHOICE_COUNT).min_by_key(|&i| values[i]).unwrap_or(0),
            Question::Tallest => tallest,
        };
        let correct = choices[correct_index].0;

        Self { question, level, choices, correct }
    }

    pub fn question(&self) -> Question {
        self.question
    }

    /// Every choice button with the number it shows, in layout order.
    pub fn choices(&self) -> &[(EntityId, i32)] {
        &self.choices
    }

    pub fn correct_button(&self) -> EntityId {
        self.correct
    }
}

impl Scene for NumberQuiz {
    fn name(&self) -> &str {
        match self.question {
            Question::Largest => "level 1",
            Question::Smallest => "level 2",
            Question::Tallest => "level 3",
        }
    }

    fn level(&self) -> &Level { &self.level }
    fn level_mut(&mut self) -> &mut Level { &mut self.level }

    fn update(&mut self, tick: &mut Tick<'_>) -> SceneAction {
        let pressed = self.level.pressed_buttons(tick.input);
        if pressed.contains(&self.correct) {
            SceneAction::Switch(self.question.next_scene(tick.services))
        } else if !pressed.is_empty() {
            SceneAction::Switch(Box::new(Lose::new(tick.services)))
        } else {
            SceneAction::None
        }
    }
}
