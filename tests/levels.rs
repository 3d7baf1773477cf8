use std::collections::HashSet;

use glam::Vec2;

use thinks::arena::EntityId;
use thinks::audio::{NullBackend, RecordingBackend};
use thinks::config::GameConfig;
use thinks::director::{Director, Services, Tick};
use thinks::entity::Entity;
use thinks::input::{InputState, KeyCode, MouseButton};
use thinks::level::Level;
use thinks::levels::*;
use thinks::scene::{Scene, SceneAction};

const DT: f32 = 1.0 / 60.0;

fn config(seed: u64) -> GameConfig {
    GameConfig { seed: Some(seed), ..GameConfig::default() }
}

fn services(seed: u64) -> Services {
    Services::new(config(seed), Box::new(NullBackend::default()))
}

fn click_at(position: Vec2) -> InputState {
    let mut input = InputState::new();
    input.move_pointer(position);
    input.press_mouse(MouseButton::Left);
    input
}

fn switched_to(action: SceneAction) -> Option<String> {
    match action {
        SceneAction::Switch(scene) => Some(scene.name().to_string()),
        _ => None,
    }
}

fn button_labelled(level: &Level, label: &str) -> EntityId {
    level
        .buttons()
        .iter()
        .copied()
        .find(|&id| level.button(id).text() == label)
        .unwrap_or_else(|| panic!("no button labelled {label}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- number quizzes -------------------------------------------------------

    #[test]
    fn quiz_leads_with_the_level_number() {
        for (seed, question) in [(1, Question::Largest), (2, Question::Smallest), (3, Question::Tallest)] {
            let mut services = services(seed);
            let quiz = NumberQuiz::new(&mut services, question);
            let values: Vec<i32> = quiz.choices().iter().map(|&(_, v)| v).collect();

            assert_eq!(values.len(), CHOICE_COUNT);
            assert_eq!(values[0], question.number());
            assert_eq!(values.iter().collect::<HashSet<_>>().len(), CHOICE_COUNT);
            assert!(values.iter().all(|v| (MIN_CHOICE..=MAX_CHOICE).contains(v)));
        }
    }

    #[test]
    fn largest_and_smallest_pick_the_extremes() {
        for seed in 0..20 {
            let mut services = services(seed);

            let quiz = NumberQuiz::new(&mut services, Question::Largest);
            let max = quiz.choices().iter().map(|&(_, v)| v).max().unwrap();
            let correct = quiz.choices().iter().find(|&&(id, _)| id == quiz.correct_button()).unwrap().1;
            assert_eq!(correct, max);

            let quiz = NumberQuiz::new(&mut services, Question::Smallest);
            let min = quiz.choices().iter().map(|&(_, v)| v).min().unwrap();
            let correct = quiz.choices().iter().find(|&&(id, _)| id == quiz.correct_button()).unwrap().1;
            assert_eq!(correct, min);
        }
    }

    #[test]
    fn choices_sit_on_the_fixed_layout() {
        let mut services = services(4);
        let quiz = NumberQuiz::new(&mut services, Question::Largest);
        let layout = choice_positions(services.window());
        for (&(id, _), position) in quiz.choices().iter().zip(layout) {
            assert_eq!(quiz.level().button(id).position(), position);
        }
    }

    #[test]
    fn right_answer_advances_and_wrong_answer_loses() {
        let mut services = services(5);
        let mut quiz = NumberQuiz::new(&mut services, Question::Largest);

        let right = quiz.level().button(quiz.correct_button()).position();
        let input = click_at(right);
        let action = quiz.update(&mut Tick { input: &input, dt: DT, services: &mut services });
        assert_eq!(switched_to(action).as_deref(), Some("level 2"));

        let wrong = quiz.choices().iter().find(|&&(id, _)| id != quiz.correct_button()).unwrap().0;
        let input = click_at(quiz.level().button(wrong).position());
        let action = quiz.update(&mut Tick { input: &input, dt: DT, services: &mut services });
        assert_eq!(switched_to(action).as_deref(), Some("lose"));
    }

    #[test]
    fn tallest_number_grows_further() {
        let mut services = services(6);
        let mut quiz = NumberQuiz::new(&mut services, Question::Tallest);
        let tall = quiz.correct_button();

        let mut input = InputState::new();
        input.move_pointer(quiz.level().button(tall).position());
        for _ in 0..20 {
            quiz.level_mut().update(&mut Tick { input: &input, dt: DT, services: &mut services });
        }
        assert_eq!(quiz.level().button(tall).scale(), 2.5);
    }

    #[test]
    fn idle_quiz_stays_put() {
        let mut services = services(7);
        let mut quiz = NumberQuiz::new(&mut services, Question::Smallest);
        let input = InputState::new();
        let action = quiz.update(&mut Tick { input: &input, dt: DT, services: &mut services });
        assert!(switched_to(action).is_none());
    }

    // -- hungry number ----------------------------------------------------------

    #[test]
    fn every_hungry_number_is_grabbable() {
        let mut services = services(8);
        let level = HungryNumber::new(&mut services);
        assert_eq!(level.level().buttons().len(), 4);
        assert_eq!(level.level().button(level.seven()).text(), "7");
        assert_eq!(level.level().button(level.nine()).text(), "9");
        for &id in level.level().buttons() {
            assert_eq!(level.level().button(id).behaviors().len(), 2);
        }
    }

    fn drag(director: &mut Director, from: Vec2, to: Vec2) {
        let mut input = click_at(from);
        director.tick(&input, DT);
        input.end_frame();
        input.move_pointer(to);
        director.tick(&input, DT);
        input.end_frame();
        director.tick(&input, DT);
    }

    #[test]
    fn feeding_nine_to_seven_wins() {
        let mut d = Director::new(config(9), Box::new(NullBackend::default()));
        d.set_next_level_with(|s| Box::new(HungryNumber::new(s)));
        d.tick(&InputState::new(), DT);

        let level = d.current_level().unwrap();
        let seven = level.button(button_labelled(level, "7")).position();
        let nine = level.button(button_labelled(level, "9")).position();

        drag(&mut d, seven, nine);
        assert_eq!(d.current_level_name(), Some("win"));
    }

    #[test]
    fn feeding_anything_else_loses() {
        let mut d = Director::new(config(10), Box::new(NullBackend::default()));
        d.set_next_level_with(|s| Box::new(HungryNumber::new(s)));
        d.tick(&InputState::new(), DT);

        let level = d.current_level().unwrap();
        let other = level
            .buttons()
            .iter()
            .copied()
            .find(|&id| !matches!(level.button(id).text(), "7" | "9"))
            .unwrap();
        let other = level.button(other).position();
        let seven = level.button(button_labelled(level, "7")).position();

        drag(&mut d, seven, other);
        assert_eq!(d.current_level_name(), Some("lose"));
    }

    // -- full flow ----------------------------------------------------------------

    #[test]
    fn title_to_first_quiz() {
        let backend = RecordingBackend::new();
        let mut d = Director::new(config(11), Box::new(backend.clone()));
        d.set_next_level_with(|s| Box::new(Title::new(s)));
        d.tick(&InputState::new(), DT);
        assert_eq!(d.current_level_name(), Some("title"));
        assert_eq!(d.services().audio.next_track(), Some("title_theme"));

        // Let the title theme finish fading in; requests mid-fade are dropped.
        for _ in 0..90 {
            d.tick(&InputState::new(), DT);
        }
        assert_eq!(d.services().audio.current_track(), Some("title_theme"));

        let level = d.current_level().unwrap();
        let play = level.button(button_labelled(level, "Play")).position();
        d.tick(&click_at(play), DT);
        d.tick(&InputState::new(), DT);
        assert_eq!(d.current_level_name(), Some("section intro"));

        let ticks = (INTRO_SECS / DT).round() as usize;
        for _ in 0..ticks {
            d.tick(&InputState::new(), DT);
        }
        assert_eq!(d.current_level_name(), Some("level 1"));
        assert_eq!(d.services().audio.current_track(), Some("no_stopping_now"));
    }

    #[test]
    fn enter_skips_the_title() {
        let mut d = Director::new(config(12), Box::new(NullBackend::default()));
        d.set_next_level_with(|s| Box::new(Title::new(s)));
        d.tick(&InputState::new(), DT);

        let mut input = InputState::new();
        input.press_key(KeyCode::Enter);
        d.tick(&input, DT);
        d.tick(&InputState::new(), DT);
        assert_eq!(d.current_level_name(), Some("section intro"));
    }

    #[test]
    fn losing_drops_the_pitch_and_restart_restores_it() {
        let mut d = Director::new(config(13), Box::new(NullBackend::default()));
        d.set_next_level_with(|s| Box::new(SectionIntro::new(s)));
        for _ in 0..100 {
            d.tick(&InputState::new(), DT);
        }

        d.set_next_level_with(|s| Box::new(Lose::new(s)));
        for _ in 0..60 {
            d.tick(&InputState::new(), DT);
        }
        assert_eq!(d.services().audio.current_pitch(), LOSE_PITCH);

        let level = d.current_level().unwrap();
        let restart = level.button(button_labelled(level, "Restart")).position();
        d.tick(&click_at(restart), DT);
        d.tick(&InputState::new(), DT);
        assert_eq!(d.current_level_name(), Some("section intro"));
        assert_eq!(d.services().audio.target_pitch(), 1.0);
    }

    #[test]
    fn win_plays_once_and_returns_to_title() {
        let mut d = Director::new(config(14), Box::new(NullBackend::default()));
        d.set_next_level_with(|s| Box::new(Win::new(s)));
        d.tick(&InputState::new(), DT);
        assert_eq!(d.services().audio.next_track(), Some("win_theme"));

        let level = d.current_level().unwrap();
        let title = level.button(button_labelled(level, "Title")).position();
        d.tick(&click_at(title), DT);
        d.tick(&InputState::new(), DT);
        assert_eq!(d.current_level_name(), Some("title"));
    }

    #[test]
    fn outcome_banners_sit_in_a_frame() {
        let mut services = services(16);
        let win = Win::new(&mut services);
        let lose = Lose::new(&mut services);
        for level in [win.level(), lose.level()] {
            let frames: Vec<_> = level.iter().filter_map(|(_, e)| e.as_panel()).collect();
            assert_eq!(frames.len(), 1);

            let banner = level
                .iter()
                .filter_map(|(_, e)| e.as_text())
                .find(|t| t.font_size() == 100.0)
                .unwrap();
            assert_eq!(frames[0].size(), banner.dimensions() + Vec2::splat(BANNER_PADDING));
            assert!((frames[0].rect().center() - banner.body.position).length() < 1e-3);

            let frame_layer = level.iter().find(|(_, e)| matches!(e, Entity::Panel(_))).unwrap().1.layer();
            assert_eq!(frame_layer, BANNER_FRAME_LAYER);
        }
    }

    #[test]
    fn backdrop_scroll_wraps_at_one_period() {
        let mut d = Director::new(config(17), Box::new(NullBackend::default()));
        d.set_next_level_with(|s| Box::new(Win::new(s)));
        d.tick(&InputState::new(), DT);

        // One dark/light period of the 50 px checkerboard.
        d.services_mut().backdrop_scroll = 99.8;
        d.tick(&InputState::new(), DT);
        assert!((d.services().backdrop_scroll - 0.3).abs() < 1e-3);

        // A week of scrolling still moves.
        d.services_mut().backdrop_scroll = 30.0 * 604_800.0;
        d.tick(&InputState::new(), DT);
        let wrapped = d.services().backdrop_scroll;
        assert!((0.0..100.0).contains(&wrapped));
        d.tick(&InputState::new(), DT);
        assert!(d.services().backdrop_scroll > wrapped);
    }

    #[test]
    fn backdrop_scroll_carries_across_levels() {
        let mut d = Director::new(config(15), Box::new(NullBackend::default()));
        d.set_next_level_with(|s| Box::new(Win::new(s)));
        for _ in 0..60 {
            d.tick(&InputState::new(), DT);
        }
        let scrolled = d.services().backdrop_scroll;
        assert!((scrolled - 30.0).abs() < 1e-2);

        d.set_next_level_with(|s| Box::new(Title::new(s)));
        d.tick(&InputState::new(), DT);
        assert!(d.services().backdrop_scroll > scrolled);
    }
}
