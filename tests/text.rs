use glam::Vec2;

use thinks::color::Color;
use thinks::entity::{Backdrop, Panel, Text, BACKDROP_SCROLL_SPEED};
use thinks::renderer::{measure_text, DrawCommand, DrawList, GLYPH_ADVANCE};

#[cfg(test)]
mod tests {
    use super::*;

    // -- measuring ------------------------------------------------------------

    #[test]
    fn measure_counts_glyphs_and_gaps() {
        let size = measure_text("abc", 20.0, 2.0);
        assert_eq!(size, Vec2::new(3.0 * 20.0 * GLYPH_ADVANCE + 2.0 * 2.0, 20.0));
    }

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(measure_text("", 80.0, 8.0), Vec2::ZERO);
    }

    #[test]
    fn text_spacing_is_a_tenth_of_the_size() {
        let text = Text::new("12", 80.0, Color::GOLD, Vec2::ZERO, 0);
        assert_eq!(text.dimensions(), measure_text("12", 80.0, 8.0));
    }

    #[test]
    fn set_content_remeasures() {
        let mut text = Text::new("1", 40.0, Color::GOLD, Vec2::ZERO, 0);
        let narrow = text.dimensions().x;
        text.set_content("100");
        assert!(text.dimensions().x > narrow);
    }

    #[test]
    fn scale_changes_font_size_on_update() {
        let mut text = Text::new("hi", 40.0, Color::GOLD, Vec2::ZERO, 0);
        text.set_scale(2.0);
        text.update(0.0, 0.0);
        assert_eq!(text.font_size(), 80.0);
        assert_eq!(text.base_font_size(), 40.0);
    }

    // -- rotation -------------------------------------------------------------

    #[test]
    fn rotation_follows_the_sine() {
        let mut text = Text::new("wobble", 40.0, Color::GOLD, Vec2::ZERO, 0);
        text.add_rotation(0.0, 5.0, 2.5);

        let time = 0.3_f64;
        text.update(0.0, time);
        let expected = (time * 5.0).sin() as f32 * 2.5;
        assert!((text.rotation() - expected).abs() < 1e-5);
    }

    #[test]
    fn no_rotation_by_default() {
        let mut text = Text::new("still", 40.0, Color::GOLD, Vec2::ZERO, 0);
        text.update(0.016, 12.0);
        assert_eq!(text.rotation(), 0.0);
    }

    // -- drawing --------------------------------------------------------------

    #[test]
    fn outline_is_stamped_in_eight_directions() {
        let text = Text::new("hi", 20.0, Color::WHITE, Vec2::new(50.0, 50.0), 0);
        let mut canvas = DrawList::new();
        text.draw(&mut canvas);

        let runs: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(run) => Some(run),
                DrawCommand::Rect { .. } => None,
            })
            .collect();
        assert_eq!(runs.len(), 9);
        assert!(runs[..8].iter().all(|r| r.color == Color::BLACK));
        assert!(runs[..8].iter().all(|r| (r.position - Vec2::new(50.0, 50.0)).length() > 1.9));
        assert_eq!(runs[8].color, Color::WHITE);
        assert_eq!(runs[8].position, Vec2::new(50.0, 50.0));
        assert_eq!(runs[8].origin, text.dimensions() / 2.0);
    }

    #[test]
    fn invisible_outline_draws_once() {
        let text = Text::new("hi", 20.0, Color::WHITE, Vec2::ZERO, 0).with_outline(Color::TRANSPARENT, 2.0);
        let mut canvas = DrawList::new();
        text.draw(&mut canvas);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn panel_draws_fill_then_border() {
        let panel = Panel::new(Color::BLACK, Color::SKY_BLUE, Vec2::new(100.0, 50.0), 3.0, Vec2::new(50.0, 25.0), 0);
        let mut canvas = DrawList::new();
        panel.draw(&mut canvas);

        assert_eq!(canvas.len(), 5);
        assert!(matches!(canvas.commands()[0], DrawCommand::Rect { color: Color::SKY_BLUE, .. }));
        assert_eq!(panel.rect().x, 0.0);
        assert_eq!(panel.rect().w, 100.0);
    }

    #[test]
    fn borderless_panel_draws_fill_only() {
        let panel = Panel::new(Color::BLACK, Color::SKY_BLUE, Vec2::new(10.0, 10.0), 0.0, Vec2::ZERO, 0);
        let mut canvas = DrawList::new();
        panel.draw(&mut canvas);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn backdrop_starts_unscrolled() {
        let backdrop = Backdrop::new(Color::GRAY, Color::RAY_WHITE, 50.0, Vec2::new(900.0, 600.0));
        assert_eq!(backdrop.offset(), 0.0);
        assert!(BACKDROP_SCROLL_SPEED > 0.0);

        let mut canvas = DrawList::new();
        backdrop.draw(&mut canvas);
        assert!(canvas.len() >= (900 / 50) * (600 / 50));
    }
}
