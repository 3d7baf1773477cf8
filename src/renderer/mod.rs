//! Rendering collaborator.
//!
//! Entities never talk to a graphics API directly. They describe primitives
//! to a [`Canvas`]; the platform layer decides how those reach the screen.
//! [`DrawList`] is the recording canvas used headless and in tests.

use glam::Vec2;

use crate::color::Color;
use crate::geometry::Rect;

/// Horizontal advance of one glyph relative to the font size, for the
/// built-in monospace metrics.
pub const GLYPH_ADVANCE: f32 = 0.6;

/// A single line of text to be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Anchor point; the glyphs are placed so that `origin` lands here.
    pub position: Vec2,
    /// Offset from the text's top-left corner to the anchor.
    pub origin: Vec2,
    /// Rotation in degrees around the anchor.
    pub rotation: f32,
    pub font_size: f32,
    pub spacing: f32,
    pub color: Color,
}

pub trait Canvas {
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, run: &TextRun);
}

/// Measure `text` at `font_size` with `spacing` pixels between glyphs.
///
/// Uses fixed monospace metrics: each glyph advances `font_size * GLYPH_ADVANCE`
/// and the line is `font_size` tall. Empty text measures zero in both axes.
pub fn measure_text(text: &str, font_size: f32, spacing: f32) -> Vec2 {
    let glyphs = text.chars().count();
    if glyphs == 0 {
        return Vec2::ZERO;
    }
    let width = glyphs as f32 * font_size * GLYPH_ADVANCE + (glyphs - 1) as f32 * spacing;
    Vec2::new(width, font_size)
}

// ── Recording canvas ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
    Text(TextRun),
}

/// Canvas that records every primitive in submission order.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text strings in draw order, handy for asserting stacking.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(run) => Some(run.text.as_str()),
                DrawCommand::Rect { .. } => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, run: &TextRun) {
        self.commands.push(DrawCommand::Text(run.clone()));
    }
}
