use glam::Vec2;

use crate::color::Color;
use crate::renderer::{Canvas, TextRun, measure_text};

use super::Body;

/// Outlined, optionally wobbling, line of text centred on its position.
#[derive(Clone, Debug)]
pub struct Text {
    pub body: Body,
    content: String,
    /// Multiplier on `base_font_size`; driven by an owning button.
    scale: f32,
    base_font_size: f32,
    color: Color,
    outline_color: Color,
    outline_size: f32,

    // Derived in `remeasure`.
    font_size: f32,
    spacing: f32,
    dimensions: Vec2,
    origin: Vec2,

    // rotation = sin(time * rotation_speed) * rotation_depth
    rotation: f32,
    rotation_speed: f32,
    rotation_depth: f32,
}

impl Text {
    pub fn new(content: impl Into<String>, font_size: f32, color: Color, position: Vec2, layer: i32) -> Self {
        let mut text = Self {
            body: Body::new(position, layer),
            content: content.into(),
            scale: 1.0,
            base_font_size: font_size,
            color,
            outline_color: Color::BLACK,
            outline_size: 2.0,
            font_size,
            spacing: 0.0,
            dimensions: Vec2::ZERO,
            origin: Vec2::ZERO,
            rotation: 0.0,
            rotation_speed: 0.0,
            rotation_depth: 0.0,
        };
        text.remeasure();
        text
    }

    pub fn with_outline(mut self, color: Color, size: f32) -> Self {
        self.outline_color = color;
        self.outline_size = size;
        self
    }

    /// Rock the text back and forth: `sin(time * speed) * depth` degrees.
    pub fn add_rotation(&mut self, rotation: f32, speed: f32, depth: f32) {
        self.rotation = rotation;
        self.rotation_speed = speed;
        self.rotation_depth = depth;
    }

    pub fn content(&self) -> &str { &self.content }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.remeasure();
    }

    pub fn color(&self) -> Color { self.color }
    pub fn set_color(&mut self, color: Color) { self.color = color; }
    pub fn outline_color(&self) -> Color { self.outline_color }
    pub fn outline_size(&self) -> f32 { self.outline_size }

    pub fn scale(&self) -> f32 { self.scale }
    pub fn set_scale(&mut self, scale: f32) { self.scale = scale; }

    pub fn base_font_size(&self) -> f32 { self.base_font_size }
    /// Font size after scaling, as of the last update.
    pub fn font_size(&self) -> f32 { self.font_size }
    pub fn dimensions(&self) -> Vec2 { self.dimensions }
    pub fn rotation(&self) -> f32 { self.rotation }

    fn remeasure(&mut self) {
        self.font_size = self.base_font_size * self.scale;
        self.spacing = self.font_size / 10.0;
        self.dimensions = measure_text(&self.content, self.font_size, self.spacing);
        self.origin = self.dimensions / 2.0;
    }

    pub fn update(&mut self, dt: f32, time: f64) {
        self.body.integrate(dt);
        self.remeasure();
        self.rotation = (time * self.rotation_speed as f64).sin() as f32 * self.rotation_depth;
    }

    fn run(&self, offset: Vec2, color: Color) -> TextRun {
        TextRun {
            text: self.content.clone(),
            position: self.body.position + offset,
            origin: self.origin,
            rotation: self.rotation,
            font_size: self.font_size,
            spacing: self.spacing,
            color,
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        // Outline: the same run stamped in 8 directions under the main text.
        if self.outline_color.is_visible() && self.outline_size > 0.0 {
            for i in 0..8 {
                let angle = i as f32 * std::f32::consts::TAU / 8.0;
                let offset = Vec2::new(angle.cos(), angle.sin()) * self.outline_size;
                canvas.draw_text(&self.run(offset, self.outline_color));
            }
        }
        canvas.draw_text(&self.run(Vec2::ZERO, self.color));
    }
}
