use glam::Vec2;

use crate::arena::EntityId;
use crate::behavior::Behavior;
use crate::color::Color;
use crate::director::Tick;
use crate::geometry::Rect;
use crate::input::{InputState, MouseButton};
use crate::renderer::Canvas;

use super::{Body, Text};

/// Channel multiplier applied to a hovered button's colors.
pub const BRIGHTEN_FACTOR: f32 = 2.0;

/// Clickable box with a text label and attached behaviors.
///
/// The hit rectangle is never stored: [`Button::rect`] derives it from the
/// current position, size and scale on every call.
pub struct Button {
    pub body: Body,
    label: Text,
    size: Vec2,
    scale: f32,

    default_bg: Color,
    bg: Color,
    default_text_color: Color,
    text_color: Color,

    /// Name of the sound effect played on press.
    sfx: Option<String>,
    behaviors: Vec<Behavior>,
}

impl Button {
    /// Take ownership of `label` and centre it on `position`.
    pub fn new(mut label: Text, bg: Color, size: Vec2, position: Vec2, layer: i32) -> Self {
        label.body.position = position;
        let text_color = label.color();
        Self {
            body: Body::new(position, layer),
            label,
            size,
            scale: 1.0,
            default_bg: bg,
            bg,
            default_text_color: text_color,
            text_color,
            sfx: None,
            behaviors: Vec::new(),
        }
    }

    pub fn with_behavior(mut self, behavior: impl Into<Behavior>) -> Self {
        self.add_behavior(behavior);
        self
    }

    pub fn with_sfx(mut self, name: impl Into<String>) -> Self {
        self.sfx = Some(name.into());
        self
    }

    /// Append a behavior; it runs after those already attached.
    pub fn add_behavior(&mut self, behavior: impl Into<Behavior>) {
        self.behaviors.push(behavior.into());
    }

    pub fn behaviors(&self) -> &[Behavior] { &self.behaviors }

    pub fn set_sfx(&mut self, name: Option<String>) { self.sfx = name; }
    pub fn sfx(&self) -> Option<&str> { self.sfx.as_deref() }

    pub fn label(&self) -> &Text { &self.label }
    pub fn label_mut(&mut self) -> &mut Text { &mut self.label }
    pub fn text(&self) -> &str { self.label.content() }

    pub fn size(&self) -> Vec2 { self.size }
    pub fn scale(&self) -> f32 { self.scale }
    pub fn set_scale(&mut self, scale: f32) { self.scale = scale; }
    pub fn position(&self) -> Vec2 { self.body.position }
    pub fn set_position(&mut self, position: Vec2) { self.body.position = position; }
    pub fn layer(&self) -> i32 { self.body.layer }
    pub fn set_layer(&mut self, layer: i32) { self.body.layer = layer; }

    pub fn bg_color(&self) -> Color { self.bg }
    pub fn text_color(&self) -> Color { self.text_color }
    pub fn default_bg_color(&self) -> Color { self.default_bg }
    pub fn default_text_color(&self) -> Color { self.default_text_color }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.body.position, self.size, self.scale)
    }

    pub fn is_hovered(&self, input: &InputState) -> bool {
        self.rect().contains(input.pointer())
    }

    /// Hovered and the primary button went down this tick.
    pub fn is_pressed(&self, input: &InputState) -> bool {
        self.is_hovered(input) && input.is_mouse_pressed(MouseButton::Left)
    }

    /// `id` is this button's handle in its level, passed on to behaviors
    /// that register the button with the director.
    pub fn update(&mut self, id: EntityId, tick: &mut Tick<'_>) {
        self.body.integrate(tick.dt);

        // Behaviors borrow the button mutably, so run them from a detached list.
        let mut behaviors = std::mem::take(&mut self.behaviors);
        for behavior in &mut behaviors {
            behavior.update(self, id, tick);
        }
        // Keep anything a behavior attached while running.
        behaviors.append(&mut self.behaviors);
        self.behaviors = behaviors;

        self.label.set_scale(self.scale);
        self.label.body.position = self.body.position;

        if self.is_hovered(tick.input) {
            if self.default_bg.is_visible() {
                self.bg = self.default_bg.brighten(BRIGHTEN_FACTOR);
            }
            self.text_color = self.default_text_color.brighten(BRIGHTEN_FACTOR);
        } else {
            self.bg = self.default_bg;
            self.text_color = self.default_text_color;
        }

        if self.is_pressed(tick.input) {
            if let Some(name) = &self.sfx {
                tick.services.audio.play_sound(name);
            }
        }

        self.label.set_color(self.text_color);
        self.label.update(0.0, tick.time());
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_rect(self.rect(), self.bg);
        self.label.draw(canvas);
    }
}
