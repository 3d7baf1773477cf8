//! Everything a level updates and draws.
//!
//! The set of entity kinds is closed, so [`Entity`] is a sum type and the
//! per-kind update/draw dispatch is a `match`.

mod backdrop;
mod button;
mod panel;
mod text;

pub use backdrop::{Backdrop, BACKDROP_LAYER, BACKDROP_SCROLL_SPEED};
pub use button::{Button, BRIGHTEN_FACTOR};
pub use panel::Panel;
pub use text::Text;

use glam::Vec2;

use crate::arena::EntityId;
use crate::director::Tick;
use crate::renderer::Canvas;

/// Position, velocity and draw layer shared by every entity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Vec2,
    /// Pixels per second.
    pub velocity: Vec2,
    /// Update and draw order key; lower layers go first.
    pub layer: i32,
}

impl Body {
    pub fn new(position: Vec2, layer: i32) -> Self {
        Self { position, velocity: Vec2::ZERO, layer }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0)
    }
}

pub enum Entity {
    Text(Text),
    Panel(Panel),
    Backdrop(Backdrop),
    Button(Button),
}

impl Entity {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Text(t) => &t.body,
            Entity::Panel(p) => &p.body,
            Entity::Backdrop(b) => &b.body,
            Entity::Button(b) => &b.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Entity::Text(t) => &mut t.body,
            Entity::Panel(p) => &mut p.body,
            Entity::Backdrop(b) => &mut b.body,
            Entity::Button(b) => &mut b.body,
        }
    }

    pub fn layer(&self) -> i32 {
        self.body().layer
    }

    pub fn position(&self) -> Vec2 {
        self.body().position
    }

    /// `id` is this entity's own handle in its level.
    pub fn update(&mut self, id: EntityId, tick: &mut Tick<'_>) {
        match self {
            Entity::Text(t) => t.update(tick.dt, tick.time()),
            Entity::Panel(p) => p.update(tick.dt),
            Entity::Backdrop(b) => b.update(tick),
            Entity::Button(b) => b.update(id, tick),
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self {
            Entity::Text(t) => t.draw(canvas),
            Entity::Panel(p) => p.draw(canvas),
            Entity::Backdrop(b) => b.draw(canvas),
            Entity::Button(b) => b.draw(canvas),
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Entity::Button(_))
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Entity::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Entity::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Entity::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Entity::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            Entity::Panel(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Text> for Entity {
    fn from(t: Text) -> Self { Entity::Text(t) }
}

impl From<Panel> for Entity {
    fn from(p: Panel) -> Self { Entity::Panel(p) }
}

impl From<Backdrop> for Entity {
    fn from(b: Backdrop) -> Self { Entity::Backdrop(b) }
}

impl From<Button> for Entity {
    fn from(b: Button) -> Self { Entity::Button(b) }
}
