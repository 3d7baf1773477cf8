//! Behaviors attached to buttons and run once per tick from the button's
//! own update, in attachment order.

use glam::Vec2;

use crate::arena::EntityId;
use crate::director::Tick;
use crate::entity::Button;
use crate::float_equals;
use crate::input::MouseButton;

/// Layer a grabbed button is raised to while dragged.
pub const DRAG_LAYER: i32 = 100;
/// Layer a dragged button drops back to on release.
pub const REST_LAYER: i32 = 0;

#[derive(Clone, Debug, PartialEq)]
pub enum Behavior {
    GrowOnHover(GrowOnHover),
    Grabbable(Grabbable),
}

impl Behavior {
    pub fn update(&mut self, button: &mut Button, id: EntityId, tick: &mut Tick<'_>) {
        match self {
            Behavior::GrowOnHover(g) => g.update(button, tick),
            Behavior::Grabbable(g) => g.update(button, id, tick),
        }
    }
}

impl From<GrowOnHover> for Behavior {
    fn from(g: GrowOnHover) -> Self { Behavior::GrowOnHover(g) }
}

impl From<Grabbable> for Behavior {
    fn from(g: Grabbable) -> Self { Behavior::Grabbable(g) }
}

// ── GrowOnHover ──────────────────────────────────────────────────────────────

/// Eases the button's scale to `target_scale` while hovered and back to
/// `default_scale` otherwise.
///
/// Each tick moves the scale by `|target - default| / frame_duration`, so a
/// full grow or shrink takes exactly `frame_duration` ticks. A step that would
/// pass the goal, or lands within epsilon of it, snaps onto it.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowOnHover {
    frame_duration: u32,
    current_scale: f32,
    target_scale: f32,
    default_scale: f32,
}

impl Default for GrowOnHover {
    fn default() -> Self {
        Self::new(10, 1.2)
    }
}

impl GrowOnHover {
    /// # Panics
    /// If `frame_duration` is zero.
    pub fn new(frame_duration: u32, target_scale: f32) -> Self {
        assert!(frame_duration > 0, "grow-on-hover frame duration must be at least one tick");
        Self { frame_duration, current_scale: 1.0, target_scale, default_scale: 1.0 }
    }

    pub fn set_frame_duration(&mut self, frame_duration: u32) {
        assert!(frame_duration > 0, "grow-on-hover frame duration must be at least one tick");
        self.frame_duration = frame_duration;
    }

    pub fn set_target_scale(&mut self, target_scale: f32) {
        self.target_scale = target_scale;
    }

    pub fn frame_duration(&self) -> u32 { self.frame_duration }
    pub fn target_scale(&self) -> f32 { self.target_scale }
    pub fn default_scale(&self) -> f32 { self.default_scale }
    /// Scale written to the button on the last update.
    pub fn current_scale(&self) -> f32 { self.current_scale }

    fn update(&mut self, button: &mut Button, tick: &Tick<'_>) {
        self.current_scale = button.scale();

        let goal = if button.is_hovered(tick.input) { self.target_scale } else { self.default_scale };
        if float_equals(self.current_scale, goal) {
            return;
        }

        let step = (self.target_scale - self.default_scale).abs() / self.frame_duration as f32;
        let delta = if goal > self.current_scale { step } else { -step };
        let mut next = self.current_scale + delta;

        let overshot = (delta > 0.0 && next > goal) || (delta < 0.0 && next < goal);
        if overshot || float_equals(next, goal) {
            next = goal;
        }

        self.current_scale = next;
        button.set_scale(next);
    }
}

// ── Grabbable ────────────────────────────────────────────────────────────────

/// Lets the pointer pick the button up and drag it around.
///
/// Only one button is held at a time: the director's held-button slot is
/// claimed on grab and released by the same button when it is let go.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grabbable {
    grabbed: bool,
    /// Pointer position minus button position at grab time.
    offset: Vec2,
}

impl Grabbable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_grabbed(&self) -> bool { self.grabbed }
    pub fn offset(&self) -> Vec2 { self.offset }

    fn update(&mut self, button: &mut Button, id: EntityId, tick: &mut Tick<'_>) {
        let input = tick.input;
        let pointer = input.pointer();

        if !self.grabbed && button.is_pressed(input) {
            match tick.services.held_button() {
                Some(other) if other != id => {}
                _ => {
                    self.grabbed = true;
                    self.offset = pointer - button.position();
                    tick.services.set_held_button(Some(id));
                    button.set_layer(DRAG_LAYER);
                    log::debug!("grabbed button '{}'", button.text());
                }
            }
        }

        if !self.grabbed {
            return;
        }

        if input.is_mouse_held(MouseButton::Left) {
            button.set_position(pointer - self.offset);
        } else {
            self.grabbed = false;
            if tick.services.held_button() == Some(id) {
                tick.services.set_held_button(None);
            }
            button.set_layer(REST_LAYER);
            log::debug!("released button '{}'", button.text());
        }
    }
}
