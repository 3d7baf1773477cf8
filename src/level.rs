//! The entity container behind every scene.
//!
//! A [`Level`] owns its entities in an [`Arena`] and keeps a separate list of
//! handles sorted by layer. Ties keep insertion order: a new entity goes after
//! every existing entity of the same layer.

use glam::Vec2;

use crate::arena::{Arena, EntityId};
use crate::behavior::GrowOnHover;
use crate::color::Color;
use crate::config::WindowConfig;
use crate::director::Tick;
use crate::entity::{Backdrop, Button, Entity, Text};
use crate::renderer::Canvas;

/// Layer used by the button factories.
pub const BUTTON_LAYER: i32 = 1;

const BACKDROP_DARK: Color = Color::rgb(145, 145, 145);
const BACKDROP_LIGHT: Color = Color::rgb(180, 180, 180);
const BACKDROP_SQUARE: f32 = 50.0;

pub struct Level {
    window: WindowConfig,
    entities: Arena<Entity>,
    /// Handles in update/draw order, each with the layer it was sorted under.
    order: Vec<(EntityId, i32)>,
    /// Subset of `order` that are buttons, in insertion order.
    buttons: Vec<EntityId>,
}

impl Level {
    /// Empty level laid out against `window`.
    pub fn new(window: WindowConfig) -> Self {
        Self { window, entities: Arena::new(), order: Vec::new(), buttons: Vec::new() }
    }

    /// Level with the standard scrolling checkerboard behind everything.
    pub fn with_backdrop(window: WindowConfig) -> Self {
        let extent = Vec2::new(window.width as f32, window.height as f32);
        let mut level = Self::new(window);
        level.add_entity(Backdrop::new(BACKDROP_DARK, BACKDROP_LIGHT, BACKDROP_SQUARE, extent));
        level
    }

    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    // ── Ownership ──────────────────────────────────────────────────────────

    /// Take ownership of `entity` and slot it in by layer.
    pub fn add_entity(&mut self, entity: impl Into<Entity>) -> EntityId {
        let entity = entity.into();
        let layer = entity.layer();
        let is_button = entity.is_button();
        let id = self.entities.insert(entity);
        self.insert_sorted(id, layer);
        if is_button {
            self.buttons.push(id);
        }
        id
    }

    /// Give ownership of an entity back to the caller.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.entities.remove(id)?;
        self.order.retain(|&(e, _)| e != id);
        self.buttons.retain(|&b| b != id);
        Some(entity)
    }

    /// Move an entity to `layer`, re-sorting it behind any entity already there.
    pub fn set_layer(&mut self, id: EntityId, layer: i32) {
        if let Some(entity) = self.entities.get_mut(id) {
            entity.body_mut().layer = layer;
            self.resort(id, layer);
        }
    }

    fn insert_sorted(&mut self, id: EntityId, layer: i32) {
        let at = self.order.partition_point(|&(_, l)| l <= layer);
        self.order.insert(at, (id, layer));
    }

    fn resort(&mut self, id: EntityId, layer: i32) {
        self.order.retain(|&(e, _)| e != id);
        self.insert_sorted(id, layer);
    }

    /// Destroy every entity and forget all handles.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.order.clear();
        self.buttons.clear();
    }

    // ── Per-tick ───────────────────────────────────────────────────────────

    /// Update every entity in layer order, then re-sort any whose layer
    /// changed during the pass.
    pub fn update(&mut self, tick: &mut Tick<'_>) {
        for i in 0..self.order.len() {
            let id = self.order[i].0;
            if let Some(entity) = self.entities.get_mut(id) {
                entity.update(id, tick);
            }
        }

        let moved: Vec<(EntityId, i32)> = self
            .order
            .iter()
            .filter_map(|&(id, sorted)| {
                let layer = self.entities.get(id)?.layer();
                (layer != sorted).then_some((id, layer))
            })
            .collect();
        for (id, layer) in moved {
            self.resort(id, layer);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for (_, entity) in self.iter() {
            entity.draw(canvas);
        }
    }

    /// Draw only entities with `min <= layer < max`.
    pub fn draw_layers(&self, min: i32, max: i32, canvas: &mut dyn Canvas) {
        for (_, entity) in self.iter() {
            let layer = entity.layer();
            if layer >= min && layer < max {
                entity.draw(canvas);
            }
        }
    }

    // ── Access ─────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains(id)
    }

    /// Entities in update/draw order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.order.iter().filter_map(|&(id, _)| self.entities.get(id).map(|e| (id, e)))
    }

    /// Handles in update/draw order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.order.iter().map(|&(id, _)| id).collect()
    }

    /// Current layers in update/draw order.
    pub fn layers(&self) -> Vec<i32> {
        self.iter().map(|(_, e)| e.layer()).collect()
    }

    /// Handles of every button, in the order they were added.
    pub fn buttons(&self) -> &[EntityId] {
        &self.buttons
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// # Panics
    /// If `id` is stale or not a button.
    pub fn button(&self, id: EntityId) -> &Button {
        match self.entities.get(id) {
            Some(Entity::Button(b)) => b,
            Some(_) => panic!("entity {id:?} is not a button"),
            None => panic!("entity {id:?} does not belong to this level"),
        }
    }

    /// # Panics
    /// If `id` is stale or not a button.
    pub fn button_mut(&mut self, id: EntityId) -> &mut Button {
        match self.entities.get_mut(id) {
            Some(Entity::Button(b)) => b,
            Some(_) => panic!("entity {id:?} is not a button"),
            None => panic!("entity {id:?} does not belong to this level"),
        }
    }

    /// # Panics
    /// If `id` is stale or not a text.
    pub fn text_mut(&mut self, id: EntityId) -> &mut Text {
        match self.entities.get_mut(id) {
            Some(Entity::Text(t)) => t,
            Some(_) => panic!("entity {id:?} is not a text"),
            None => panic!("entity {id:?} does not belong to this level"),
        }
    }

    /// Buttons pressed this tick, in insertion order.
    pub fn pressed_buttons(&self, input: &crate::input::InputState) -> Vec<EntityId> {
        self.buttons
            .iter()
            .copied()
            .filter(|&id| self.entities.get(id).and_then(Entity::as_button).is_some_and(|b| b.is_pressed(input)))
            .collect()
    }

    // ── Factories ──────────────────────────────────────────────────────────

    /// Outlined text.
    pub fn add_simple_text(&mut self, text: &str, font_size: f32, color: Color, position: Vec2, layer: i32) -> EntityId {
        self.add_entity(Text::new(text, font_size, color, position, layer))
    }

    /// Dark-gray 180x60 button below the canvas center that grows on hover
    /// and clicks when pressed.
    pub fn add_ui_button(&mut self, text: &str) -> EntityId {
        let position = self.window.center() + Vec2::new(0.0, 100.0);
        let label = Text::new(text, 40.0, Color::WHITE, position, BUTTON_LAYER).with_outline(Color::BLACK, 2.0);
        let button = Button::new(label, Color::DARK_GRAY, Vec2::new(180.0, 60.0), position, BUTTON_LAYER)
            .with_behavior(GrowOnHover::default())
            .with_sfx("click");
        self.add_entity(button)
    }

    /// Button with no background whose hit area is the measured text.
    /// Empty text measures zero and can never be hovered.
    pub fn add_text_button(&mut self, text: &str, font_size: f32, color: Color, position: Vec2) -> EntityId {
        let label = Text::new(text, font_size, color, position, BUTTON_LAYER);
        let size = label.dimensions();
        let button = Button::new(label, Color::TRANSPARENT, size, position, BUTTON_LAYER).with_sfx("grab");
        self.add_entity(button)
    }
}

impl Drop for Level {
    fn drop(&mut self) {
        log::debug!("dropping level with {} entities", self.entities.len());
        self.clear();
    }
}
