use crate::director::{Services, Tick};
use crate::level::Level;
use crate::renderer::Canvas;

/// What the director should do after a scene's update.
pub enum SceneAction {
    None,
    /// Replace the current scene at the start of the next tick.
    Switch(Box<dyn Scene>),
    Quit,
}

/// Level-specific logic wrapped around a [`Level`].
///
/// The director updates the level's entities first, then calls
/// [`Scene::update`] so the scene can react to what the entities did this
/// tick (a button press, a timer running out).
pub trait Scene {
    fn name(&self) -> &str;

    fn level(&self) -> &Level;
    fn level_mut(&mut self) -> &mut Level;

    /// Called once when the scene becomes current, after the previous scene
    /// is gone.
    fn on_enter(&mut self, _services: &mut Services) {}
    /// Called right before the scene is dropped.
    fn on_exit(&mut self, _services: &mut Services) {}

    fn update(&mut self, tick: &mut Tick<'_>) -> SceneAction;

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.level().draw(canvas);
    }
}
