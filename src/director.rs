//! Level director: the single owner of the running scene and of the services
//! every scene leans on.

use glam::Vec2;

use crate::arena::EntityId;
use crate::audio::{AudioBackend, Mixer};
use crate::config::{GameConfig, WindowConfig};
use crate::input::InputState;
use crate::level::Level;
use crate::random::Randomness;
use crate::renderer::Canvas;
use crate::scene::{Scene, SceneAction};

// ── Services ─────────────────────────────────────────────────────────────────

/// Shared state handed to scenes and entities through [`Tick`].
pub struct Services {
    pub config: GameConfig,
    pub audio: Mixer,
    pub random: Randomness,
    /// Button currently being dragged, if any. At most one at a time.
    held_button: Option<EntityId>,
    /// Accumulated backdrop scroll, carried across levels.
    pub backdrop_scroll: f32,
    /// Seconds since the director started.
    clock: f64,
}

impl Services {
    pub fn new(config: GameConfig, backend: Box<dyn AudioBackend>) -> Self {
        let audio = Mixer::new(backend, &config.audio);
        let random = Randomness::new(config.seed);
        Self { config, audio, random, held_button: None, backdrop_scroll: 0.0, clock: 0.0 }
    }

    pub fn held_button(&self) -> Option<EntityId> {
        self.held_button
    }

    pub fn set_held_button(&mut self, button: Option<EntityId>) {
        self.held_button = button;
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn window(&self) -> &WindowConfig {
        &self.config.window
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Horizontal canvas center.
    pub fn cw(&self) -> f32 {
        self.config.window.cw()
    }

    /// Vertical canvas center.
    pub fn ch(&self) -> f32 {
        self.config.window.ch()
    }

    pub fn pointer_in_canvas(&self, input: &InputState) -> bool {
        let p = input.pointer();
        let w = &self.config.window;
        input.pointer_inside && p.x >= 0.0 && p.y >= 0.0 && p.x < w.width as f32 && p.y < w.height as f32
    }
}

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Per-tick context passed down through scene, level, entity and behavior
/// updates.
pub struct Tick<'a> {
    pub input: &'a InputState,
    /// Seconds since the previous tick.
    pub dt: f32,
    pub services: &'a mut Services,
}

impl Tick<'_> {
    /// Monotonic clock for periodic motion.
    pub fn time(&self) -> f64 {
        self.services.clock
    }

    pub fn pointer(&self) -> Vec2 {
        self.input.pointer()
    }
}

// ── Director ─────────────────────────────────────────────────────────────────

pub struct Director {
    services: Services,
    current: Option<Box<dyn Scene>>,
    pending: Option<Box<dyn Scene>>,
    quit_requested: bool,
    ticks: u64,
}

impl Director {
    pub fn new(config: GameConfig, backend: Box<dyn AudioBackend>) -> Self {
        log::info!("{} v{} ({}x{} @ {} Hz)", config.title, config.version, config.window.width, config.window.height, config.window.frame_rate);
        Self {
            services: Services::new(config, backend),
            current: None,
            pending: None,
            quit_requested: false,
            ticks: 0,
        }
    }

    /// Queue `scene` to replace the current one at the start of the next
    /// tick. A scene queued earlier and not yet promoted is dropped.
    pub fn set_next_level(&mut self, scene: Box<dyn Scene>) {
        if let Some(dropped) = self.pending.replace(scene) {
            log::debug!("pending level '{}' replaced before it ran", dropped.name());
        }
    }

    /// Build a scene against the services and queue it.
    pub fn set_next_level_with<F>(&mut self, build: F)
    where
        F: FnOnce(&mut Services) -> Box<dyn Scene>,
    {
        let scene = build(&mut self.services);
        self.set_next_level(scene);
    }

    pub fn has_pending_level(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current_scene(&self) -> Option<&dyn Scene> {
        self.current.as_deref()
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.current.as_deref().map(|s| s.level())
    }

    pub fn current_level_name(&self) -> Option<&str> {
        self.current.as_deref().map(|s| s.name())
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut Services {
        &mut self.services
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One update pass: swap in a pending scene, update the current level's
    /// entities, run the scene's own logic, then advance the mixer.
    pub fn tick(&mut self, input: &InputState, dt: f32) {
        self.ticks += 1;
        self.services.clock += dt as f64;

        if let Some(mut incoming) = self.pending.take() {
            if let Some(mut outgoing) = self.current.take() {
                outgoing.on_exit(&mut self.services);
                log::info!(
                    "level '{}' -> '{}', freeing {} entities",
                    outgoing.name(),
                    incoming.name(),
                    outgoing.level().len()
                );
                drop(outgoing);
            } else {
                log::info!("starting at level '{}'", incoming.name());
            }
            self.services.held_button = None;
            incoming.on_enter(&mut self.services);
            self.current = Some(incoming);
        }

        let action = match self.current.as_mut() {
            Some(scene) => {
                let mut tick = Tick { input, dt, services: &mut self.services };
                scene.level_mut().update(&mut tick);
                scene.update(&mut tick)
            }
            None => SceneAction::None,
        };

        match action {
            SceneAction::None => {}
            SceneAction::Switch(next) => self.set_next_level(next),
            SceneAction::Quit => {
                log::info!("quit requested after {} ticks", self.ticks);
                self.quit_requested = true;
            }
        }

        self.services.audio.advance(dt);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(scene) = &self.current {
            scene.draw(canvas);
        }
    }

    /// Update then draw.
    pub fn frame(&mut self, input: &InputState, dt: f32, canvas: &mut dyn Canvas) {
        self.tick(input, dt);
        self.draw(canvas);
    }

    /// Run up to `ticks` fixed-step frames at the configured frame rate.
    ///
    /// `drive` feeds input for each frame after the previous frame's edges
    /// are cleared. Stops early on a quit request and returns the number of
    /// frames run.
    pub fn run<F>(&mut self, ticks: u64, canvas: &mut dyn Canvas, mut drive: F) -> u64
    where
        F: FnMut(&Director, &mut InputState),
    {
        let dt = self.services.config.window.frame_dt();
        let mut input = InputState::new();
        let mut ran = 0;

        while ran < ticks && !self.quit_requested {
            input.end_frame();
            drive(self, &mut input);
            self.frame(&input, dt, canvas);
            ran += 1;
        }
        ran
    }
}
