//! Headless attract mode: boots the game against a counting canvas and lets
//! a scripted player click and drag its way through the levels.

use glam::Vec2;

use thinks::audio::{AudioBackend, KiraBackend, NullBackend};
use thinks::color::Color;
use thinks::config::GameConfig;
use thinks::director::Director;
use thinks::geometry::Rect;
use thinks::input::{InputState, MouseButton};
use thinks::levels::Title;
use thinks::renderer::{Canvas, TextRun};

/// Seconds of play before the runner exits.
const ATTRACT_SECS: u64 = 60;

/// Ticks spent hovering a target before pressing it.
const HOVER_TICKS: u32 = 20;
/// Ticks spent dragging from grab point to drop point.
const DRAG_TICKS: u32 = 40;
/// Give up on a plan that hasn't moved the game on after this many ticks.
const PATIENCE_TICKS: u32 = 120;

// ── Canvas ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FrameStats {
    rects: u64,
    texts: u64,
}

impl Canvas for FrameStats {
    fn draw_rect(&mut self, _rect: Rect, _color: Color) {
        self.rects += 1;
    }

    fn draw_text(&mut self, _run: &TextRun) {
        self.texts += 1;
    }
}

// ── Scripted player ──────────────────────────────────────────────────────────

struct Plan {
    grab: Vec2,
    /// Where to let go; `None` is a plain click.
    drop: Option<Vec2>,
}

#[derive(Default)]
struct Bot {
    level: String,
    plan: Option<Plan>,
    ticks: u32,
    /// Rotates which button gets clicked.
    choice: usize,
}

impl Bot {
    fn drive(&mut self, director: &Director, input: &mut InputState) {
        let Some(level) = director.current_level() else { return };
        let name = director.current_level_name().unwrap_or_default();

        if name != self.level || self.ticks > PATIENCE_TICKS {
            if input.is_mouse_held(MouseButton::Left) {
                input.release_mouse(MouseButton::Left);
            }
            self.level = name.to_string();
            self.plan = None;
            self.ticks = 0;
        }

        if self.plan.is_none() {
            let buttons = level.buttons();
            if buttons.is_empty() {
                return;
            }
            let find = |label: &str| {
                buttons.iter().map(|&id| level.button(id)).find(|b| b.text() == label).map(|b| b.position())
            };
            self.plan = Some(match (find("7"), find("9")) {
                (Some(seven), Some(nine)) => Plan { grab: seven, drop: Some(nine) },
                _ => {
                    let id = buttons[self.choice % buttons.len()];
                    self.choice += 1;
                    Plan { grab: level.button(id).position(), drop: None }
                }
            });
            log::debug!("bot planning on level '{name}'");
        }

        let Some(plan) = &self.plan else { return };
        self.ticks += 1;

        match (self.ticks, plan.drop) {
            (t, _) if t <= HOVER_TICKS => input.move_pointer(plan.grab),
            (t, _) if t == HOVER_TICKS + 1 => input.press_mouse(MouseButton::Left),
            (t, None) if t == HOVER_TICKS + 2 => input.release_mouse(MouseButton::Left),
            (t, Some(drop)) if t <= HOVER_TICKS + 1 + DRAG_TICKS => {
                let step = (t - HOVER_TICKS - 1) as f32 / DRAG_TICKS as f32;
                input.move_pointer(plan.grab.lerp(drop, step));
            }
            (t, Some(_)) if t == HOVER_TICKS + 2 + DRAG_TICKS => input.release_mouse(MouseButton::Left),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };

    let backend: Box<dyn AudioBackend> = match KiraBackend::new() {
        Ok(kira) => Box::new(kira),
        Err(e) => {
            log::warn!("audio device unavailable, running silent: {e:#}");
            Box::new(NullBackend::default())
        }
    };

    let ticks = config.window.frame_rate as u64 * ATTRACT_SECS;
    let mut director = Director::new(config, backend);
    director.set_next_level_with(|services| Box::new(Title::new(services)));

    let mut stats = FrameStats::default();
    let mut bot = Bot::default();
    let ran = director.run(ticks, &mut stats, |director, input| bot.drive(director, input));

    log::info!(
        "attract mode done: {ran} ticks, {} rects and {} text runs drawn",
        stats.rects,
        stats.texts
    );
    Ok(())
}
