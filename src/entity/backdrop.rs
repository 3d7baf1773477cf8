use glam::Vec2;

use crate::color::Color;
use crate::director::Tick;
use crate::geometry::Rect;
use crate::renderer::Canvas;

use super::Body;

/// Default layer for backdrops: behind everything else.
pub const BACKDROP_LAYER: i32 = -1000;
/// Downward scroll in pixels per second.
pub const BACKDROP_SCROLL_SPEED: f32 = 30.0;

/// Scrolling checkerboard that fills the canvas.
///
/// The scroll offset lives in the director's services rather than in the
/// backdrop, so consecutive levels continue the same motion.
#[derive(Clone, Debug)]
pub struct Backdrop {
    pub body: Body,
    dark: Color,
    light: Color,
    square_size: f32,
    /// Canvas area to cover.
    extent: Vec2,
    offset: f32,
}

impl Backdrop {
    pub fn new(dark: Color, light: Color, square_size: f32, extent: Vec2) -> Self {
        Self {
            body: Body::new(Vec2::ZERO, BACKDROP_LAYER),
            dark,
            light,
            square_size: square_size.max(1.0),
            extent,
            offset: 0.0,
        }
    }

    /// Vertical offset of the pattern, wrapped to one dark/light period.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Advances the shared scroll, kept within one period so it never
    /// grows past f32 precision.
    pub fn update(&mut self, tick: &mut Tick<'_>) {
        let period = 2.0 * self.square_size;
        let scroll = tick.services.backdrop_scroll + tick.dt * BACKDROP_SCROLL_SPEED;
        tick.services.backdrop_scroll = scroll.rem_euclid(period);
        self.offset = tick.services.backdrop_scroll;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let s = self.square_size;
        let cols = (self.extent.x / s) as i32 + 2;
        let rows = (self.extent.y / s) as i32 + 2;

        for y in -2..rows {
            for x in 0..cols {
                let color = if (x + y).rem_euclid(2) == 0 { self.dark } else { self.light };
                let rect = Rect::new(x as f32 * s, y as f32 * s + self.offset, s, s);
                canvas.draw_rect(rect, color);
            }
        }
    }
}
