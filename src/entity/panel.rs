use glam::Vec2;

use crate::color::Color;
use crate::geometry::Rect;
use crate::renderer::Canvas;

use super::Body;

/// Filled rectangle with an optional border, centred on its position.
#[derive(Clone, Debug)]
pub struct Panel {
    pub body: Body,
    line_color: Color,
    fill_color: Color,
    size: Vec2,
    /// Border width in pixels; 0 draws no border.
    thickness: f32,
    scale: f32,
}

impl Panel {
    pub fn new(line_color: Color, fill_color: Color, size: Vec2, thickness: f32, position: Vec2, layer: i32) -> Self {
        Self {
            body: Body::new(position, layer),
            line_color,
            fill_color,
            size,
            thickness,
            scale: 1.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.body.position, self.size, self.scale)
    }

    pub fn set_scale(&mut self, scale: f32) { self.scale = scale; }
    pub fn size(&self) -> Vec2 { self.size }

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let r = self.rect();
        canvas.draw_rect(r, self.fill_color);

        if self.thickness > 0.0 {
            let t = self.thickness;
            canvas.draw_rect(Rect::new(r.x, r.y, t, r.h), self.line_color); // left
            canvas.draw_rect(Rect::new(r.x + r.w - t, r.y, t, r.h), self.line_color); // right
            canvas.draw_rect(Rect::new(r.x, r.y, r.w, t), self.line_color); // top
            canvas.draw_rect(Rect::new(r.x, r.y + r.h - t, r.w, t), self.line_color); // bottom
        }
    }
}
