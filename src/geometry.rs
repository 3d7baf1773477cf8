use glam::Vec2;

/// Axis-aligned rectangle in pixel space. `x`/`y` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size * scale` centred on `center`.
    pub fn centered(center: Vec2, size: Vec2, scale: f32) -> Self {
        let w = size.x * scale;
        let h = size.y * scale;
        Self { x: center.x - w / 2.0, y: center.y - h / 2.0, w, h }
    }

    /// Half-open containment test: left/top edges inclusive, right/bottom exclusive.
    /// A zero-sized rectangle contains nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// True if the two rectangles share any area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}
