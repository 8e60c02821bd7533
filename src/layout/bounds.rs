//! Pixel-space geometry for grid slots.

/// Size of the area the grid is drawn into, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Bounds of a slot in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlotBounds {
    /// X position in pixels from the left edge of the viewport
    pub x: f32,
    /// Y position in pixels from the top of the viewport
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SlotBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside these bounds
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}
