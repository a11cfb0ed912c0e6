//! Arcade-style physics: bodies with gravity and velocity, AABB overlap.
//!
//! Positions are in logical pixels with y growing downward. Velocities are
//! in pixels per second and gravity in pixels per second squared.

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A sprite body driven by the physics step.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub gravity_y: f64,
    pub width: f64,
    pub height: f64,
    /// Anchor as a fraction of the size; (0, 0) puts (x, y) at the top-left.
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl Body {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            gravity_y: 0.0,
            width,
            height,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }

    pub fn with_gravity(mut self, gravity_y: f64) -> Self {
        self.gravity_y = gravity_y;
        self
    }

    pub fn with_velocity(mut self, velocity_x: f64, velocity_y: f64) -> Self {
        self.velocity_x = velocity_x;
        self.velocity_y = velocity_y;
        self
    }

    pub fn with_anchor(mut self, anchor_x: f64, anchor_y: f64) -> Self {
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
        self
    }

    /// Advance by `dt` seconds: gravity feeds velocity, then velocity feeds position.
    pub fn integrate(&mut self, dt: f64) {
        self.velocity_y += self.gravity_y * dt;
        self.x += self.velocity_x * dt;
        self.y += self.velocity_y * dt;
    }

    /// World-space bounding box, honoring the anchor.
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            self.x - self.anchor_x * self.width,
            self.y - self.anchor_y * self.height,
            self.width,
            self.height,
        )
    }

    /// True once the whole body has moved past `edge` on the left.
    pub fn is_past_left_edge(&self, edge: f64) -> bool {
        self.bounds().right() < edge
    }
}
