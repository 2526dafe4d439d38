use glam::Vec2;

use crate::api::CollisionBody;
use crate::types::TextureRect;

/// Rectangular body backed by an explicit geometric size.
#[derive(Copy, Clone, Debug)]
pub struct RectShape {
    pub position: Vec2,
    pub size: Vec2,
}

impl RectShape {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }
}

impl CollisionBody for RectShape {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

/// Textured body whose collision extents come from its texture rectangle
/// rather than an explicit size.
#[derive(Copy, Clone, Debug)]
pub struct Sprite {
    pub position: Vec2,
    pub texture_rect: TextureRect,
}

impl Sprite {
    pub fn new(position: Vec2, texture_rect: TextureRect) -> Self {
        Self {
            position,
            texture_rect,
        }
    }
}

impl CollisionBody for Sprite {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn half_size(&self) -> Vec2 {
        Vec2::new(
            self.texture_rect.width as f32,
            self.texture_rect.height as f32,
        ) / 2.0
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
