use glam::Vec3;

use super::block::Block;

/// Colour used when a cube is placed without one.
pub const DEFAULT_CUBE_COLOR: Vec3 = Vec3::new(1.0, 0.2, 0.3);

/// A block placed at a world-space position.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Cube {
    position: Vec3,
    block: Block,
}

impl Cube {
    pub fn new(position: Vec3, block: Block) -> Self {
        Self { position, block }
    }

    /// Solid cube in the default colour.
    pub fn at(position: Vec3) -> Self {
        Self::with_color(position, DEFAULT_CUBE_COLOR)
    }

    pub fn with_color(position: Vec3, color: Vec3) -> Self {
        Self { position, block: Block::from_color(color) }
    }

    pub fn is_air(&self) -> bool {
        self.block.is_air()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn block(&self) -> Block {
        self.block
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.block = Block::from_color(color);
    }

    pub fn set_block(&mut self, block: Block) {
        self.block = block;
    }
}
