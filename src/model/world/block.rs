use glam::Vec3;

/// Colour that older data used to mark an empty cell.
pub const AIR_SENTINEL: Vec3 = Vec3::new(-1.0, -1.0, -1.0);

/// Colour a block takes when it is filled without an explicit colour.
pub const FULL_COLOR: Vec3 = Vec3::ONE;

/// Per-voxel colour tag. A cell is either empty or a solid block of one colour.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Block {
    #[default]
    Air,
    Solid { color: Vec3 },
}

impl Block {
    pub fn solid(color: Vec3) -> Self {
        Block::Solid { color }
    }

    /// Builds a block from a raw colour, treating [`AIR_SENTINEL`] as air.
    pub fn from_color(color: Vec3) -> Self {
        if color == AIR_SENTINEL {
            Block::Air
        } else {
            Block::Solid { color }
        }
    }

    pub fn set_air(&mut self) {
        *self = Block::Air;
    }

    pub fn set_full(&mut self) {
        *self = Block::Solid { color: FULL_COLOR };
    }

    pub fn is_air(&self) -> bool {
        matches!(self, Block::Air)
    }

    pub fn color(&self) -> Option<Vec3> {
        match self {
            Block::Air => None,
            Block::Solid { color } => Some(*color),
        }
    }
}
