use glam::Vec3;

use super::block::Block;
use super::cube::Cube;
use super::terrain::HeightMap;
use crate::error::WorldError;

pub const CHUNK_SIZE: usize = 16;
pub const N_CUBES_PER_CHUNK: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

const TOP: usize = CHUNK_SIZE - 1;

/// Chunk-local lattice coordinates (0-15 for each component)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct LatticeCoord(usize, usize, usize);

impl LatticeCoord {
    pub fn new(x: usize, y: usize, z: usize) -> Result<Self, WorldError> {
        if x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE {
            Ok(Self(x, y, z))
        } else {
            Err(WorldError::OutOfBounds { x, y, z })
        }
    }

    pub fn x(&self) -> usize {
        self.0
    }

    pub fn y(&self) -> usize {
        self.1
    }

    pub fn z(&self) -> usize {
        self.2
    }

    /// Flat storage index, x outermost and z innermost.
    pub fn index(&self) -> usize {
        (self.0 * CHUNK_SIZE + self.1) * CHUNK_SIZE + self.2
    }

    fn from_index(idx: usize) -> Self {
        Self(idx / (CHUNK_SIZE * CHUNK_SIZE), (idx / CHUNK_SIZE) % CHUNK_SIZE, idx % CHUNK_SIZE)
    }

    /// Lattice row 0 is rendered at the top of the chunk.
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.0 as f32, (TOP - self.1) as f32, self.2 as f32)
    }

    /// Gradient colour derived from the normalised lattice coordinates.
    pub fn gradient_color(&self) -> Vec3 {
        Vec3::new(self.0 as f32, self.1 as f32, self.2 as f32) / TOP as f32
    }
}

/// Fixed 16x16x16 lattice of cubes. Every cell is always populated; empty cells
/// hold an air block.
#[derive(Clone, Debug)]
pub struct Chunk {
    cubes: Box<[Cube]>,
}

impl Chunk {
    /// Populates all cells. Without a height map every cell is solid; with one,
    /// cells above their column's height are air.
    pub fn build(height_map: Option<&HeightMap>) -> Self {
        let cubes = (0..N_CUBES_PER_CHUNK)
            .map(|idx| {
                let coord = LatticeCoord::from_index(idx);
                let solid = match height_map {
                    Some(map) => (TOP - coord.y()) as i32 <= map.height(coord.x(), coord.z()),
                    None => true,
                };
                let block = if solid { Block::solid(coord.gradient_color()) } else { Block::Air };
                Cube::new(coord.world_position(), block)
            })
            .collect();

        Self { cubes }
    }

    pub fn gradient() -> Self {
        Self::build(None)
    }

    pub fn with_height_map(height_map: &HeightMap) -> Self {
        Self::build(Some(height_map))
    }

    pub fn get_cube(&self, x: usize, y: usize, z: usize) -> Result<&Cube, WorldError> {
        let coord = LatticeCoord::new(x, y, z)?;
        Ok(&self.cubes[coord.index()])
    }

    /// Overwrites one cell. The cube's position is recomputed from the indices.
    pub fn set_cube(&mut self, x: usize, y: usize, z: usize, block: Block) -> Result<(), WorldError> {
        let coord = LatticeCoord::new(x, y, z)?;
        self.cubes[coord.index()] = Cube::new(coord.world_position(), block);
        Ok(())
    }

    /// All cells in x, y, z nesting order.
    pub fn iter(&self) -> impl Iterator<Item = (LatticeCoord, &Cube)> + '_ {
        self.cubes
            .iter()
            .enumerate()
            .map(|(idx, cube)| (LatticeCoord::from_index(idx), cube))
    }

    pub fn solid_count(&self) -> usize {
        self.cubes.iter().filter(|c| !c.is_air()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.solid_count() == 0
    }
}
