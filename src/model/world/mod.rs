pub mod block;
pub mod chunk;
pub mod cube;
pub mod terrain;

pub use block::Block;
pub use chunk::{Chunk, LatticeCoord, CHUNK_SIZE, N_CUBES_PER_CHUNK};
pub use cube::Cube;
pub use terrain::HeightMap;
