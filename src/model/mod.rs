// MODEL: voxel lattice and camera
pub mod world;
pub mod camera;

pub use world::{Block, Chunk, Cube, HeightMap, LatticeCoord, CHUNK_SIZE};
pub use camera::{Camera, Movement};
