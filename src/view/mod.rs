// VIEW: GPU setup, textures and cube rendering
pub mod gpu_init;
pub mod program;
pub mod render;
pub mod texture;

pub use gpu_init::GpuContext;
pub use program::{CubeDrawer, CubeProgram, ShaderProgram};
pub use render::{OverlayFrame, RenderState};
pub use texture::{ChannelLayout, Texture};
