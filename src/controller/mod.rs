// CONTROLLER: input, camera control and the per-frame update
pub mod input;
pub mod camera_controller;
pub mod frame_loop;

pub use input::{InputEvent, InputProcessor, InputState, KeyBindings, PolygonMode};
pub use camera_controller::CameraController;
pub use frame_loop::{FrameLoopContext, FrameTimer};
