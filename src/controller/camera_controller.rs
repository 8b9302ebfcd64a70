use crate::model::Camera;

use super::input::{InputProcessor, InputState};

/// Feeds one frame of input into the camera
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    processor: InputProcessor,
}

impl CameraController {
    pub fn new(processor: InputProcessor) -> Self {
        Self { processor }
    }

    pub fn processor(&self) -> &InputProcessor {
        &self.processor
    }

    /// Apply accumulated mouse look and scroll, then consume them
    pub fn apply_look(&self, camera: &mut Camera, input: &mut InputState) {
        let (dx, dy) = input.consume_look();
        if dx != 0.0 || dy != 0.0 {
            camera.apply_mouse_look(dx, dy);
        }

        let scroll = input.consume_scroll();
        if scroll != 0.0 {
            camera.apply_scroll(scroll);
        }
    }

    /// Every held direction moves the camera on its own, so diagonal
    /// movement is faster than straight movement.
    pub fn update_movement(&self, camera: &mut Camera, input: &InputState, dt: f32) {
        for movement in self.processor.movements(input) {
            camera.apply_movement(movement, dt);
        }
    }
}
