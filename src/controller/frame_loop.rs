use std::time::Instant;

use glam::Mat4;

use crate::controller::camera_controller::CameraController;
use crate::controller::input::{InputEvent, InputState, PolygonMode};
use crate::model::{Camera, Chunk};
use crate::view::program::{self, CubeDrawer, ShaderProgram};

/// Monotonic frame clock with a once-per-second FPS estimate
#[derive(Debug)]
pub struct FrameTimer {
    last_frame: Instant,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { last_frame: start, frames: 0, elapsed: 0.0, fps: 0.0 }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed >= 1.0 {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
        }
        dt
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Restarts the clock so the next tick measures from now.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn reset_at(&mut self, now: Instant) {
        *self = Self::starting_at(now);
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Binds the program and points the two samplers at their texture slots.
pub fn init_program<P: ShaderProgram>(program: &mut P) {
    program.use_program();
    program.set_int(program::DIRT_TEXTURE, 0);
    program.set_int(program::OVERLAY_TEXTURE, 1);
}

/// Issues one cube draw per solid cell, x outermost, z innermost. Returns the
/// number of draws.
pub fn render_chunk<D: CubeDrawer>(chunk: &Chunk, camera: &Camera, aspect: f32, drawer: &mut D) -> usize {
    drawer.use_program();
    drawer.set_mat4(program::PROJECTION, &camera.projection_matrix(aspect));
    drawer.set_mat4(program::VIEW, &camera.view_matrix());

    let mut draws = 0;
    for (_, cube) in chunk.iter() {
        let Some(color) = cube.block().color() else {
            continue;
        };
        drawer.set_mat4(program::MODEL, &Mat4::from_translation(cube.position()));
        drawer.set_vec3(program::COLOR, color);
        drawer.draw_cube();
        draws += 1;
    }
    draws
}

/// Everything the render loop owns: the chunk, the camera, and input
pub struct FrameLoopContext {
    pub camera: Camera,
    pub chunk: Chunk,
    pub input: InputState,
    pub camera_controller: CameraController,
    pub timer: FrameTimer,
    pub last_draw_count: usize,
}

impl FrameLoopContext {
    pub fn new(camera: Camera, chunk: Chunk, camera_controller: CameraController) -> Self {
        Self {
            camera,
            chunk,
            input: InputState::new(),
            camera_controller,
            timer: FrameTimer::new(),
            last_draw_count: 0,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input.process_event(event);
    }

    /// Apply one frame of input. Returns `false` once a close was requested.
    pub fn update(&mut self, dt: f32) -> bool {
        let processor = self.camera_controller.processor();

        if processor.wants_to_quit(&self.input) && !self.input.quit_requested {
            tracing::info!("quit key pressed, window should close");
            self.input.quit_requested = true;
        }

        if let Some(mode) = processor.polygon_mode(&self.input) {
            if mode != self.input.polygon_mode {
                tracing::debug!(?mode, "polygon mode changed");
                self.input.polygon_mode = mode;
            }
        }

        self.camera_controller.apply_look(&mut self.camera, &mut self.input);
        self.camera_controller.update_movement(&mut self.camera, &self.input, dt);

        !self.input.quit_requested
    }

    pub fn render<D: CubeDrawer>(&mut self, drawer: &mut D, aspect: f32) -> usize {
        self.last_draw_count = render_chunk(&self.chunk, &self.camera, aspect, drawer);
        self.last_draw_count
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.input.polygon_mode
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec3;
    use winit::keyboard::KeyCode;

    use super::*;
    use crate::model::{Block, HeightMap, CHUNK_SIZE};
    use crate::view::program::CubeProgram;

    #[derive(Default)]
    struct RecordingDrawer {
        bound: bool,
        model: Mat4,
        color: Vec3,
        view: Option<Mat4>,
        projection: Option<Mat4>,
        draws: Vec<(Mat4, Vec3)>,
    }

    impl ShaderProgram for RecordingDrawer {
        fn use_program(&mut self) {
            self.bound = true;
        }
        fn set_mat4(&mut self, name: &str, value: &Mat4) {
            match name {
                "model" => self.model = *value,
                "view" => self.view = Some(*value),
                "projection" => self.projection = Some(*value),
                other => panic!("unexpected uniform {other}"),
            }
        }
        fn set_vec3(&mut self, name: &str, value: Vec3) {
            assert_eq!(name, "aColor");
            self.color = value;
        }
        fn set_int(&mut self, _name: &str, _value: i32) {}
    }

    impl CubeDrawer for RecordingDrawer {
        fn draw_cube(&mut self) {
            assert!(self.bound);
            self.draws.push((self.model, self.color));
        }
    }

    #[test]
    fn every_solid_cube_is_drawn_once() {
        let chunk = Chunk::gradient();
        let mut drawer = RecordingDrawer::default();
        let draws = render_chunk(&chunk, &Camera::default(), 1.0, &mut drawer);
        assert_eq!(draws, 4096);
        assert_eq!(drawer.draws.len(), 4096);
    }

    #[test]
    fn air_is_skipped_and_models_are_pure_translations() {
        let chunk = Chunk::with_height_map(&HeightMap::pyramid());
        let mut drawer = RecordingDrawer::default();
        let draws = render_chunk(&chunk, &Camera::default(), 1.0, &mut drawer);
        assert_eq!(draws, chunk.solid_count());

        let solid: Vec<_> = chunk.iter().filter(|(_, c)| !c.is_air()).collect();
        for ((_, cube), (model, color)) in solid.iter().zip(&drawer.draws) {
            assert_eq!(*model, Mat4::from_translation(cube.position()));
            assert_eq!(Some(*color), cube.block().color());
            let (scale, rotation, _) = model.to_scale_rotation_translation();
            assert!((scale - Vec3::ONE).length() < 1e-6);
            assert!(rotation.angle_between(glam::Quat::IDENTITY) < 1e-6);
        }
    }

    #[test]
    fn frame_matrices_come_from_camera() {
        let camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let mut drawer = RecordingDrawer::default();
        render_chunk(&Chunk::with_height_map(&HeightMap::flat(-1)), &camera, 2.0, &mut drawer);

        assert!(drawer.draws.is_empty());
        assert_eq!(drawer.view, Some(camera.view_matrix()));
        assert_eq!(drawer.projection, Some(camera.projection_matrix(2.0)));
    }

    #[test]
    fn recorded_program_matches_chunk() {
        let mut chunk = Chunk::gradient();
        chunk.set_cube(0, 0, 0, Block::Air).unwrap();
        let mut program = CubeProgram::new();
        init_program(&mut program);
        render_chunk(&chunk, &Camera::default(), 1.0, &mut program);

        let instances = program.instances();
        assert_eq!(instances.len(), CHUNK_SIZE.pow(3) - 1);
        // (0, 0, 1) is the first solid cell and renders at the top of the chunk
        assert_eq!(instances[0].translation(), Vec3::new(0.0, 15.0, 1.0));
        assert_eq!(program.frame_uniform().texture_units, [0, 1, 0, 0]);
    }

    #[test]
    fn update_moves_camera_and_handles_mode_keys() {
        let mut ctx = FrameLoopContext::new(Camera::default(), Chunk::gradient(), CameraController::default());
        ctx.handle_event(&InputEvent::KeyDown(KeyCode::KeyW));
        ctx.handle_event(&InputEvent::KeyDown(KeyCode::KeyJ));

        assert!(ctx.update(1.0));
        assert!((ctx.camera.position - Vec3::new(0.0, 0.0, -2.5)).length() < 1e-4);
        assert_eq!(ctx.polygon_mode(), PolygonMode::Line);

        ctx.handle_event(&InputEvent::KeyUp(KeyCode::KeyJ));
        ctx.handle_event(&InputEvent::KeyDown(KeyCode::KeyK));
        ctx.update(0.0);
        assert_eq!(ctx.polygon_mode(), PolygonMode::Fill);

        ctx.handle_event(&InputEvent::KeyDown(KeyCode::KeyQ));
        assert!(!ctx.update(0.0));
    }

    #[test]
    fn timer_reports_elapsed_seconds() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start);
        let dt = timer.tick_at(start + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-6);

        for i in 2..=4 {
            timer.tick_at(start + Duration::from_millis(250 * i));
        }
        assert!((timer.fps() - 4.0).abs() < 1e-3);
    }

    #[test]
    fn reset_discards_time_before_it() {
        let start = Instant::now();
        let mut timer = FrameTimer::starting_at(start);
        for i in 1..=8 {
            timer.tick_at(start + Duration::from_millis(250 * i));
        }
        assert!(timer.fps() > 0.0);

        // window and device setup can take seconds
        let ready = start + Duration::from_secs(10);
        timer.reset_at(ready);
        assert_eq!(timer.fps(), 0.0);
        let dt = timer.tick_at(ready + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
    }
}
