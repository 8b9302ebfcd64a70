use glam::{Mat4, Vec3};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_FOV: f32 = 45.0;

pub const MAX_PITCH: f32 = 89.5;
pub const MIN_PITCH: f32 = -89.5;
pub const MAX_FOV: f32 = 115.0;
pub const MIN_FOV: f32 = 20.0;

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free-fly camera. Angles are stored in degrees.
///
/// `up` is derived as `front × right`, which points along -Y for a level view,
/// so the rendered image is vertically flipped. The chunk is built upside down
/// to match, and the strafe and vertical movement signs below are the ones
/// that read correctly on screen under that flip.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub up: Vec3,
    pub front: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,

    pub fov: f32,
    pub yaw: f32,
    pub pitch: f32,

    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            up: Vec3::Y,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            world_up,
            fov: DEFAULT_FOV,
            yaw,
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, Z_NEAR, Z_FAR)
    }

    pub fn apply_movement(&mut self, direction: Movement, dt: f32) {
        let velocity = self.movement_speed * dt;

        match direction {
            Movement::Forward => self.position += horizontal(self.front) * velocity,
            Movement::Backward => self.position -= horizontal(self.front) * velocity,
            Movement::Right => self.position -= horizontal(self.right) * velocity,
            Movement::Left => self.position += horizontal(self.right) * velocity,
            Movement::Up => self.position -= self.world_up * velocity,
            Movement::Down => self.position += self.world_up * velocity,
        }
    }

    /// Mouse deltas in pixels.
    pub fn apply_mouse_look(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.mouse_sensitivity;
        self.pitch = (self.pitch + dy * self.mouse_sensitivity).clamp(MIN_PITCH, MAX_PITCH);
        self.update_vectors();
    }

    pub fn apply_scroll(&mut self, dy: f32) {
        self.fov = (self.fov - dy).clamp(MIN_FOV, MAX_FOV);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.front.cross(self.right).normalize();
    }
}

// Movement stays in the horizontal plane regardless of pitch.
fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_orthonormal(cam: &Camera) {
        for v in [cam.front, cam.right, cam.up] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit length: {v:?}");
        }
        assert!(cam.front.dot(cam.right).abs() < EPS);
        assert!(cam.front.dot(cam.up).abs() < EPS);
        assert!(cam.right.dot(cam.up).abs() < EPS);
    }

    #[test]
    fn orientation_is_orthonormal_for_all_angles() {
        let mut yaw = -360.0;
        while yaw <= 360.0 {
            let mut pitch = MIN_PITCH;
            while pitch <= MAX_PITCH {
                let cam = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);
                assert_orthonormal(&cam);
                pitch += 7.25;
            }
            yaw += 15.0;
        }
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let cam = Camera::default();
        assert!((cam.front - Vec3::NEG_Z).length() < EPS);
        assert!((cam.right - Vec3::X).length() < EPS);
        // front x right flips the up vector
        assert!((cam.up - Vec3::NEG_Y).length() < EPS);
    }

    #[test]
    fn pitch_clamped_under_large_mouse_input() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            cam.apply_mouse_look(0.0, 10_000.0);
        }
        assert_eq!(cam.pitch, MAX_PITCH);
        assert_orthonormal(&cam);

        cam.apply_mouse_look(0.0, -1.0e7);
        assert_eq!(cam.pitch, MIN_PITCH);
        assert_orthonormal(&cam);
    }

    #[test]
    fn constructor_clamps_pitch() {
        for (pitch, expected) in [(90.0, MAX_PITCH), (120.0, MAX_PITCH), (-90.0, MIN_PITCH), (-120.0, MIN_PITCH)] {
            let cam = Camera::new(Vec3::ZERO, Vec3::Y, 0.0, pitch);
            assert_eq!(cam.pitch, expected);
            assert_orthonormal(&cam);
            // still facing along yaw 0, not flipped over the pole
            assert!(cam.front.x > 0.0);
            assert!(cam.front.y.abs() < 1.0);
        }
    }

    #[test]
    fn mouse_look_subtracts_yaw_and_adds_pitch() {
        let mut cam = Camera::default();
        cam.apply_mouse_look(10.0, 20.0);
        assert!((cam.yaw - (DEFAULT_YAW - 1.0)).abs() < EPS);
        assert!((cam.pitch - 2.0).abs() < EPS);
    }

    #[test]
    fn fov_clamped_by_scroll() {
        let mut cam = Camera::default();
        cam.apply_scroll(5.0);
        assert_eq!(cam.fov, 40.0);

        cam.apply_scroll(1000.0);
        assert_eq!(cam.fov, MIN_FOV);

        cam.apply_scroll(-1000.0);
        assert_eq!(cam.fov, MAX_FOV);
    }

    #[test]
    fn forward_movement_stays_horizontal() {
        let mut cam = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 30.0, 40.0);
        let start = cam.position;
        let dt = 0.5;
        cam.apply_movement(Movement::Forward, dt);

        let delta = cam.position - start;
        assert_eq!(delta.y, 0.0);
        assert!((delta.length() - cam.movement_speed * dt).abs() < EPS);

        let expected = Vec3::new(cam.front.x, 0.0, cam.front.z).normalize() * cam.movement_speed * dt;
        assert!((delta - expected).length() < EPS);
    }

    #[test]
    fn backward_undoes_forward() {
        let mut cam = Camera::new(Vec3::ZERO, Vec3::Y, 12.0, -30.0);
        cam.apply_movement(Movement::Forward, 1.0);
        cam.apply_movement(Movement::Backward, 1.0);
        assert!(cam.position.length() < EPS);
    }

    // Strafe and vertical signs are inverted relative to the usual convention;
    // these tests pin that mapping.
    #[test]
    fn right_key_moves_against_right_vector() {
        let mut cam = Camera::default();
        cam.apply_movement(Movement::Right, 1.0);
        assert!((cam.position - Vec3::new(-DEFAULT_SPEED, 0.0, 0.0)).length() < EPS);

        let mut cam = Camera::default();
        cam.apply_movement(Movement::Left, 1.0);
        assert!((cam.position - Vec3::new(DEFAULT_SPEED, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn up_key_moves_against_world_up() {
        let mut cam = Camera::default();
        cam.apply_movement(Movement::Up, 2.0);
        assert!((cam.position - Vec3::new(0.0, -2.0 * DEFAULT_SPEED, 0.0)).length() < EPS);

        cam.apply_movement(Movement::Down, 2.0);
        assert!(cam.position.length() < EPS);
    }

    #[test]
    fn view_matrix_maps_target_onto_view_axis() {
        let cam = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let view = cam.view_matrix();
        let target = view.transform_point3(cam.position + cam.front * 5.0);
        assert!(target.x.abs() < EPS && target.y.abs() < EPS);
        assert!((target.z + 5.0).abs() < EPS);
    }
}
