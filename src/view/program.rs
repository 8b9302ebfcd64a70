//! Shader program seam between the frame loop and the GPU backend.
//!
//! The frame loop talks to a program the way a classic immediate-mode renderer
//! does: bind it, set named uniforms, issue a cube draw. [`CubeProgram`] records
//! those calls on the CPU; the wgpu renderer then uploads the frame uniforms and
//! replays every recorded draw as one instance of the cube mesh.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

pub const VIEW: &str = "view";
pub const PROJECTION: &str = "projection";
pub const MODEL: &str = "model";
pub const COLOR: &str = "aColor";
pub const DIRT_TEXTURE: &str = "dirt";
pub const OVERLAY_TEXTURE: &str = "awesome";

/// Named-uniform interface of a compiled vertex/fragment pair.
pub trait ShaderProgram {
    fn use_program(&mut self);
    fn set_mat4(&mut self, name: &str, value: &Mat4);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_int(&mut self, name: &str, value: i32);
}

pub trait CubeDrawer: ShaderProgram {
    /// Draws the 36-vertex unit cube with the uniforms currently set.
    fn draw_cube(&mut self);
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// Texture slot read by the `dirt` and `awesome` samplers.
    pub texture_units: [i32; 4],
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            texture_units: [0, 1, 0, 0],
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub fn new(model: Mat4, color: Vec3) -> Self {
        Self { model: model.to_cols_array_2d(), color: color.extend(1.0).to_array() }
    }

    pub fn translation(&self) -> Vec3 {
        Mat4::from_cols_array_2d(&self.model).w_axis.truncate()
    }
}

/// CPU-side recording of one frame's program state and cube draws.
#[derive(Debug, Default)]
pub struct CubeProgram {
    in_use: bool,
    frame: FrameUniform,
    model: Mat4,
    color: Vec3,
    instances: Vec<InstanceRaw>,
}

impl CubeProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_uniform(&self) -> &FrameUniform {
        &self.frame
    }

    pub fn instances(&self) -> &[InstanceRaw] {
        &self.instances
    }

    /// Forget the draws of the previous frame. Uniform values are kept.
    pub fn clear_draws(&mut self) {
        self.instances.clear();
    }
}

impl ShaderProgram for CubeProgram {
    fn use_program(&mut self) {
        self.in_use = true;
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        match name {
            VIEW => self.frame.view = value.to_cols_array_2d(),
            PROJECTION => self.frame.projection = value.to_cols_array_2d(),
            MODEL => self.model = *value,
            _ => tracing::debug!(uniform = name, "ignoring unknown mat4 uniform"),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        match name {
            COLOR => self.color = value,
            _ => tracing::debug!(uniform = name, "ignoring unknown vec3 uniform"),
        }
    }

    fn set_int(&mut self, name: &str, value: i32) {
        match name {
            DIRT_TEXTURE => self.frame.texture_units[0] = value,
            OVERLAY_TEXTURE => self.frame.texture_units[1] = value,
            _ => tracing::debug!(uniform = name, "ignoring unknown int uniform"),
        }
    }
}

impl CubeDrawer for CubeProgram {
    fn draw_cube(&mut self) {
        if !self.in_use {
            tracing::warn!("cube draw issued before the program was bound");
            return;
        }
        self.instances.push(InstanceRaw::new(self.model, self.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_capture_current_uniforms() {
        let mut program = CubeProgram::new();
        program.use_program();

        program.set_mat4(MODEL, &Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
        program.set_vec3(COLOR, Vec3::new(0.1, 0.2, 0.3));
        program.draw_cube();

        program.set_mat4(MODEL, &Mat4::from_translation(Vec3::new(4.0, 5.0, 6.0)));
        program.draw_cube();

        let draws = program.instances();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].translation(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(draws[0].color, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(draws[1].translation(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(draws[1].color, [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn frame_uniforms_are_named() {
        let mut program = CubeProgram::new();
        let view = Mat4::from_translation(Vec3::X);
        let proj = Mat4::perspective_rh(1.0, 1.0, 0.1, 100.0);
        program.set_mat4(VIEW, &view);
        program.set_mat4(PROJECTION, &proj);
        program.set_int(DIRT_TEXTURE, 1);
        program.set_int(OVERLAY_TEXTURE, 0);
        program.set_int("unused", 7);

        let frame = program.frame_uniform();
        assert_eq!(frame.view, view.to_cols_array_2d());
        assert_eq!(frame.projection, proj.to_cols_array_2d());
        assert_eq!(frame.texture_units, [1, 0, 0, 0]);
    }

    #[test]
    fn draw_without_bound_program_is_dropped() {
        let mut program = CubeProgram::new();
        program.draw_cube();
        assert!(program.instances().is_empty());

        program.use_program();
        program.draw_cube();
        program.clear_draws();
        assert!(program.instances().is_empty());
    }
}
