use egui::Context;
use glam::Vec3;

use crate::controller::{FrameLoopContext, PolygonMode};

/// Snapshot of what the debug window shows
#[derive(Debug, Clone, PartialEq)]
pub struct DebugStats {
    pub fps: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub solid_cubes: usize,
    pub polygon_mode: PolygonMode,
    pub cursor_captured: bool,
    pub wireframe_supported: bool,
}

impl DebugStats {
    pub fn from_context(ctx: &FrameLoopContext, wireframe_supported: bool) -> Self {
        Self {
            fps: ctx.timer.fps(),
            position: ctx.camera.position,
            yaw: ctx.camera.yaw,
            pitch: ctx.camera.pitch,
            fov: ctx.camera.fov,
            solid_cubes: ctx.last_draw_count,
            polygon_mode: ctx.polygon_mode(),
            cursor_captured: ctx.input.cursor_captured,
            wireframe_supported,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let p = self.position;
        vec![
            format!("FPS: {:.0}", self.fps),
            format!("Pos: {:.1}, {:.1}, {:.1}", p.x, p.y, p.z),
            format!("Yaw: {:.1} Pitch: {:.1} FOV: {:.0}", self.yaw, self.pitch, self.fov),
            format!("Cubes: {}", self.solid_cubes),
            if self.wireframe_supported {
                format!("Mode: {:?}", self.polygon_mode)
            } else {
                format!("Mode: {:?} (no wireframe)", self.polygon_mode)
            },
        ]
    }
}

/// Build the overlay and return egui output
pub fn build_ui(egui_ctx: &Context, raw_input: egui::RawInput, stats: &DebugStats) -> egui::FullOutput {
    egui_ctx.run(raw_input, |ctx| {
        draw_debug_window(ctx, stats);
    })
}

fn draw_debug_window(ctx: &Context, stats: &DebugStats) {
    egui::Window::new("Debug")
        .default_pos([8.0, 8.0])
        .default_size([160.0, 100.0])
        .show(ctx, |ui| {
            for line in stats.lines() {
                ui.label(egui::RichText::new(line).small());
            }
            ui.separator();
            ui.label(egui::RichText::new("Controls:").small());
            ui.label(egui::RichText::new("WASD - Move").small());
            ui.label(egui::RichText::new("Space / Shift - Up / Down").small());
            ui.label(egui::RichText::new("J / K - Wireframe / Fill").small());
            ui.label(egui::RichText::new("Q - Quit").small());
            if stats.cursor_captured {
                ui.label(egui::RichText::new("Esc - Release mouse").small());
            } else {
                ui.label(egui::RichText::new("Click - Capture mouse").small());
            }
        });
}
