use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

use duducraft::config::{AppConfig, Cli};
use duducraft::controller::frame_loop::init_program;
use duducraft::controller::{CameraController, FrameLoopContext, InputEvent, InputProcessor};
use duducraft::error::AppError;
use duducraft::model::{Camera, Chunk};
use duducraft::ui::{self, DebugStats};
use duducraft::view::render::load_shader_source;
use duducraft::view::{ChannelLayout, CubeProgram, GpuContext, OverlayFrame, RenderState, Texture};
use duducraft::logging;

/// Scroll distance in pixels that counts as one wheel line
const PIXELS_PER_LINE: f32 = 20.0;

/// Everything that needs a live window
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    render: RenderState,
    program: CubeProgram,
    egui_state: egui_winit::State,
}

struct App {
    config: AppConfig,
    ctx: FrameLoopContext,
    egui_ctx: egui::Context,
    gfx: Option<Graphics>,
    error: Option<AppError>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let chunk = Chunk::build(config.height_map.as_ref());
        tracing::info!(solid = chunk.solid_count(), "chunk built");

        let controller = CameraController::new(InputProcessor::new(config.key_bindings.clone()));
        let ctx = FrameLoopContext::new(Camera::at(config.camera_start), chunk, controller);

        Self { config, ctx, egui_ctx: egui::Context::default(), gfx: None, error: None }
    }

    fn init_graphics(&self, event_loop: &ActiveEventLoop) -> Result<Graphics, AppError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let gpu = pollster::block_on(GpuContext::new(window.clone(), size.width, size.height))?;
        let device = gpu.device.as_ref();
        let queue = gpu.queue.as_ref();

        let dirt = Texture::load_or_placeholder(device, queue, &self.config.dirt_texture, ChannelLayout::Rgb);
        let overlay = Texture::load_or_placeholder(device, queue, &self.config.overlay_texture, ChannelLayout::Rgba);
        let shader_source = load_shader_source(self.config.shader.as_deref());
        let render = RenderState::new(&gpu, dirt, overlay, &shader_source);

        let mut program = CubeProgram::new();
        init_program(&mut program);

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        Ok(Graphics { window, gpu, render, program, egui_state })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        tracing::error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn set_cursor_captured(&mut self, captured: bool) {
        let Some(gfx) = &self.gfx else {
            return;
        };
        let captured = if captured {
            let grabbed = gfx
                .window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| gfx.window.set_cursor_grab(CursorGrabMode::Confined));
            match grabbed {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("could not grab cursor: {e}");
                    false
                }
            }
        } else {
            if let Err(e) = gfx.window.set_cursor_grab(CursorGrabMode::None) {
                tracing::debug!("could not release cursor: {e}");
            }
            false
        };
        gfx.window.set_cursor_visible(!captured);
        self.ctx.handle_event(&InputEvent::CursorCaptured(captured));
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let Some(gfx) = &mut self.gfx else {
            return;
        };
        if gfx.gpu.resize(size.width, size.height) {
            gfx.render.resize(&gfx.gpu.device, size.width, size.height);
            tracing::info!(width = size.width, height = size.height, aspect = gfx.gpu.aspect(), "window resized");
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.ctx.timer.tick();
        if !self.ctx.update(dt) {
            event_loop.exit();
            return;
        }

        let Some(gfx) = &mut self.gfx else {
            return;
        };

        gfx.program.clear_draws();
        self.ctx.render(&mut gfx.program, gfx.gpu.aspect());

        let overlay = self.config.show_overlay.then(|| {
            let raw_input = gfx.egui_state.take_egui_input(&gfx.window);
            let stats = DebugStats::from_context(&self.ctx, gfx.gpu.supports_wireframe());
            let output = ui::build_ui(&self.egui_ctx, raw_input, &stats);
            gfx.egui_state.handle_platform_output(&gfx.window, output.platform_output);
            OverlayFrame {
                primitives: self.egui_ctx.tessellate(output.shapes, output.pixels_per_point),
                textures_delta: output.textures_delta,
                pixels_per_point: output.pixels_per_point,
            }
        });

        match gfx.render.draw_frame(&gfx.gpu, &gfx.program, self.ctx.polygon_mode(), overlay) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::OutOfMemory) => self.fail(event_loop, wgpu::SurfaceError::OutOfMemory.into()),
            Err(e) => tracing::error!("surface error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(gfx) => {
                self.gfx = Some(gfx);
                self.set_cursor_captured(true);
                self.ctx.timer.reset();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.config.show_overlay {
            if let Some(gfx) = &mut self.gfx {
                if gfx.egui_state.on_window_event(&gfx.window, &event).consumed {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, .. },
                ..
            } => match state {
                ElementState::Pressed => {
                    self.ctx.handle_event(&InputEvent::KeyDown(code));
                    if self.ctx.camera_controller.processor().is_release_cursor(code) {
                        self.set_cursor_captured(false);
                    }
                }
                ElementState::Released => self.ctx.handle_event(&InputEvent::KeyUp(code)),
            },
            WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                if !self.ctx.input.cursor_captured {
                    self.set_cursor_captured(true);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.ctx.handle_event(&InputEvent::MouseWheel { delta_y });
            }
            WindowEvent::Focused(false) => self.ctx.handle_event(&InputEvent::FocusLost),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.ctx.handle_event(&InputEvent::MouseMove { dx: delta.0 as f32, dy: delta.1 as f32 });
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from(Cli::parse());
    logging::init(config.log_level);
    tracing::info!(title = %config.title, width = config.width, height = config.height, "duducraft starting");
    tracing::debug!(?config);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
