/// Window-system independent input handling
use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::model::Movement;

/// Input events the frame loop understands
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),

    /// Raw pointer motion in pixels
    MouseMove { dx: f32, dy: f32 },
    /// Vertical scroll in lines
    MouseWheel { delta_y: f32 },

    FocusLost,
    CursorCaptured(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    #[default]
    Fill,
    Line,
}

/// Per-frame input state, filled from events between frames
#[derive(Debug, Default)]
pub struct InputState {
    pub pressed_keys: HashSet<KeyCode>,
    pub look_delta: (f32, f32),
    pub scroll_delta: f32,
    pub cursor_captured: bool,
    pub polygon_mode: PolygonMode,
    pub quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(*key);
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(key);
            }
            InputEvent::MouseMove { dx, dy } => {
                if self.cursor_captured {
                    self.look_delta.0 += dx;
                    self.look_delta.1 += dy;
                }
            }
            InputEvent::MouseWheel { delta_y } => {
                self.scroll_delta += delta_y;
            }
            InputEvent::FocusLost => {
                self.clear_keys();
            }
            InputEvent::CursorCaptured(captured) => {
                self.cursor_captured = *captured;
            }
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    pub fn consume_look(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.look_delta)
    }

    pub fn consume_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }
}

/// Key mapping configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub quit: KeyCode,
    pub wireframe: KeyCode,
    pub fill: KeyCode,
    pub release_cursor: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            up: KeyCode::Space,
            down: KeyCode::ShiftLeft,
            quit: KeyCode::KeyQ,
            wireframe: KeyCode::KeyJ,
            fill: KeyCode::KeyK,
            release_cursor: KeyCode::Escape,
        }
    }
}

/// Maps held keys to camera movements and mode switches
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Every movement whose key is held, in a fixed order.
    pub fn movements(&self, input: &InputState) -> Vec<Movement> {
        let b = &self.bindings;
        [
            (b.forward, Movement::Forward),
            (b.backward, Movement::Backward),
            (b.left, Movement::Left),
            (b.right, Movement::Right),
            (b.up, Movement::Up),
            (b.down, Movement::Down),
        ]
        .into_iter()
        .filter(|(key, _)| input.is_key_pressed(*key))
        .map(|(_, movement)| movement)
        .collect()
    }

    pub fn wants_to_quit(&self, input: &InputState) -> bool {
        input.is_key_pressed(self.bindings.quit)
    }

    /// Fill wins while both mode keys are held.
    pub fn polygon_mode(&self, input: &InputState) -> Option<PolygonMode> {
        if input.is_key_pressed(self.bindings.fill) {
            Some(PolygonMode::Fill)
        } else if input.is_key_pressed(self.bindings.wireframe) {
            Some(PolygonMode::Line)
        } else {
            None
        }
    }

    pub fn is_release_cursor(&self, key: KeyCode) -> bool {
        key == self.bindings.release_cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_tracked_until_released() {
        let mut input = InputState::new();
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyW));
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyA));
        assert!(input.is_key_pressed(KeyCode::KeyW));

        input.process_event(&InputEvent::KeyUp(KeyCode::KeyW));
        assert!(!input.is_key_pressed(KeyCode::KeyW));
        assert!(input.is_key_pressed(KeyCode::KeyA));

        input.process_event(&InputEvent::FocusLost);
        assert!(input.pressed_keys.is_empty());
    }

    #[test]
    fn mouse_motion_only_counts_while_captured() {
        let mut input = InputState::new();
        input.process_event(&InputEvent::MouseMove { dx: 5.0, dy: 1.0 });
        assert_eq!(input.consume_look(), (0.0, 0.0));

        input.process_event(&InputEvent::CursorCaptured(true));
        input.process_event(&InputEvent::MouseMove { dx: 5.0, dy: 1.0 });
        input.process_event(&InputEvent::MouseMove { dx: -2.0, dy: 3.0 });
        assert_eq!(input.consume_look(), (3.0, 4.0));
        assert_eq!(input.consume_look(), (0.0, 0.0));
    }

    #[test]
    fn scroll_accumulates_between_frames() {
        let mut input = InputState::new();
        input.process_event(&InputEvent::MouseWheel { delta_y: 1.0 });
        input.process_event(&InputEvent::MouseWheel { delta_y: 2.0 });
        assert_eq!(input.consume_scroll(), 3.0);
        assert_eq!(input.consume_scroll(), 0.0);
    }

    #[test]
    fn held_keys_map_to_movements() {
        let processor = InputProcessor::default();
        let mut input = InputState::new();
        for key in [KeyCode::KeyD, KeyCode::KeyW, KeyCode::ShiftLeft] {
            input.process_event(&InputEvent::KeyDown(key));
        }
        assert_eq!(
            processor.movements(&input),
            vec![Movement::Forward, Movement::Right, Movement::Down]
        );
    }

    #[test]
    fn mode_keys() {
        let processor = InputProcessor::default();
        let mut input = InputState::new();
        assert_eq!(processor.polygon_mode(&input), None);
        assert!(!processor.wants_to_quit(&input));

        input.process_event(&InputEvent::KeyDown(KeyCode::KeyJ));
        assert_eq!(processor.polygon_mode(&input), Some(PolygonMode::Line));
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyK));
        assert_eq!(processor.polygon_mode(&input), Some(PolygonMode::Fill));

        input.process_event(&InputEvent::KeyDown(KeyCode::KeyQ));
        assert!(processor.wants_to_quit(&input));
        assert!(processor.is_release_cursor(KeyCode::Escape));
    }
}
