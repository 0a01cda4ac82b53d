use crate::core::data::viewport::{MoveDirection, ZoomDirection};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Held state of the explorer's keys. Resolved to at most one move and one
/// zoom direction per tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardInputState {
    w_held: bool,
    a_held: bool,
    s_held: bool,
    d_held: bool,
    q_held: bool,
    e_held: bool,
}

impl KeyboardInputState {
    /// Returns `true` if the key is one of the explorer's keys.
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::KeyW => self.w_held = pressed,
            KeyCode::KeyA => self.a_held = pressed,
            KeyCode::KeyS => self.s_held = pressed,
            KeyCode::KeyD => self.d_held = pressed,
            KeyCode::KeyQ => self.q_held = pressed,
            KeyCode::KeyE => self.e_held = pressed,
            _ => return false,
        }

        true
    }

    /// With several movement keys held, D beats A beats S beats W.
    #[must_use]
    pub fn move_direction(&self) -> Option<MoveDirection> {
        if self.d_held {
            Some(MoveDirection::Right)
        } else if self.a_held {
            Some(MoveDirection::Left)
        } else if self.s_held {
            Some(MoveDirection::Down)
        } else if self.w_held {
            Some(MoveDirection::Up)
        } else {
            None
        }
    }

    /// E (in) beats Q (out).
    #[must_use]
    pub fn zoom_direction(&self) -> Option<ZoomDirection> {
        if self.e_held {
            Some(ZoomDirection::In)
        } else if self.q_held {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }

    #[must_use]
    pub fn any_held(&self) -> bool {
        self.move_direction().is_some() || self.zoom_direction().is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
