use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::Button;
use crate::input::InputEvent;

/// Pixels per wheel notch, matching what browsers report for a line scroll.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Translate a winit window event into an input event, if it is one we use.
///
/// Winit reports button presses without a position, so `cursor` supplies the
/// last known one. Positions stay in physical pixels, the same space as the surface.
pub fn translate_event(event: &WindowEvent, cursor: Vec2) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(keycode) = event.physical_key else {
                return None;
            };
            let button = keycode_to_button(keycode)?;
            Some(InputEvent::Key {
                button,
                pressed: event.state == ElementState::Pressed,
            })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = mouse_button_to_button(*button)?;
            Some(match state {
                ElementState::Pressed => InputEvent::PointerDown { button, position: cursor },
                ElementState::Released => InputEvent::PointerUp { button },
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMove {
            position: Vec2::new(position.x as f32, position.y as f32),
        }),
        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeave),
        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
            delta_y: wheel_delta(*delta),
        }),
        _ => None,
    }
}

/// Like [`translate_event`], for events an overlay may have captured.
///
/// A captured press or move stays with the overlay. Releases still go
/// through so drags and held keys that began in the scene can end.
pub fn route_event(
    event: &WindowEvent,
    cursor: Vec2,
    overlay_consumed: bool,
) -> Option<InputEvent> {
    translate_event(event, cursor).filter(|input| !overlay_consumed || input.ends_session())
}

/// Wheel delta in browser convention: pixels, positive when scrolling toward the user.
pub fn wheel_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(position) => -(position.y as f32),
    }
}

/// Map Winit KeyCode to Button
pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
    match keycode {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Button::KeyW),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Button::KeyA),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Button::KeyS),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Button::KeyD),
        KeyCode::Escape => Some(Button::Escape),
        _ => None,
    }
}

/// Map Winit MouseButton to Button
pub fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
    match button {
        MouseButton::Left => Some(Button::MouseLeft),
        MouseButton::Right => Some(Button::MouseRight),
        _ => None,
    }
}
