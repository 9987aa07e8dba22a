use winit::keyboard::KeyCode;

use crate::core::data::viewport::ViewCommand;

/// W/A/S/D pan, Q zooms in, E zooms out. Every other key is ignored.
#[must_use]
pub fn view_command_for_key(key: KeyCode) -> Option<ViewCommand> {
    match key {
        KeyCode::KeyW => Some(ViewCommand::PanUp),
        KeyCode::KeyS => Some(ViewCommand::PanDown),
        KeyCode::KeyA => Some(ViewCommand::PanLeft),
        KeyCode::KeyD => Some(ViewCommand::PanRight),
        KeyCode::KeyQ => Some(ViewCommand::ZoomIn),
        KeyCode::KeyE => Some(ViewCommand::ZoomOut),
        _ => None,
    }
}

#[must_use]
pub fn is_exit_key(key: KeyCode) -> bool {
    key == KeyCode::Escape
}
