//! Mouse event dispatcher

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;
use super::mouse_scroll::{self, ScrollDirection};

/// Handle mouse events; only the wheel is used
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            mouse_scroll::handle_scroll(app, ScrollDirection::Down);
        }
        MouseEventKind::ScrollUp => {
            mouse_scroll::handle_scroll(app, ScrollDirection::Up);
        }
        _ => {}
    }
}
