use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Blank an area so an overlay does not blend with what is underneath
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
