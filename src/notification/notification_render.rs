//! Notification rendering
//!
//! Provides functions for rendering notification overlays in the UI.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

/// Render the notification overlay in the top-right corner of the frame
///
/// Call after the main UI so the notification draws on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    // Clear expired notifications first
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let message = &notif.message;
    let style = &notif.style;

    // Calculate notification dimensions
    // Width: message length + padding (2 chars each side) + borders (2)
    let content_width = message.chars().count() as u16;
    let notification_width = content_width + 4; // 2 padding + 2 borders
    let notification_height = 3; // 1 line content + 2 borders

    // Position in top-right corner with small margin
    let frame_area = frame.area();
    let margin = 2;
    let notification_x = frame_area
        .width
        .saturating_sub(notification_width + margin);
    let notification_y = margin;

    let notification_area = Rect {
        x: notification_x,
        y: notification_y,
        width: notification_width.min(frame_area.width.saturating_sub(margin * 2)),
        height: notification_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    // Don't render if area is too small
    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    // Clear background for floating effect
    popup::clear_area(frame, notification_area);

    // Create the notification widget
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    let paragraph = Paragraph::new(text).block(block);

    frame.render_widget(paragraph, notification_area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
