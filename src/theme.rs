//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Document pane styles
pub mod pager {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255); // Electric cyan
    pub const BORDER_SCROLLED: Color = Color::Rgb(189, 147, 249);
    pub const TITLE: Color = Color::Rgb(236, 236, 244);
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const HEADING: Style = Style::new()
        .fg(Color::Rgb(255, 107, 157))
        .add_modifier(Modifier::BOLD);
    pub const BACKGROUND: Color = Color::Rgb(26, 26, 46);
}

/// Section dock (top bar) styles
pub mod dock {
    use super::*;

    pub const ITEM: Color = Color::Rgb(130, 133, 158);
    pub const ACTIVE: Style = Style::new()
        .fg(Color::Rgb(26, 26, 46))
        .bg(Color::Rgb(0, 217, 255))
        .add_modifier(Modifier::BOLD);
    pub const KEY: Color = Color::Rgb(255, 217, 61);
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };
}

/// Status line (bottom bar) styles
pub mod status_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
    pub const BACK_TO_TOP: Color = Color::Rgb(255, 217, 61);
    pub const VIEWS: Color = Color::Rgb(189, 147, 249);
    pub const POSITION: Color = Color::Rgb(0, 217, 255);
}

/// Scrollbar styles
pub mod scrollbar {
    use super::*;

    pub const DEFAULT: Color = Color::Rgb(0, 217, 255);
    pub const TRACK: Color = Color::Rgb(55, 55, 85);
}
