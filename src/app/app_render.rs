use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::theme;
use crate::views::format_count;
use crate::widgets::scrollbar;

/// Most sections the dock can address with a digit key
const DOCK_SLOTS: usize = 9;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let (dock_area, content_area, status_area) = if self.dock.is_empty() {
            let layout =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
            (None, layout[0], layout[1])
        } else {
            let layout = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());
            (Some(layout[0]), layout[1], layout[2])
        };

        if let Some(dock_area) = dock_area {
            self.render_dock(frame, dock_area);
        }
        self.render_content(frame, content_area);
        self.render_status_line(frame, status_area);

        // Notification overlays everything else
        render_notification(frame, &mut self.notification);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.indicators().past_hero {
            theme::pager::BORDER_SCROLLED
        } else {
            theme::pager::BORDER
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(theme::pager::TITLE),
            ))
            .style(Style::default().bg(theme::pager::BACKGROUND));

        let inner = block.inner(area);
        self.set_viewport_height(inner.height);

        let top = self.top_line();
        let height = inner.height as usize;
        let text_style = Style::default().fg(theme::pager::TEXT);
        let sections = self.document.sections();

        let visible: Vec<Line> = self
            .document
            .lines()
            .iter()
            .enumerate()
            .skip(top)
            .take(height)
            .map(|(index, line)| {
                let style = if sections.iter().any(|s| s.line == index) {
                    theme::pager::HEADING
                } else {
                    text_style
                };
                Line::from(Span::styled(line.as_str(), style))
            })
            .collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
        scrollbar::render_vertical_scrollbar(
            frame,
            area,
            self.document.line_count(),
            height,
            top,
        );
    }

    fn render_dock(&self, frame: &mut Frame, area: Rect) {
        let active = self.current_section();
        let key_style = Style::default().fg(theme::dock::KEY);
        let item_style = Style::default().fg(theme::dock::ITEM);

        let mut spans = vec![Span::raw(" ")];
        for (index, section) in self.dock.sections().iter().take(DOCK_SLOTS).enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("{} ", index + 1), key_style));
            let style = if active == Some(index) {
                theme::dock::ACTIVE
            } else {
                item_style
            };
            spans.push(Span::styled(section.title.as_str(), style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(theme::status_line::KEY);
        let desc_style = Style::default().fg(theme::status_line::DESCRIPTION);
        let sep_style = Style::default().fg(theme::status_line::SEPARATOR);

        let hints = if self.dock.is_empty() {
            hints!["j/k" => "Scroll", "s" => "Smooth", "q" => "Quit"]
        } else {
            hints!["j/k" => "Scroll", "1-9" => "Section", "n/p" => "Next/Prev", "s" => "Smooth", "q" => "Quit"]
        };

        let mut spans = Vec::with_capacity(hints.len() * 4 + 8);
        spans.push(Span::raw(" "));
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2022} ", sep_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, desc_style));
        }

        if self.indicators().show_back_to_top {
            spans.push(Span::styled(" \u{2022} ", sep_style));
            spans.push(Span::styled(
                "t: top",
                Style::default().fg(theme::status_line::BACK_TO_TOP),
            ));
        }

        if let Some(views) = self.views {
            spans.push(Span::styled(" \u{2022} ", sep_style));
            spans.push(Span::styled(
                format!("views: {}", format_count(views.shown)),
                Style::default().fg(theme::status_line::VIEWS),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        let position = Paragraph::new(Line::from(Span::styled(
            format!("{} ", self.position_label()),
            Style::default().fg(theme::status_line::POSITION),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(position, area);
    }

    /// "L{line}/{total} {percent}%" for the top visible line
    pub fn position_label(&self) -> String {
        let total = self.document.line_count();
        let top = self.top_line();
        let max = self.viewport().max_offset();
        let percent = if max == 0 { 100 } else { top * 100 / max };
        let line = if total == 0 { 0 } else { top + 1 };
        format!("L{}/{} {}%", line, total, percent)
    }
}
