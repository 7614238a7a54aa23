use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Instant;

use super::app_state::App;
use super::mouse_events;

impl App {
    /// Wait for input until the next frame is due, dispatch it, then run
    /// whatever frame came due
    pub fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self.poll_timeout(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }

        self.tick(Instant::now());
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            KeyCode::Char('d') if ctrl => self.scroll_lines(self.half_page()),
            KeyCode::Char('u') if ctrl => self.scroll_lines(-self.half_page()),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_lines(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_lines(-1),
            KeyCode::Char('J') => self.scroll_lines(10),
            KeyCode::Char('K') => self.scroll_lines(-10),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll_lines(self.half_page() * 2);
            }
            KeyCode::PageUp => self.scroll_lines(-self.half_page() * 2),
            KeyCode::Char('g') | KeyCode::Home => self.back_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.go_to_bottom(),
            KeyCode::Char('t') => {
                self.back_to_top();
                self.notification.show("Top");
            }

            KeyCode::Char('n') => self.next_section(),
            KeyCode::Char('p') => self.previous_section(),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                self.jump_to_section(index);
            }

            KeyCode::Char('s') => self.toggle_smooth_scroll(),
            _ => {}
        }
    }
}
