//! Shared test utilities for glide
//!
//! Deterministic stand-ins for the scroll environment plus helpers for
//! building an `App` without a terminal.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::document::Document;
    use crate::scroll::{FrameHandle, FrameScheduler, InertialScroll, ScrollHost};
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
    };

    /// Markdown fixture with three sections spread over 120 lines
    pub fn test_markdown() -> String {
        let mut text = String::new();
        for (title, start) in [("Intro", 0), ("Projects", 40), ("Contact", 80)] {
            text.push_str(&format!("# {}\n", title));
            for i in (start + 1)..(start + 40) {
                text.push_str(&format!("line {}\n", i));
            }
        }
        text
    }

    /// Scheduler that records every call and never fires on its own
    #[derive(Debug)]
    pub struct FakeScheduler {
        pub supported: bool,
        pub next_id: u64,
        pub requested: Vec<FrameHandle>,
        pub cancelled: Vec<FrameHandle>,
    }

    impl FakeScheduler {
        pub fn new() -> Self {
            Self {
                supported: true,
                next_id: 0,
                requested: Vec::new(),
                cancelled: Vec::new(),
            }
        }

        pub fn unsupported() -> Self {
            Self {
                supported: false,
                ..Self::new()
            }
        }
    }

    impl FrameScheduler for FakeScheduler {
        fn is_supported(&self) -> bool {
            self.supported
        }

        fn request_frame(&mut self) -> FrameHandle {
            self.next_id += 1;
            let handle = FrameHandle(self.next_id);
            self.requested.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.cancelled.push(handle);
        }
    }

    /// Host with fixed dimensions that records every offset written
    #[derive(Debug)]
    pub struct FakeHost {
        pub document_height: f64,
        pub viewport_height: f64,
        pub rendered: f64,
        pub writes: Vec<f64>,
        pub wheel_captured: bool,
        pub native_smooth: bool,
        pub capture_toggles: usize,
    }

    impl FakeHost {
        /// Host whose maximum scroll offset is `max_scroll`
        pub fn with_max_scroll(max_scroll: f64) -> Self {
            Self {
                document_height: max_scroll + 500.0,
                viewport_height: 500.0,
                rendered: 0.0,
                writes: Vec::new(),
                wheel_captured: false,
                native_smooth: true,
                capture_toggles: 0,
            }
        }
    }

    impl ScrollHost for FakeHost {
        fn document_height(&self) -> f64 {
            self.document_height
        }

        fn viewport_height(&self) -> f64 {
            self.viewport_height
        }

        fn rendered_offset(&self) -> f64 {
            self.rendered
        }

        fn scroll_to(&mut self, offset: f64) {
            self.rendered = offset;
            self.writes.push(offset);
        }

        fn set_wheel_capture(&mut self, captured: bool) {
            self.wheel_captured = captured;
            self.capture_toggles += 1;
        }

        fn native_smooth(&self) -> bool {
            self.native_smooth
        }

        fn set_native_smooth(&mut self, enabled: bool) {
            self.native_smooth = enabled;
        }
    }

    pub type FakeController = InertialScroll<FakeScheduler, FakeHost>;

    pub fn fake_controller(max_scroll: f64) -> FakeController {
        InertialScroll::new(FakeScheduler::new(), FakeHost::with_max_scroll(max_scroll))
    }

    /// Fire the pending frame, returning false when nothing was pending
    pub fn run_frame(controller: &mut FakeController) -> bool {
        match controller.pending_frame() {
            Some(handle) => {
                controller.on_frame(handle);
                true
            }
            None => false,
        }
    }

    /// Fire frames until the animation settles; returns how many ran
    pub fn run_until_settled(controller: &mut FakeController, limit: usize) -> usize {
        let mut frames = 0;
        while frames < limit && run_frame(controller) {
            frames += 1;
        }
        frames
    }

    /// App over `text` with default config and a 80x24 terminal layout
    pub fn test_app(text: &str) -> App {
        let mut app = App::new(Document::from_text(text), &Config::default());
        app.set_viewport_height(20);
        app
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Fire every due frame until the app's scroll animation stops
    pub fn settle(app: &mut App) {
        for _ in 0..10_000 {
            match app.scroll.pending_frame() {
                Some(handle) => app.scroll.on_frame(handle),
                None => break,
            }
        }
    }
}
