use std::time::{Duration, Instant};

use crate::config::Config;
use crate::document::Document;
use crate::notification::NotificationState;
use crate::pager::{PagerViewport, ScrollIndicators, SectionDock};
use crate::scroll::{FrameClock, InertialScroll, ScrollConfig, WheelDisposition, clamp_offset};
use crate::views::CountUp;

/// Longest the event loop blocks when nothing is animating
pub const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub type PagerScroll = InertialScroll<FrameClock, PagerViewport>;

/// Animated view counter shown in the status line
#[derive(Debug, Clone, Copy)]
pub struct ViewCounterState {
    pub count: CountUp,
    pub started: Instant,
    /// Value currently on screen
    pub shown: u64,
}

impl ViewCounterState {
    pub fn new(total: u64, started: Instant) -> Self {
        Self {
            count: CountUp::new(total),
            started,
            shown: 0,
        }
    }

    /// Update the shown value, returning true when it changed
    pub fn advance(&mut self, now: Instant) -> bool {
        let value = self
            .count
            .value_at(now.saturating_duration_since(self.started));
        let changed = value != self.shown;
        self.shown = value;
        changed
    }

    pub fn is_counting(&self) -> bool {
        self.shown != self.count.total()
    }
}

pub struct App {
    pub title: String,
    pub document: Document,
    pub scroll: PagerScroll,
    pub dock: SectionDock,
    pub notification: NotificationState,
    pub views: Option<ViewCounterState>,
    pub wheel_delta: f64,
    pub should_quit: bool,
    /// Section picked through the dock; cleared by any other movement
    selected_section: Option<usize>,
    scroll_config: ScrollConfig,
    dirty: bool,
}

impl App {
    pub fn new(document: Document, config: &Config) -> Self {
        let viewport = PagerViewport::new(document.line_count());
        let clock = FrameClock::new(config.pager.frame_interval());
        let dock = SectionDock::new(document.sections().to_vec(), config.pager.section_offset);

        let mut app = Self {
            title: String::from("stdin"),
            document,
            scroll: InertialScroll::new(clock, viewport),
            dock,
            notification: NotificationState::new(),
            views: None,
            wheel_delta: config.pager.wheel_delta(),
            should_quit: false,
            selected_section: None,
            scroll_config: config.scroll.scroll_config(),
            dirty: true,
        };

        if config.scroll.enabled {
            app.enable_smooth_scroll();
        }

        app
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Start the view counter animation at `views`
    pub fn with_view_count(mut self, views: u64) -> Self {
        self.views = Some(ViewCounterState::new(views, Instant::now()));
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn smooth_scrolling(&self) -> bool {
        self.scroll.is_active()
    }

    fn enable_smooth_scroll(&mut self) {
        if let Err(e) = self.scroll.activate(self.scroll_config) {
            self.notification.show(&e.to_string());
        }
    }

    /// Switch between eased and native scrolling
    pub fn toggle_smooth_scroll(&mut self) {
        if self.scroll.is_active() {
            self.scroll.deactivate();
            self.notification.show("Smooth scrolling off");
        } else {
            self.enable_smooth_scroll();
            if self.scroll.is_active() {
                self.notification.show("Smooth scrolling on");
            }
        }
        self.mark_dirty();
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.scroll.host_mut().set_viewport_height(height);
    }

    pub fn viewport(&self) -> &PagerViewport {
        self.scroll.host()
    }

    pub fn top_line(&self) -> usize {
        self.viewport().top_line()
    }

    pub fn indicators(&self) -> ScrollIndicators {
        let viewport = self.viewport();
        let offset = clamp_offset(viewport.offset, viewport.max_offset() as f64);
        ScrollIndicators::from_offset(offset, viewport.viewport_height as f64)
    }

    /// The section last jumped to, else the one the view is in
    ///
    /// Headings near the end of the document can sit below the furthest
    /// reachable offset, so a jump target alone does not identify them.
    pub fn current_section(&self) -> Option<usize> {
        self.selected_section
            .or_else(|| self.dock.current_index(self.top_line()))
    }

    /// Forget the dock selection after a movement not made through the dock
    pub fn deselect_section(&mut self) {
        self.selected_section = None;
    }

    /// Scroll by whole lines, negative is up
    pub fn scroll_lines(&mut self, lines: isize) {
        self.deselect_section();
        if self.scroll.scroll_by(lines as f64) == WheelDisposition::Passthrough {
            let viewport = self.scroll.host_mut();
            if lines < 0 {
                viewport.scroll_up(lines.unsigned_abs());
            } else {
                viewport.scroll_down(lines.unsigned_abs());
            }
        }
        self.mark_dirty();
    }

    pub fn half_page(&self) -> isize {
        self.viewport().half_page() as isize
    }

    pub fn go_to_line(&mut self, line: usize) {
        self.deselect_section();
        self.ease_to_line(line);
    }

    fn ease_to_line(&mut self, line: usize) {
        if self.scroll.scroll_to(line as f64) == WheelDisposition::Passthrough {
            self.scroll.host_mut().jump_to(line);
        }
        self.mark_dirty();
    }

    pub fn go_to_bottom(&mut self) {
        let bottom = self.viewport().max_offset();
        self.go_to_line(bottom);
    }

    pub fn back_to_top(&mut self) {
        self.go_to_line(0);
    }

    /// Jump to section `index`, warning when there is no such section
    pub fn jump_to_section(&mut self, index: usize) -> bool {
        match self.dock.jump_target(index) {
            Some(line) => {
                self.ease_to_line(line);
                self.selected_section = Some(index);
                true
            }
            None => {
                #[cfg(debug_assertions)]
                log::warn!("Section {} not found", index + 1);
                self.notification
                    .show_warning(&format!("Section {} not found", index + 1));
                self.mark_dirty();
                false
            }
        }
    }

    pub fn next_section(&mut self) {
        if let Some(index) = self.dock.next_index(self.current_section()) {
            self.jump_to_section(index);
        }
    }

    pub fn previous_section(&mut self) {
        let previous = match self.selected_section {
            // Already at the selected heading
            Some(index) => index.checked_sub(1),
            None => self.dock.previous_index(self.top_line()),
        };
        match previous {
            Some(index) => {
                self.jump_to_section(index);
            }
            None => self.back_to_top(),
        }
    }

    /// Advance time-driven state: due scroll frames, the view counter and
    /// notification expiry
    pub fn tick(&mut self, now: Instant) {
        if let Some(handle) = self.scroll.scheduler_mut().due(now) {
            self.scroll.on_frame(handle);
            self.mark_dirty();
        }

        if let Some(views) = self.views.as_mut()
            && views.advance(now)
        {
            self.mark_dirty();
        }

        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }
    }

    /// How long the event loop may wait for input before `tick` has work
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = self.scroll.scheduler().poll_timeout(now, EVENT_POLL_TIMEOUT);
        if self.views.is_some_and(|views| views.is_counting()) {
            timeout = timeout.min(CountUp::tick());
        }
        timeout
    }
}
