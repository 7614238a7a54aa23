use crate::scroll::ScrollHost;

/// Lines moved per wheel notch when scrolling natively
pub const NATIVE_WHEEL_LINES: usize = 3;

/// The terminal viewport over a document, as seen by the scroll controller
///
/// `offset` is fractional while the controller eases; the renderer rounds it
/// to a whole line.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerViewport {
    pub content_lines: usize,
    pub viewport_height: u16,
    pub offset: f64,
    pub wheel_captured: bool,
    pub native_smooth: bool,
}

impl PagerViewport {
    pub fn new(content_lines: usize) -> Self {
        Self {
            content_lines,
            viewport_height: 0,
            offset: 0.0,
            wheel_captured: false,
            native_smooth: true,
        }
    }

    pub fn max_offset(&self) -> usize {
        self.content_lines
            .saturating_sub(self.viewport_height as usize)
    }

    /// First visible line
    pub fn top_line(&self) -> usize {
        if !self.offset.is_finite() || self.offset <= 0.0 {
            return 0;
        }
        (self.offset.round() as usize).min(self.max_offset())
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
    }

    // Native scrolling moves whole lines immediately

    pub fn scroll_down(&mut self, lines: usize) {
        let top = self.top_line().saturating_add(lines).min(self.max_offset());
        self.offset = top as f64;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.top_line().saturating_sub(lines) as f64;
    }

    pub fn jump_to(&mut self, line: usize) {
        self.offset = line.min(self.max_offset()) as f64;
    }

    pub fn half_page(&self) -> usize {
        (self.viewport_height / 2).max(1) as usize
    }
}

impl ScrollHost for PagerViewport {
    fn document_height(&self) -> f64 {
        self.content_lines as f64
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height as f64
    }

    fn rendered_offset(&self) -> f64 {
        self.top_line() as f64
    }

    fn scroll_to(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn set_wheel_capture(&mut self, captured: bool) {
        self.wheel_captured = captured;
    }

    fn native_smooth(&self) -> bool {
        self.native_smooth
    }

    fn set_native_smooth(&mut self, enabled: bool) {
        self.native_smooth = enabled;
    }
}
