// Scroll state for the gallery page and the logs panel
//
// Each scrolling region owns one ScrollState. Dimensions are refreshed every
// frame from what was actually laid out; input only moves the offset.

/// Scroll state for a single region
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line index at top of viewport)
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,

    /// Whether to keep the view pinned to the bottom as content grows.
    /// Scrolling up disables this; reaching the bottom re-enables it.
    pub auto_follow: bool,
}

impl ScrollState {
    /// Scroll state with auto-follow enabled (streaming content)
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Scroll state that starts at the top and stays put
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Scroll up by one line
    /// Disables auto-follow (user took control)
    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    /// Scroll down by one line
    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_scroll_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);

        scroll.update_dimensions(25, 5);
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn test_manual_scroll_is_clamped() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 0);

        for _ in 0..20 {
            scroll.scroll_down();
        }
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(7, 5);
        assert_eq!(scroll.offset(), 2);
    }

    #[test]
    fn test_paging() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(100, 10);

        scroll.page_down();
        assert_eq!(scroll.visible_range(), (10, 20));
        scroll.scroll_to_bottom();
        assert_eq!(scroll.visible_range(), (90, 100));
        scroll.page_up();
        assert_eq!(scroll.offset(), 80);
        scroll.scroll_to_top();
        assert_eq!(scroll.visible_range(), (0, 10));
    }
}
