// Scroll state shared by list panels
//
// Each panel owns a ScrollState and syncs it with its content size every
// frame. Logs auto-follow new content; the joke list starts at the top and
// only moves when the user scrolls or the selection leaves the viewport.

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Index of the first visible item
    offset: usize,

    /// Total number of items in content
    total: usize,

    /// Number of items visible in viewport
    viewport: usize,

    /// Keep the view pinned to the bottom as content grows.
    /// Scrolling up disables it; reaching the bottom re-enables it.
    pub auto_follow: bool,
}

impl ScrollState {
    /// Scroll state that follows new content
    pub fn following() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Scroll state that stays where the user left it
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::following()
        }
    }

    /// Update content and viewport dimensions (call each frame)
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.viewport.max(1));
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.viewport.max(1)).min(self.max_offset());
        if self.offset == self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    /// Jump to bottom (and enable auto-follow)
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    /// Move the viewport just enough to show `index`
    ///
    /// Leaving the bottom stops auto-follow.
    pub fn ensure_visible(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if self.viewport > 0 && index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset());
        if self.offset < self.max_offset() {
            self.auto_follow = false;
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible range as (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.viewport).min(self.total);
        (self.offset.min(end), end)
    }

    /// Content overflows the viewport
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::manual()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_following_pins_to_bottom() {
        let mut scroll = ScrollState::following();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_page_up_disables_follow() {
        let mut scroll = ScrollState::following();
        scroll.update_dimensions(20, 5);

        scroll.page_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 10);

        scroll.update_dimensions(25, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_reaching_bottom_resumes_follow() {
        let mut scroll = ScrollState::following();
        scroll.update_dimensions(12, 5);
        scroll.page_up();
        assert_eq!(scroll.offset(), 2);

        scroll.page_down();
        assert_eq!(scroll.offset(), 7);
        assert!(scroll.auto_follow);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);

        scroll.scroll_to_top();
        assert!(!scroll.auto_follow);
        scroll.scroll_to_bottom();
        assert!(scroll.auto_follow);
    }

    #[test]
    fn test_ensure_visible_above_bottom_stops_follow() {
        let mut scroll = ScrollState::following();
        scroll.update_dimensions(10, 3);

        scroll.ensure_visible(2);
        assert!(!scroll.auto_follow);

        scroll.update_dimensions(12, 3);
        assert_eq!(scroll.visible_range(), (2, 5));
    }

    #[test]
    fn test_manual_stays_at_top() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.visible_range(), (0, 5));
    }

    #[test]
    fn test_offset_clamped_when_content_shrinks() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 3);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 7);

        scroll.update_dimensions(2, 3);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.visible_range(), (0, 2));
    }

    #[test]
    fn test_ensure_visible() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 3);

        scroll.ensure_visible(5);
        assert_eq!(scroll.visible_range(), (3, 6));

        scroll.ensure_visible(1);
        assert_eq!(scroll.visible_range(), (1, 4));
    }
}
