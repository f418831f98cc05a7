//! Header presentation state driven by the page scroll offset.

/// Offset in pixels past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the header should render in its compact, opaque style.
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

/// Header bar and drawer state for the page shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl HeaderState {
    /// Recompute the scrolled flag. Returns whether it changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = is_scrolled(offset_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_on_scroll_reports_changes() {
        let mut state = HeaderState::default();
        assert!(!state.on_scroll(10.0));
        assert!(state.on_scroll(120.0));
        assert!(state.scrolled);
        assert!(!state.on_scroll(300.0));
        assert!(state.on_scroll(0.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn test_menu_toggle() {
        let mut state = HeaderState::default();
        state.open_menu();
        assert!(state.menu_open);
        state.close_menu();
        assert!(!state.menu_open);
    }
}
