//! Auto-scroll to the newest message.

/// Tracks the conversation length and requests a scroll to the tail
/// whenever it changes.
#[derive(Debug, Default)]
pub struct ScrollManager {
    last_len: usize,
    pending_scroll_to_bottom: bool,
}

impl ScrollManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the current message count. Returns true when it changed.
    pub fn observe(&mut self, len: usize) -> bool {
        if len == self.last_len {
            return false;
        }
        self.last_len = len;
        self.pending_scroll_to_bottom = true;
        true
    }

    /// Index of the entry to bring into view, if a scroll is pending.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        if !std::mem::take(&mut self.pending_scroll_to_bottom) {
            return None;
        }
        self.last_len.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_on_every_length_change() {
        let mut scroll = ScrollManager::new();
        assert!(!scroll.observe(0));
        assert_eq!(scroll.take_scroll_request(), None);

        assert!(scroll.observe(3));
        assert_eq!(scroll.take_scroll_request(), Some(2));
        assert_eq!(scroll.take_scroll_request(), None);

        assert!(!scroll.observe(3));
        assert_eq!(scroll.take_scroll_request(), None);

        assert!(scroll.observe(4));
        assert!(scroll.observe(5));
        assert_eq!(scroll.take_scroll_request(), Some(4));
    }

    #[test]
    fn test_shrinking_to_empty_has_no_target() {
        let mut scroll = ScrollManager::new();
        scroll.observe(2);
        scroll.take_scroll_request();
        assert!(scroll.observe(0));
        assert_eq!(scroll.take_scroll_request(), None);
    }
}
