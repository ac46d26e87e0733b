//! Named overlay visibility with a scroll lock.
//!
//! Page scroll is suspended while any modal is open; clicking the overlay
//! background or any close affordance closes everything and restores scroll.

/// The set of open overlays on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Vec<String>,
}

impl ModalState {
    /// No modals open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the named overlay; opening twice is a no-op.
    pub fn show(&mut self, id: &str) {
        if !self.is_open(id) {
            self.open.push(id.to_string());
        }
    }

    /// Close the named overlay; absent ids are a no-op.
    pub fn hide(&mut self, id: &str) {
        self.open.retain(|open| open != id);
    }

    /// Close every overlay (overlay-background click, Escape).
    pub fn close_all(&mut self) {
        self.open.clear();
    }

    /// Whether the named overlay is open.
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open| open == id)
    }

    /// Page scroll is suspended while any overlay is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_hide_drives_scroll_lock() {
        let mut modals = ModalState::new();
        assert!(!modals.scroll_locked());

        modals.show("new-project");
        assert!(modals.is_open("new-project"));
        assert!(modals.scroll_locked());

        modals.hide("new-project");
        assert!(!modals.is_open("new-project"));
        assert!(!modals.scroll_locked());
    }

    #[test]
    fn test_scroll_stays_locked_until_last_modal_closes() {
        let mut modals = ModalState::new();
        modals.show("confirm-delete");
        modals.show("preview");
        modals.hide("preview");
        assert!(modals.scroll_locked());
        modals.hide("confirm-delete");
        assert!(!modals.scroll_locked());
    }

    #[test]
    fn test_close_all_restores_scroll() {
        let mut modals = ModalState::new();
        modals.show("a");
        modals.show("b");
        modals.close_all();
        assert!(!modals.scroll_locked());
        assert!(!modals.is_open("a"));
        assert!(!modals.is_open("b"));
    }

    #[test]
    fn test_show_twice_then_hide_once_closes() {
        let mut modals = ModalState::new();
        modals.show("a");
        modals.show("a");
        modals.hide("a");
        assert!(!modals.is_open("a"));
    }

    #[test]
    fn test_hide_absent_is_noop() {
        let mut modals = ModalState::new();
        modals.hide("ghost");
        assert!(!modals.scroll_locked());
    }
}
