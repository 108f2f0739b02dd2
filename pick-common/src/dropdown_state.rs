/// Transient open/highlight state of a selector.
///
/// `highlighted_index` is only meaningful while open. It is reset to 0 on
/// every transition from closed to open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub is_open: bool,
    pub highlighted_index: usize,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip open/closed. Opening resets the highlight.
    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.highlighted_index = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Move the highlight to `index`. Ignored while closed or when `index`
    /// is outside the option list.
    pub fn highlight(&mut self, index: usize, option_count: usize) {
        if self.is_open && index < option_count {
            self.highlighted_index = index;
        }
    }

    /// Whether the item at `index` should render highlighted
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.is_open && self.highlighted_index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DropdownState::new();
        assert!(!state.is_open);
        assert_eq!(state.highlighted_index, 0);
    }

    #[test]
    fn test_toggle_cycle() {
        let mut state = DropdownState::new();
        state.toggle();
        assert!(state.is_open);
        state.toggle();
        assert!(!state.is_open);
    }

    #[test]
    fn test_open_resets_highlight() {
        let mut state = DropdownState::new();
        state.open();
        state.highlight(3, 4);
        assert_eq!(state.highlighted_index, 3);

        state.close();
        assert_eq!(state.highlighted_index, 3);

        state.toggle();
        assert_eq!(state.highlighted_index, 0);
    }

    #[test]
    fn test_highlight_ignored_while_closed() {
        let mut state = DropdownState::new();
        state.highlight(2, 4);
        assert_eq!(state.highlighted_index, 0);
        assert!(!state.is_highlighted(0));
    }

    #[test]
    fn test_highlight_out_of_range_ignored() {
        let mut state = DropdownState::new();
        state.open();
        state.highlight(1, 4);
        state.highlight(4, 4);
        assert_eq!(state.highlighted_index, 1);
        assert!(state.is_highlighted(1));
    }
}
