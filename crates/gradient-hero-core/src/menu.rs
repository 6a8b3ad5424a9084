//! Mobile menu flag for the navbar.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.toggle_label(), "Open menu");
    }

    #[test]
    fn even_toggles_restore_visibility() {
        for start_open in [false, true] {
            let mut menu = MenuState { open: start_open };
            for _ in 0..4 {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), start_open);
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
