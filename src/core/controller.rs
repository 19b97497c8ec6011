/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyR,
    KeyM,
    KeyE,
    ArrowUp,
    ArrowDown,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - button input state queries
///
/// `is_down` reports held state (drag gating); `was_pressed` reports a
/// press edge and fires once per frame per press (key bindings).
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Check if button was pressed since the last per-frame reset
    fn was_pressed(&self, button: Button) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::KeyR, Button::KeyR);
        assert_eq!(Button::MouseLeft, Button::MouseLeft);
        assert_ne!(Button::KeyR, Button::KeyM);
    }

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::KeyR);
        set.insert(Button::ArrowUp);
        set.insert(Button::KeyR); // Duplicate

        assert!(set.contains(&Button::KeyR));
        assert!(!set.contains(&Button::Escape));
        assert_eq!(set.len(), 2);
    }

    // Test mock controller implementation
    struct MockController {
        held: Vec<Button>,
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.held.contains(&button)
        }

        fn was_pressed(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            held: vec![Button::MouseLeft],
            pressed: vec![],
        };

        assert!(controller.is_down(Button::MouseLeft));
        assert!(!controller.is_down(Button::KeyR));
    }

    #[test]
    fn test_press_is_distinct_from_held() {
        let controller = MockController {
            held: vec![],
            pressed: vec![Button::KeyM],
        };

        assert!(controller.was_pressed(Button::KeyM));
        assert!(!controller.is_down(Button::KeyM));
    }
}
