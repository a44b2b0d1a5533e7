use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::slice;

/// Mouse button identifier for a traditional 3-button mouse.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub enum MouseButton {
    Left = 0,
    Middle,
    Right,
}

impl MouseButton {
    pub const MIN: MouseButton = MouseButton::Left;
    pub const MAX: MouseButton = MouseButton::Right;

    /// Look up a button by its ordinal, `None` if outside `[MIN, MAX]`.
    pub fn from_index(i: i32) -> Option<MouseButton> {
        if i < MouseButton::MIN as i32 || i > MouseButton::MAX as i32 {
            return None;
        }
        Some(BUTTONS[(i - MouseButton::MIN as i32) as usize])
    }

    /// Iterate through the buttons from `MIN` to `MAX`.
    pub fn iter() -> slice::Iter<'static, MouseButton> { BUTTONS.iter() }
}

static BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

bitflags! {
    /// A "modified" mouse button action, eg. ctrl-click with the left button.
    ///
    /// Flags combine with `|` for chorded presses. Combinations are not validated.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MouseButtonMod: u8 {
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
    }
}

impl From<MouseButton> for MouseButtonMod {
    fn from(button: MouseButton) -> MouseButtonMod {
        match button {
            MouseButton::Left => MouseButtonMod::LEFT,
            MouseButton::Middle => MouseButtonMod::MIDDLE,
            MouseButton::Right => MouseButtonMod::RIGHT,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_button_order() {
        assert!(MouseButton::Left < MouseButton::Middle);
        assert!(MouseButton::Middle < MouseButton::Right);
        for &b in MouseButton::iter() {
            assert!(MouseButton::MIN <= b && b <= MouseButton::MAX);
            assert_eq!(MouseButton::from_index(b as i32), Some(b));
        }
        assert_eq!(MouseButton::iter().count(), 3);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(MouseButton::from_index(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_index(2), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_index(-1), None);
        assert_eq!(MouseButton::from_index(3), None);
    }

    #[test]
    fn test_mods() {
        assert_eq!(MouseButtonMod::LEFT.bits(), 1);
        assert_eq!(MouseButtonMod::MIDDLE.bits(), 2);
        assert_eq!(MouseButtonMod::RIGHT.bits(), 4);

        let chord = MouseButtonMod::LEFT | MouseButtonMod::RIGHT;
        assert_eq!(chord.bits(), 5);
        assert_ne!(chord, MouseButtonMod::LEFT);
        assert_ne!(chord, MouseButtonMod::RIGHT);
        assert_ne!(chord, MouseButtonMod::MIDDLE);
        assert!(chord.contains(MouseButtonMod::LEFT));
        assert!(!chord.contains(MouseButtonMod::MIDDLE));

        assert_eq!(MouseButtonMod::from(MouseButton::Middle), MouseButtonMod::MIDDLE);
        assert_eq!(MouseButtonMod::default(), MouseButtonMod::empty());
    }
}
