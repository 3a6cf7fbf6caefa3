use abicheck_keyboard::{Keymod, Scancode};
use rstest::rstest;

#[rstest]
#[case(Scancode::A, Some("A"))]
#[case(Scancode::Z, Some("Z"))]
#[case(Scancode::DIGIT_1, Some("1"))]
#[case(Scancode::DIGIT_0, Some("0"))]
#[case(Scancode::RETURN, Some("Return"))]
#[case(Scancode::NON_US_HASH, Some("#"))]
#[case(Scancode::GRAVE, Some("`"))]
#[case(Scancode::SLASH, Some("/"))]
#[case(Scancode::CAPS_LOCK, Some("CapsLock"))]
#[case(Scancode::F1, Some("F1"))]
#[case(Scancode::F12, Some("F12"))]
#[case(Scancode::PRINT_SCREEN, Some("PrintScreen"))]
#[case(Scancode::UP, Some("Up"))]
#[case(Scancode::LCTRL, Some("Left Ctrl"))]
#[case(Scancode::RGUI, Some("Right GUI"))]
#[case(Scancode::UNKNOWN, None)]
#[case(Scancode::from_u32(100), None)]
#[case(Scancode::from_u32(232), None)]
fn scancode_name(#[case] scancode: Scancode, #[case] expected: Option<&str>) {
    assert_eq!(scancode.name(), expected);
}

#[rstest]
#[case(Scancode::SPACE, "Space")]
#[case(Scancode::LSHIFT, "Left Shift")]
#[case(Scancode::UNKNOWN, "0x00")]
#[case(Scancode::from_u32(100), "0x64")]
fn scancode_display(#[case] scancode: Scancode, #[case] expected: &str) {
    assert_eq!(scancode.to_string(), expected);
}

#[test]
fn scancode_values_are_usb_usage_ids() {
    assert_eq!(Scancode::A.as_u32(), 4);
    assert_eq!(Scancode::DIGIT_1.as_u32(), 30);
    assert_eq!(Scancode::DIGIT_0.as_u32(), 39);
    assert_eq!(Scancode::SPACE.as_u32(), 44);
    assert_eq!(Scancode::SLASH.as_u32(), 56);
    assert_eq!(Scancode::LSHIFT.as_u32(), 225);
    assert_eq!(u32::from(Scancode::RGUI), 231);
    assert_eq!(Scancode::from(53), Scancode::GRAVE);
}

#[test]
fn modifier_keys() {
    assert!(Scancode::LCTRL.is_modifier());
    assert!(Scancode::RGUI.is_modifier());
    assert!(!Scancode::CAPS_LOCK.is_modifier());
    assert!(!Scancode::UNKNOWN.is_modifier());
}

#[test]
fn keymod_composites() {
    assert_eq!(Keymod::SHIFT, Keymod::LSHIFT | Keymod::RSHIFT);
    assert_eq!(Keymod::CTRL.bits(), 0x00C0);
    assert_eq!(Keymod::ALT.bits(), 0x0300);
    assert_eq!(Keymod::GUI.bits(), 0x0C00);
    assert!(Keymod::RSHIFT.has_shift());
    assert!(!(Keymod::LCTRL | Keymod::CAPS).has_shift());
    assert!(Keymod::NONE.is_empty());
}

#[rstest]
#[case(Keymod::NONE, "NONE")]
#[case(Keymod::LCTRL | Keymod::LALT, "LCTRL | LALT")]
#[case(Keymod::SCROLL, "SCROLL")]
fn keymod_display(#[case] modifiers: Keymod, #[case] expected: &str) {
    assert_eq!(modifiers.to_string(), expected);
}

#[test]
fn record_sizes() {
    assert_eq!(size_of::<Scancode>(), 4);
    assert_eq!(size_of::<Keymod>(), 2);
}
