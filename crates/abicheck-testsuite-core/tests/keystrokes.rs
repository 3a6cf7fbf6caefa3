use abicheck_keyboard::{keystrokes_for_char, keystrokes_for_text, Operation, Scancode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use Operation::{KeyPressed, KeyReleased};

#[test]
fn plain_character_is_a_single_keystroke() {
    assert_eq!(
        keystrokes_for_char(u32::from('a')).as_slice(),
        [KeyPressed(Scancode::A), KeyReleased(Scancode::A)]
    );
}

#[test]
fn shifted_character_is_wrapped_in_left_shift() {
    assert_eq!(
        keystrokes_for_char(u32::from('A')).as_slice(),
        [
            KeyPressed(Scancode::LSHIFT),
            KeyPressed(Scancode::A),
            KeyReleased(Scancode::A),
            KeyReleased(Scancode::LSHIFT),
        ]
    );
}

#[test]
fn backtick_is_typed_with_left_shift() {
    assert_eq!(
        keystrokes_for_char(u32::from('`')).as_slice(),
        [
            KeyPressed(Scancode::LSHIFT),
            KeyPressed(Scancode::GRAVE),
            KeyReleased(Scancode::GRAVE),
            KeyReleased(Scancode::LSHIFT),
        ]
    );
}

#[test]
fn character_outside_ascii_uses_unknown_key() {
    assert_eq!(
        keystrokes_for_char(0x20AC).as_slice(),
        [KeyPressed(Scancode::UNKNOWN), KeyReleased(Scancode::UNKNOWN)]
    );
}

#[test]
fn control_character_without_key_uses_unknown_key() {
    assert_eq!(
        keystrokes_for_char(0x1B).as_slice(),
        [KeyPressed(Scancode::UNKNOWN), KeyReleased(Scancode::UNKNOWN)]
    );
}

#[test]
fn text_keystrokes_follow_character_order() {
    let operations: Vec<Operation> = keystrokes_for_text("Hi!\n").collect();

    assert_eq!(
        operations,
        [
            KeyPressed(Scancode::LSHIFT),
            KeyPressed(Scancode::H),
            KeyReleased(Scancode::H),
            KeyReleased(Scancode::LSHIFT),
            KeyPressed(Scancode::I),
            KeyReleased(Scancode::I),
            KeyPressed(Scancode::LSHIFT),
            KeyPressed(Scancode::DIGIT_1),
            KeyReleased(Scancode::DIGIT_1),
            KeyReleased(Scancode::LSHIFT),
            KeyPressed(Scancode::RETURN),
            KeyReleased(Scancode::RETURN),
        ]
    );
}

#[test]
fn operation_accessors() {
    assert!(KeyPressed(Scancode::A).is_press());
    assert!(!KeyReleased(Scancode::A).is_press());
    assert_eq!(KeyReleased(Scancode::Z).scancode(), Scancode::Z);
}

proptest! {
    #[test]
    fn every_pressed_key_is_released(text in any::<String>()) {
        let mut held = Vec::new();

        for operation in keystrokes_for_text(&text) {
            match operation {
                KeyPressed(scancode) => held.push(scancode),
                KeyReleased(scancode) => prop_assert_eq!(held.pop(), Some(scancode)),
            }
        }

        prop_assert!(held.is_empty());
    }
}
