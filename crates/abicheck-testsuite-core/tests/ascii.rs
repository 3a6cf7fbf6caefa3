use abicheck_keyboard::{ascii_for_key, AsciiKeyInfo, Keymod, Scancode, ASCII_KEY_INFO_TABLE};
use expect_test::expect;
use proptest::prelude::*;
use rstest::rstest;

fn info(ascii: u8) -> AsciiKeyInfo {
    ASCII_KEY_INFO_TABLE[usize::from(ascii)]
}

#[test]
fn lookup_is_deterministic() {
    for ascii in 0..=127u8 {
        assert_eq!(info(ascii), info(ascii));
        assert_eq!(AsciiKeyInfo::for_ascii(ascii), Some(info(ascii)));
    }
}

#[test]
fn lower_case_letters_share_the_upper_case_key() {
    for (lower, upper) in (b'a'..=b'z').zip(b'A'..=b'Z') {
        let lower = info(lower);
        let upper = info(upper);

        assert_eq!(lower.modifiers, Keymod::NONE);
        assert_eq!(upper.modifiers, Keymod::SHIFT);
        assert_eq!(lower.code, upper.code);
    }
}

#[test]
fn digits_have_no_modifier() {
    let expected = [
        Scancode::DIGIT_0,
        Scancode::DIGIT_1,
        Scancode::DIGIT_2,
        Scancode::DIGIT_3,
        Scancode::DIGIT_4,
        Scancode::DIGIT_5,
        Scancode::DIGIT_6,
        Scancode::DIGIT_7,
        Scancode::DIGIT_8,
        Scancode::DIGIT_9,
    ];

    for (digit, code) in (b'0'..=b'9').zip(expected) {
        assert_eq!(info(digit), AsciiKeyInfo::new(code, Keymod::NONE));
    }
}

#[rstest]
#[case(b'A', Scancode::A, Keymod::SHIFT)]
#[case(b'a', Scancode::A, Keymod::NONE)]
#[case(b' ', Scancode::SPACE, Keymod::NONE)]
#[case(b'\n', Scancode::RETURN, Keymod::NONE)]
#[case(b'\r', Scancode::RETURN, Keymod::NONE)]
#[case(8, Scancode::BACKSPACE, Keymod::NONE)]
#[case(127, Scancode::BACKSPACE, Keymod::SHIFT)]
#[case(b'`', Scancode::GRAVE, Keymod::SHIFT)]
#[case(b'~', Scancode::GRAVE, Keymod::SHIFT)]
#[case(b'@', Scancode::DIGIT_2, Keymod::SHIFT)]
#[case(b'^', Scancode::DIGIT_6, Keymod::SHIFT)]
#[case(b'_', Scancode::MINUS, Keymod::SHIFT)]
#[case(b'?', Scancode::SLASH, Keymod::SHIFT)]
#[case(b'|', Scancode::BACKSLASH, Keymod::SHIFT)]
#[case(b'{', Scancode::LEFT_BRACKET, Keymod::SHIFT)]
#[case(b']', Scancode::RIGHT_BRACKET, Keymod::NONE)]
#[case(b':', Scancode::SEMICOLON, Keymod::SHIFT)]
#[case(b'<', Scancode::COMMA, Keymod::SHIFT)]
fn key_info_for_ascii(#[case] ascii: u8, #[case] code: Scancode, #[case] modifiers: Keymod) {
    assert_eq!(info(ascii), AsciiKeyInfo::new(code, modifiers));
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(9)]
#[case(11)]
#[case(12)]
#[case(27)]
#[case(31)]
fn control_codes_have_no_key(#[case] ascii: u8) {
    assert_eq!(info(ascii), AsciiKeyInfo::UNKNOWN);
    assert!(info(ascii).code.is_unknown());
}

#[test]
fn checked_lookup_rejects_non_ascii() {
    assert_eq!(AsciiKeyInfo::for_ascii(128), None);
    assert_eq!(AsciiKeyInfo::for_ascii(255), None);
    assert_eq!(AsciiKeyInfo::for_char('\u{e9}'), None);
    assert_eq!(AsciiKeyInfo::for_char('a'), Some(info(b'a')));
}

#[test]
fn punctuation_row() {
    let rendered: String = (b'!'..=b'/')
        .map(|ascii| {
            let info = info(ascii);
            format!("{} {} {}\n", char::from(ascii), info.code, info.modifiers)
        })
        .collect();

    expect![[r#"
        ! 1 LSHIFT | RSHIFT
        " ' LSHIFT | RSHIFT
        # 3 LSHIFT | RSHIFT
        $ 4 LSHIFT | RSHIFT
        % 5 LSHIFT | RSHIFT
        & 7 LSHIFT | RSHIFT
        ' ' NONE
        ( 9 LSHIFT | RSHIFT
        ) 0 LSHIFT | RSHIFT
        * 8 LSHIFT | RSHIFT
        + = LSHIFT | RSHIFT
        , , NONE
        - - NONE
        . . NONE
        / / NONE
    "#]]
    .assert_eq(&rendered);
}

#[rstest]
#[case(Scancode::RETURN, Keymod::NONE, Some(b'\n'))]
#[case(Scancode::BACKSPACE, Keymod::NONE, Some(8))]
#[case(Scancode::BACKSPACE, Keymod::SHIFT, Some(127))]
#[case(Scancode::GRAVE, Keymod::SHIFT, Some(b'`'))]
#[case(Scancode::GRAVE, Keymod::NONE, None)]
#[case(Scancode::A, Keymod::CTRL, None)]
#[case(Scancode::F1, Keymod::NONE, None)]
#[case(Scancode::UNKNOWN, Keymod::NONE, None)]
fn reverse_lookup(#[case] code: Scancode, #[case] modifiers: Keymod, #[case] expected: Option<u8>) {
    assert_eq!(ascii_for_key(code, modifiers), expected);
}

proptest! {
    #[test]
    fn reverse_lookup_finds_lowest_code_with_same_key(ascii in 32u8..127) {
        let wanted = info(ascii);
        let found = ascii_for_key(wanted.code, wanted.modifiers);

        prop_assert_eq!(found.map(info), Some(wanted));
        prop_assert!(found <= Some(ascii));
    }

    #[test]
    fn shift_is_the_only_modifier_used(ascii in 0u8..128) {
        let info = info(ascii);
        prop_assert!(info.modifiers == Keymod::NONE || info.modifiers == Keymod::SHIFT);
        prop_assert_eq!(info.needs_shift(), info.modifiers == Keymod::SHIFT);
    }
}
