use std::collections::HashSet;

use abicheck_layout::{AbiStruct as _, Packing};
use abicheck_sdl::events::KeyboardEvent;
use expect_test::expect;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn names_are_unique() {
    let mut seen = HashSet::new();

    for entry in abicheck_sdl::catalog() {
        assert!(seen.insert(entry.name()), "{} is catalogued twice", entry.name());
    }
}

#[test]
fn catalog_starts_with_event_records() {
    let first: Vec<&str> = abicheck_sdl::catalog().take(5).map(|entry| entry.name()).collect();

    assert_eq!(
        first,
        [
            "SDL_CommonEvent",
            "SDL_DisplayEvent",
            "SDL_WindowEvent",
            "SDL_KeyboardDeviceEvent",
            "SDL_KeyboardEvent"
        ]
    );
}

#[rstest]
#[case("SDL_Point")]
#[case("sdl_point")]
#[case("SDL_POINT")]
fn find_ignores_case(#[case] name: &str) {
    let entry = abicheck_sdl::find(name).expect("catalogued");

    assert_eq!(entry.name(), "SDL_Point");
}

#[test]
fn find_unknown_struct() {
    assert!(abicheck_sdl::find("SDL_Nothing").is_none());
    assert!(abicheck_sdl::find("").is_none());
}

#[test]
fn nested_gamepad_binding_members_are_catalogued() {
    for name in [
        "SDL_GamepadBinding.input.axis",
        "SDL_GamepadBinding.input.hat",
        "SDL_GamepadBinding.input",
        "SDL_GamepadBinding.output.axis",
        "SDL_GamepadBinding.output",
        "SDL_GamepadBinding",
    ] {
        assert!(abicheck_sdl::find(name).is_some(), "{name}");
    }
}

#[rstest]
#[case("SDL_Point", 8)]
#[case("SDL_FRect", 16)]
#[case("SDL_Color", 4)]
#[case("SDL_FColor", 16)]
#[case("SDL_MessageBoxColor", 3)]
#[case("SDL_MessageBoxColorScheme", 15)]
#[case("SDL_DateTime", 36)]
#[case("SDL_GPUViewport", 24)]
#[case("SDL_GPUIndirectDrawCommand", 16)]
#[case("SDL_GPUIndexedIndirectDrawCommand", 20)]
#[case("SDL_GPUIndirectDispatchCommand", 12)]
#[case("SDL_GamepadBinding.input.axis", 12)]
#[case("SDL_CommonEvent", 16)]
#[case("SDL_KeyboardEvent", 40)]
#[case("SDL_Event", 128)]
fn pointer_free_sizes(#[case] name: &str, #[case] size: usize) {
    let entry = abicheck_sdl::find(name).expect("catalogued");

    assert_eq!(entry.layout(Packing::Default).size(), size);
}

#[test]
fn keyboard_event_offsets() {
    let layout = KeyboardEvent::layout(Packing::Default);

    expect![[r#"
        40 bytes
             0  type
             4  reserved
             8  timestamp
            16  window_id
            20  which
            24  scancode
            28  key
            32  mod
            34  raw
            36  state
            37  repeat
            38  padding
    "#]]
    .assert_eq(&(layout.to_string() + "\n"));
}

#[cfg(target_pointer_width = "64")]
mod pointer_width_64 {
    use abicheck_layout::Packing;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn catalog_is_conformant() {
        let report = abicheck_sdl::validate_catalog();

        assert_eq!(report.lines().collect::<Vec<_>>(), Vec::<String>::new());
        assert_eq!(report.structs_checked(), abicheck_sdl::catalog().len());
        assert!(report.fields_checked() > report.structs_checked());
        assert!(abicheck_sdl::check_struct_offsets());
    }

    #[test]
    fn every_packing_has_the_same_size() {
        for entry in abicheck_sdl::catalog() {
            let size = entry.layout(Packing::Default).size();

            for packing in Packing::FORCED {
                assert_eq!(entry.layout(packing).size(), size, "{} with {packing}", entry.name());
            }
        }
    }

    #[rstest]
    #[case("SDL_TextEditingEvent", 40)]
    #[case("SDL_TextEditingCandidatesEvent", 48)]
    #[case("SDL_MouseButtonEvent", 40)]
    #[case("SDL_GamepadSensorEvent", 48)]
    #[case("SDL_SensorEvent", 56)]
    #[case("SDL_DropEvent", 48)]
    #[case("SDL_UserEvent", 40)]
    #[case("SDL_HapticCustom", 56)]
    #[case("SDL_HapticEffect", 72)]
    #[case("SDL_GamepadBinding", 32)]
    #[case("SDL_GPUGraphicsPipelineCreateInfo", 184)]
    #[case("SDL_Surface", 48)]
    #[case("SDL_hid_device_info", 80)]
    #[case("SDL_MessageBoxData", 56)]
    #[case("SDL_Palette", 24)]
    #[case("SDL_PixelFormatDetails", 32)]
    #[case("SDL_PathInfo", 40)]
    #[case("SDL_VirtualJoystickDesc", 128)]
    fn pointer_sizes(#[case] name: &str, #[case] size: usize) {
        let entry = abicheck_sdl::find(name).expect("catalogued");

        assert_eq!(entry.layout(Packing::Default).size(), size);
    }
}
