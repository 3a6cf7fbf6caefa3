use core::ffi::{c_char, c_int, c_void};

use abicheck_layout::{abi_struct, abi_union};

use crate::types::{GamepadAxis, GamepadBindingType, GamepadButton, SensorType};

abi_struct! {
    #[abi(name = "SDL_GamepadBinding.input.axis")]
    #[derive(Debug, Default)]
    pub struct GamepadBindingInputAxis {
        pub axis: c_int,
        pub axis_min: c_int,
        pub axis_max: c_int,
    }
}

abi_struct! {
    #[abi(name = "SDL_GamepadBinding.input.hat")]
    #[derive(Debug, Default)]
    pub struct GamepadBindingInputHat {
        pub hat: c_int,
        pub hat_mask: c_int,
    }
}

abi_union! {
    #[abi(name = "SDL_GamepadBinding.input")]
    pub union GamepadBindingInput {
        pub button: c_int,
        pub axis: GamepadBindingInputAxis,
        pub hat: GamepadBindingInputHat,
    }
}

abi_struct! {
    #[abi(name = "SDL_GamepadBinding.output.axis")]
    #[derive(Debug, Default)]
    pub struct GamepadBindingOutputAxis {
        pub axis: GamepadAxis,
        pub axis_min: c_int,
        pub axis_max: c_int,
    }
}

abi_union! {
    #[abi(name = "SDL_GamepadBinding.output")]
    pub union GamepadBindingOutput {
        pub button: GamepadButton,
        pub axis: GamepadBindingOutputAxis,
    }
}

abi_struct! {
    #[abi(name = "SDL_GamepadBinding")]
    /// Mapping of one joystick input (button, axis range or hat direction) to one
    /// gamepad output. The active union members follow `input_type` and `output_type`.
    pub struct GamepadBinding {
        pub input_type: GamepadBindingType,
        pub input: GamepadBindingInput,
        pub output_type: GamepadBindingType,
        pub output: GamepadBindingOutput,
    }
}

abi_struct! {
    #[abi(name = "SDL_VirtualJoystickTouchpadDesc")]
    #[derive(Debug, Default)]
    pub struct VirtualJoystickTouchpadDesc {
        pub nfingers: u16,
        pub padding: [u16; 3],
    }
}

abi_struct! {
    #[abi(name = "SDL_VirtualJoystickSensorDesc")]
    #[derive(Debug, Default)]
    pub struct VirtualJoystickSensorDesc {
        pub r#type: SensorType,
        /// Reports per second, 0 when unknown.
        pub rate: f32,
    }
}

abi_struct! {
    #[abi(name = "SDL_VirtualJoystickDesc")]
    /// Description of a joystick driven by the application.
    ///
    /// Callbacks receive `userdata` as first argument and may be left unset.
    #[derive(Debug)]
    pub struct VirtualJoystickDesc {
        pub r#type: u16,
        pub padding: u16,
        pub vendor_id: u16,
        pub product_id: u16,
        pub naxes: u16,
        pub nbuttons: u16,
        pub nballs: u16,
        pub nhats: u16,
        pub ntouchpads: u16,
        pub nsensors: u16,
        pub padding2: [u16; 2],
        pub button_mask: u32,
        pub axis_mask: u32,
        pub name: *const c_char,
        pub touchpads: *const VirtualJoystickTouchpadDesc,
        pub sensors: *const VirtualJoystickSensorDesc,
        pub userdata: *mut c_void,
        pub update: Option<unsafe extern "C" fn(userdata: *mut c_void)>,
        pub set_player_index: Option<unsafe extern "C" fn(userdata: *mut c_void, player_index: c_int)>,
        pub rumble: Option<unsafe extern "C" fn(userdata: *mut c_void, low_frequency_rumble: u16, high_frequency_rumble: u16) -> bool>,
        pub rumble_triggers: Option<unsafe extern "C" fn(userdata: *mut c_void, left_rumble: u16, right_rumble: u16) -> bool>,
        pub set_led: Option<unsafe extern "C" fn(userdata: *mut c_void, red: u8, green: u8, blue: u8) -> bool>,
        pub send_effect: Option<unsafe extern "C" fn(userdata: *mut c_void, data: *const c_void, size: c_int) -> bool>,
        pub set_sensors_enabled: Option<unsafe extern "C" fn(userdata: *mut c_void, enabled: bool) -> bool>,
        pub cleanup: Option<unsafe extern "C" fn(userdata: *mut c_void)>,
    }
}
