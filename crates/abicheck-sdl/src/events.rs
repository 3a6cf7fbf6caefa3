//! Event records, all sharing the 16-byte common header, and the [`Event`] union.

use core::ffi::{c_char, c_int, c_void};

use abicheck_keyboard::{Keymod, Scancode};
use abicheck_layout::{abi_struct, abi_union};

use crate::types::{
    AudioDeviceId, CameraId, DisplayId, EventType, FingerId, JoystickId, KeyboardId, Keycode, MouseButtonFlags,
    MouseId, MouseWheelDirection, PenAxis, PenId, PenInputFlags, PointerPadding32, PowerState, SensorId, TouchId,
    WindowId,
};

abi_struct! {
    #[abi(name = "SDL_CommonEvent")]
    #[derive(Debug, Default)]
    pub struct CommonEvent {
        pub r#type: u32,
        pub reserved: u32,
        /// In nanoseconds, populated from the performance counter.
        pub timestamp: u64,
    }
}

abi_struct! {
    #[abi(name = "SDL_DisplayEvent")]
    #[derive(Debug, Default)]
    pub struct DisplayEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub display_id: DisplayId,
        pub data1: i32,
        pub data2: i32,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_WindowEvent")]
    #[derive(Debug, Default)]
    pub struct WindowEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub data1: i32,
        pub data2: i32,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_KeyboardDeviceEvent")]
    #[derive(Debug, Default)]
    pub struct KeyboardDeviceEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: KeyboardId,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_KeyboardEvent")]
    /// Key pressed or released.
    ///
    /// `scancode` identifies the physical key, `key` the virtual key it produces in the
    /// current layout.
    #[derive(Debug)]
    pub struct KeyboardEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: KeyboardId,
        pub scancode: Scancode,
        pub key: Keycode,
        pub r#mod: Keymod,
        /// Platform dependent scancode.
        pub raw: u16,
        pub state: u8,
        pub repeat: u8,
        pub padding: u16,
    }
}

abi_struct! {
    #[abi(name = "SDL_TextEditingEvent")]
    /// Text composition in progress. `text` is owned by the event queue.
    #[derive(Debug)]
    pub struct TextEditingEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub padding: PointerPadding32,
        pub text: *const c_char,
        pub start: i32,
        pub length: i32,
    }
}

abi_struct! {
    #[abi(name = "SDL_TextEditingCandidatesEvent")]
    #[derive(Debug)]
    pub struct TextEditingCandidatesEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub padding: PointerPadding32,
        pub candidates: *const *const c_char,
        pub num_candidates: i32,
        pub selected_candidate: i32,
        pub horizontal: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub padding4: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_TextInputEvent")]
    #[derive(Debug)]
    pub struct TextInputEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub padding: PointerPadding32,
        pub text: *const c_char,
    }
}

abi_struct! {
    #[abi(name = "SDL_MouseDeviceEvent")]
    #[derive(Debug, Default)]
    pub struct MouseDeviceEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: MouseId,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_MouseMotionEvent")]
    #[derive(Debug, Default)]
    pub struct MouseMotionEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: MouseId,
        pub state: MouseButtonFlags,
        pub x: f32,
        pub y: f32,
        pub xrel: f32,
        pub yrel: f32,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_MouseButtonEvent")]
    #[derive(Debug, Default)]
    pub struct MouseButtonEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: MouseId,
        pub button: u8,
        pub state: u8,
        /// 1 for single-click, 2 for double-click, etc.
        pub clicks: u8,
        pub padding: u8,
        pub x: f32,
        pub y: f32,
        pub padding2: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_MouseWheelEvent")]
    #[derive(Debug, Default)]
    pub struct MouseWheelEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: MouseId,
        pub x: f32,
        pub y: f32,
        pub direction: MouseWheelDirection,
        pub mouse_x: f32,
        pub mouse_y: f32,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_JoyAxisEvent")]
    #[derive(Debug, Default)]
    pub struct JoyAxisEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub axis: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub value: i16,
        pub padding4: u16,
        pub padding5: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_JoyBallEvent")]
    #[derive(Debug, Default)]
    pub struct JoyBallEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub ball: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub xrel: i16,
        pub yrel: i16,
        pub padding4: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_JoyHatEvent")]
    #[derive(Debug, Default)]
    pub struct JoyHatEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub hat: u8,
        /// Zero means the hat is centered.
        pub value: u8,
        pub padding1: u8,
        pub padding2: u8,
    }
}

abi_struct! {
    #[abi(name = "SDL_JoyButtonEvent")]
    #[derive(Debug, Default)]
    pub struct JoyButtonEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub button: u8,
        pub state: u8,
        pub padding1: u8,
        pub padding2: u8,
    }
}

abi_struct! {
    #[abi(name = "SDL_JoyDeviceEvent")]
    #[derive(Debug, Default)]
    pub struct JoyDeviceEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_JoyBatteryEvent")]
    #[derive(Debug, Default)]
    pub struct JoyBatteryEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub state: PowerState,
        pub percent: c_int,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GamepadAxisEvent")]
    #[derive(Debug, Default)]
    pub struct GamepadAxisEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub axis: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub value: i16,
        pub padding4: u16,
        pub padding5: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GamepadButtonEvent")]
    #[derive(Debug, Default)]
    pub struct GamepadButtonEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub button: u8,
        pub state: u8,
        pub padding1: u8,
        pub padding2: u8,
    }
}

abi_struct! {
    #[abi(name = "SDL_GamepadDeviceEvent")]
    #[derive(Debug, Default)]
    pub struct GamepadDeviceEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GamepadTouchpadEvent")]
    #[derive(Debug, Default)]
    pub struct GamepadTouchpadEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub touchpad: i32,
        pub finger: i32,
        /// Normalized, 0 at the left and 1 at the right.
        pub x: f32,
        /// Normalized, 0 at the top and 1 at the bottom.
        pub y: f32,
        pub pressure: f32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GamepadSensorEvent")]
    #[derive(Debug, Default)]
    pub struct GamepadSensorEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: JoystickId,
        pub sensor: i32,
        pub data: [f32; 3],
        pub padding: u32,
        pub sensor_timestamp: u64,
    }
}

abi_struct! {
    #[abi(name = "SDL_AudioDeviceEvent")]
    #[derive(Debug, Default)]
    pub struct AudioDeviceEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: AudioDeviceId,
        pub recording: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
    }
}

abi_struct! {
    #[abi(name = "SDL_CameraDeviceEvent")]
    #[derive(Debug, Default)]
    pub struct CameraDeviceEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: CameraId,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_TouchFingerEvent")]
    #[derive(Debug, Default)]
    pub struct TouchFingerEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub touch_id: TouchId,
        pub finger_id: FingerId,
        pub x: f32,
        pub y: f32,
        pub dx: f32,
        pub dy: f32,
        pub pressure: f32,
        pub window_id: WindowId,
    }
}

abi_struct! {
    #[abi(name = "SDL_PenProximityEvent")]
    #[derive(Debug, Default)]
    pub struct PenProximityEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: PenId,
    }
}

abi_struct! {
    #[abi(name = "SDL_PenMotionEvent")]
    #[derive(Debug, Default)]
    pub struct PenMotionEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: PenId,
        pub pen_state: PenInputFlags,
        pub x: f32,
        pub y: f32,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_PenTouchEvent")]
    #[derive(Debug, Default)]
    pub struct PenTouchEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: PenId,
        pub pen_state: PenInputFlags,
        pub x: f32,
        pub y: f32,
        pub eraser: u8,
        pub state: u8,
        pub padding: u16,
    }
}

abi_struct! {
    #[abi(name = "SDL_PenButtonEvent")]
    #[derive(Debug, Default)]
    pub struct PenButtonEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: PenId,
        pub pen_state: PenInputFlags,
        pub x: f32,
        pub y: f32,
        pub button: u8,
        pub state: u8,
        pub padding: u16,
    }
}

abi_struct! {
    #[abi(name = "SDL_PenAxisEvent")]
    #[derive(Debug, Default)]
    pub struct PenAxisEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub which: PenId,
        pub pen_state: PenInputFlags,
        pub x: f32,
        pub y: f32,
        pub axis: PenAxis,
        pub value: f32,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_RenderEvent")]
    /// Renderer targets were reset or the device was lost.
    #[derive(Debug, Default)]
    pub struct RenderEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub padding: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_DropEvent")]
    /// File, text or drag-and-drop notification. `source` and `data` are owned by the
    /// event queue.
    #[derive(Debug)]
    pub struct DropEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub x: f32,
        pub y: f32,
        pub padding: PointerPadding32,
        pub source: *const c_char,
        pub data: *const c_char,
    }
}

abi_struct! {
    #[abi(name = "SDL_ClipboardEvent")]
    #[derive(Debug, Default)]
    pub struct ClipboardEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
    }
}

abi_struct! {
    #[abi(name = "SDL_SensorEvent")]
    #[derive(Debug, Default)]
    pub struct SensorEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
        pub which: SensorId,
        pub data: [f32; 6],
        pub padding: u32,
        pub sensor_timestamp: u64,
    }
}

abi_struct! {
    #[abi(name = "SDL_QuitEvent")]
    #[derive(Debug, Default)]
    pub struct QuitEvent {
        pub r#type: EventType,
        pub reserved: u32,
        pub timestamp: u64,
    }
}

abi_struct! {
    #[abi(name = "SDL_UserEvent")]
    /// Application defined event, registered at run time.
    #[derive(Debug)]
    pub struct UserEvent {
        pub r#type: u32,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id: WindowId,
        pub code: i32,
        pub data1: *mut c_void,
        pub data2: *mut c_void,
    }
}

abi_union! {
    #[abi(name = "SDL_Event")]
    /// Every event record overlaid on the same storage.
    ///
    /// Sized to 128 bytes so compilers agreeing on member layout also agree on the union.
    pub union Event {
        pub r#type: u32,
        pub common: CommonEvent,
        pub display: DisplayEvent,
        pub window: WindowEvent,
        pub kdevice: KeyboardDeviceEvent,
        pub key: KeyboardEvent,
        pub edit: TextEditingEvent,
        pub edit_candidates: TextEditingCandidatesEvent,
        pub text: TextInputEvent,
        pub mdevice: MouseDeviceEvent,
        pub motion: MouseMotionEvent,
        pub button: MouseButtonEvent,
        pub wheel: MouseWheelEvent,
        pub jdevice: JoyDeviceEvent,
        pub jaxis: JoyAxisEvent,
        pub jball: JoyBallEvent,
        pub jhat: JoyHatEvent,
        pub jbutton: JoyButtonEvent,
        pub jbattery: JoyBatteryEvent,
        pub gdevice: GamepadDeviceEvent,
        pub gaxis: GamepadAxisEvent,
        pub gbutton: GamepadButtonEvent,
        pub gtouchpad: GamepadTouchpadEvent,
        pub gsensor: GamepadSensorEvent,
        pub adevice: AudioDeviceEvent,
        pub cdevice: CameraDeviceEvent,
        pub sensor: SensorEvent,
        pub quit: QuitEvent,
        pub user: UserEvent,
        pub tfinger: TouchFingerEvent,
        pub pproximity: PenProximityEvent,
        pub ptouch: PenTouchEvent,
        pub pmotion: PenMotionEvent,
        pub pbutton: PenButtonEvent,
        pub paxis: PenAxisEvent,
        pub render: RenderEvent,
        pub drop: DropEvent,
        pub clipboard: ClipboardEvent,
        pub padding: [u8; 128],
    }
}

abi_struct! {
    #[abi(name = "SDL_Finger")]
    #[derive(Debug, Default)]
    pub struct Finger {
        pub id: FingerId,
        pub x: f32,
        pub y: f32,
        pub pressure: f32,
        pub padding: u32,
    }
}
