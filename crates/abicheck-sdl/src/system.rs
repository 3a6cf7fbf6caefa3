use core::ffi::{c_char, c_int, c_uint, c_ushort, c_void};

use abicheck_layout::abi_struct;

use crate::types::{
    AudioFormat, HidBusType, IoStatus, IoWhence, MessageBoxButtonFlags, MessageBoxFlags, PathType, PointerPadding16,
    PointerPadding32, Time, WChar, Window,
};

/// Called once per directory entry, returns whether enumeration continues.
pub type EnumerateDirectoryCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, dirname: *const c_char, fname: *const c_char) -> c_int>;

/// Number of entries in [`MessageBoxColorScheme::colors`].
pub const MESSAGEBOX_COLOR_COUNT: usize = 5;

abi_struct! {
    #[abi(name = "SDL_StorageInterface")]
    /// Function table backing a custom storage container.
    ///
    /// Every callback takes the container `userdata` first. Paths use `/` as separator.
    #[derive(Debug, Default)]
    pub struct StorageInterface {
        pub close: Option<unsafe extern "C" fn(userdata: *mut c_void) -> bool>,
        pub ready: Option<unsafe extern "C" fn(userdata: *mut c_void) -> bool>,
        pub enumerate: Option<
            unsafe extern "C" fn(
                userdata: *mut c_void,
                path: *const c_char,
                callback: EnumerateDirectoryCallback,
                callback_userdata: *mut c_void,
            ) -> bool,
        >,
        pub info: Option<unsafe extern "C" fn(userdata: *mut c_void, path: *const c_char, info: *mut PathInfo) -> bool>,
        pub read_file: Option<
            unsafe extern "C" fn(userdata: *mut c_void, path: *const c_char, destination: *mut c_void, length: u64) -> bool,
        >,
        pub write_file: Option<
            unsafe extern "C" fn(userdata: *mut c_void, path: *const c_char, source: *const c_void, length: u64) -> bool,
        >,
        pub mkdir: Option<unsafe extern "C" fn(userdata: *mut c_void, path: *const c_char) -> bool>,
        pub remove: Option<unsafe extern "C" fn(userdata: *mut c_void, path: *const c_char) -> bool>,
        pub rename: Option<unsafe extern "C" fn(userdata: *mut c_void, oldpath: *const c_char, newpath: *const c_char) -> bool>,
        pub copy: Option<unsafe extern "C" fn(userdata: *mut c_void, oldpath: *const c_char, newpath: *const c_char) -> bool>,
        pub space_remaining: Option<unsafe extern "C" fn(userdata: *mut c_void) -> u64>,
    }
}

abi_struct! {
    #[abi(name = "SDL_IOStreamInterface")]
    #[derive(Debug, Default)]
    pub struct IoStreamInterface {
        /// Total size of the stream, -1 on error.
        pub size: Option<unsafe extern "C" fn(userdata: *mut c_void) -> i64>,
        pub seek: Option<unsafe extern "C" fn(userdata: *mut c_void, offset: i64, whence: IoWhence) -> i64>,
        pub read: Option<
            unsafe extern "C" fn(userdata: *mut c_void, ptr: *mut c_void, size: usize, status: *mut IoStatus) -> usize,
        >,
        pub write: Option<
            unsafe extern "C" fn(userdata: *mut c_void, ptr: *const c_void, size: usize, status: *mut IoStatus) -> usize,
        >,
        pub close: Option<unsafe extern "C" fn(userdata: *mut c_void) -> bool>,
    }
}

abi_struct! {
    #[abi(name = "SDL_DateTime")]
    #[derive(Debug, Default, PartialEq, Eq)]
    pub struct DateTime {
        pub year: c_int,
        /// 1-12
        pub month: c_int,
        /// 1-31
        pub day: c_int,
        pub hour: c_int,
        pub minute: c_int,
        pub second: c_int,
        pub nanosecond: c_int,
        /// 0 is Sunday.
        pub day_of_week: c_int,
        /// Seconds east of UTC.
        pub utc_offset: c_int,
    }
}

abi_struct! {
    #[abi(name = "SDL_PathInfo")]
    #[derive(Debug, Default)]
    pub struct PathInfo {
        pub r#type: PathType,
        pub padding: u32,
        pub size: u64,
        pub create_time: Time,
        pub modify_time: Time,
        pub access_time: Time,
    }
}

abi_struct! {
    #[abi(name = "SDL_Locale")]
    #[derive(Debug)]
    pub struct Locale {
        /// ISO-639 language code, such as "en".
        pub language: *const c_char,
        /// ISO-3166 country code, such as "US", or null.
        pub country: *const c_char,
    }
}

abi_struct! {
    #[abi(name = "SDL_AudioSpec")]
    #[derive(Debug, Default, PartialEq, Eq)]
    pub struct AudioSpec {
        pub format: AudioFormat,
        pub channels: c_int,
        pub freq: c_int,
    }
}

abi_struct! {
    #[abi(name = "SDL_DialogFileFilter")]
    #[derive(Debug)]
    pub struct DialogFileFilter {
        pub name: *const c_char,
        /// Semicolon separated list of extensions, `*` matches everything.
        pub pattern: *const c_char,
    }
}

abi_struct! {
    #[abi(name = "SDL_AssertData")]
    #[derive(Debug)]
    pub struct AssertData {
        pub always_ignore: bool,
        pub trigger_count: c_uint,
        pub condition: *const c_char,
        pub filename: *const c_char,
        pub linenum: c_int,
        pub padding: PointerPadding32,
        pub function: *const c_char,
        pub next: *const AssertData,
    }
}

abi_struct! {
    #[abi(name = "SDL_hid_device_info")]
    /// Entry of the linked list returned by HID enumeration.
    #[derive(Debug)]
    pub struct HidDeviceInfo {
        pub path: *mut c_char,
        pub vendor_id: c_ushort,
        pub product_id: c_ushort,
        pub padding1: PointerPadding32,
        pub serial_number: *mut WChar,
        /// Binary-coded decimal.
        pub release_number: c_ushort,
        pub padding2: PointerPadding16,
        pub manufacturer_string: *mut WChar,
        pub product_string: *mut WChar,
        pub usage_page: c_ushort,
        pub usage: c_ushort,
        /// -1 unless the device is a USB HID device.
        pub interface_number: c_int,
        pub interface_class: c_int,
        pub interface_subclass: c_int,
        pub interface_protocol: c_int,
        pub bus_type: HidBusType,
        pub next: *mut HidDeviceInfo,
    }
}

abi_struct! {
    #[abi(name = "SDL_MessageBoxButtonData")]
    #[derive(Debug)]
    pub struct MessageBoxButtonData {
        pub flags: MessageBoxButtonFlags,
        pub button_id: c_int,
        pub text: *const c_char,
    }
}

abi_struct! {
    #[abi(name = "SDL_MessageBoxColor")]
    #[derive(Debug, Default, PartialEq, Eq)]
    pub struct MessageBoxColor {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }
}

abi_struct! {
    #[abi(name = "SDL_MessageBoxColorScheme")]
    #[derive(Debug, Default)]
    pub struct MessageBoxColorScheme {
        /// Background, text, button border, button background and selected button.
        pub colors: [MessageBoxColor; MESSAGEBOX_COLOR_COUNT],
    }
}

abi_struct! {
    #[abi(name = "SDL_MessageBoxData")]
    #[derive(Debug)]
    pub struct MessageBoxData {
        pub flags: MessageBoxFlags,
        pub padding1: PointerPadding32,
        /// Parent window, may be null.
        pub window: *mut Window,
        pub title: *const c_char,
        pub message: *const c_char,
        pub numbuttons: c_int,
        pub padding2: PointerPadding32,
        pub buttons: *const MessageBoxButtonData,
        /// Null selects the system color scheme.
        pub color_scheme: *const MessageBoxColorScheme,
    }
}
