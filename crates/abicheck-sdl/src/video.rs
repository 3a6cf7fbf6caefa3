//! Surfaces, pixel formats and plane geometry.

use core::ffi::{c_int, c_void};

use abicheck_layout::abi_struct;

use crate::types::{Colorspace, DisplayId, DisplayModeData, PixelFormat, PointerPadding32, SurfaceData, SurfaceFlags};

abi_struct! {
    #[abi(name = "SDL_CameraSpec")]
    #[derive(Debug, Default)]
    pub struct CameraSpec {
        pub format: PixelFormat,
        pub colorspace: Colorspace,
        pub width: c_int,
        pub height: c_int,
        pub framerate_numerator: c_int,
        pub framerate_denominator: c_int,
    }
}

abi_struct! {
    #[abi(name = "SDL_Surface")]
    /// A collection of pixels used in software blitting.
    ///
    /// `pixels` is only valid while the surface is locked when the surface requires it.
    #[derive(Debug)]
    pub struct Surface {
        pub flags: SurfaceFlags,
        pub format: PixelFormat,
        pub w: c_int,
        pub h: c_int,
        pub pitch: c_int,
        pub padding1: PointerPadding32,
        pub pixels: *mut c_void,
        pub refcount: c_int,
        pub padding2: PointerPadding32,
        pub internal: *mut SurfaceData,
    }
}

abi_struct! {
    #[abi(name = "SDL_Vertex")]
    #[derive(Debug, Default)]
    pub struct Vertex {
        pub position: FPoint,
        pub color: FColor,
        pub tex_coord: FPoint,
    }
}

abi_struct! {
    #[abi(name = "SDL_DisplayMode")]
    #[derive(Debug)]
    pub struct DisplayMode {
        pub display_id: DisplayId,
        pub format: PixelFormat,
        pub w: c_int,
        pub h: c_int,
        /// Scale converting size to pixels (e.g. a 1920x1080 mode with 2.0 scale would have 3840x2160 pixels).
        pub pixel_density: f32,
        /// In Hz, or 0.0 if unspecified.
        pub refresh_rate: f32,
        pub refresh_rate_numerator: c_int,
        pub refresh_rate_denominator: c_int,
        pub internal: *mut DisplayModeData,
    }
}

abi_struct! {
    #[abi(name = "SDL_Point")]
    #[derive(Debug, Default, PartialEq, Eq, Hash)]
    pub struct Point {
        pub x: c_int,
        pub y: c_int,
    }
}

abi_struct! {
    #[abi(name = "SDL_FPoint")]
    #[derive(Debug, Default, PartialEq)]
    pub struct FPoint {
        pub x: f32,
        pub y: f32,
    }
}

abi_struct! {
    #[abi(name = "SDL_Rect")]
    #[derive(Debug, Default, PartialEq, Eq, Hash)]
    pub struct Rect {
        pub x: c_int,
        pub y: c_int,
        pub w: c_int,
        pub h: c_int,
    }
}

abi_struct! {
    #[abi(name = "SDL_FRect")]
    #[derive(Debug, Default, PartialEq)]
    pub struct FRect {
        pub x: f32,
        pub y: f32,
        pub w: f32,
        pub h: f32,
    }
}

abi_struct! {
    #[abi(name = "SDL_Color")]
    #[derive(Debug, Default, PartialEq, Eq, Hash)]
    pub struct Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }
}

abi_struct! {
    #[abi(name = "SDL_FColor")]
    #[derive(Debug, Default, PartialEq)]
    pub struct FColor {
        pub r: f32,
        pub g: f32,
        pub b: f32,
        pub a: f32,
    }
}

abi_struct! {
    #[abi(name = "SDL_Palette")]
    #[derive(Debug)]
    pub struct Palette {
        pub ncolors: c_int,
        pub padding: PointerPadding32,
        pub colors: *mut Color,
        pub version: u32,
        pub refcount: c_int,
    }
}

abi_struct! {
    #[abi(name = "SDL_PixelFormatDetails")]
    #[derive(Debug, Default)]
    pub struct PixelFormatDetails {
        pub format: PixelFormat,
        pub bits_per_pixel: u8,
        pub bytes_per_pixel: u8,
        pub padding: [u8; 2],
        pub rmask: u32,
        pub gmask: u32,
        pub bmask: u32,
        pub amask: u32,
        pub rbits: u8,
        pub gbits: u8,
        pub bbits: u8,
        pub abits: u8,
        pub rshift: u8,
        pub gshift: u8,
        pub bshift: u8,
        pub ashift: u8,
    }
}
