//! Scalar typedefs and opaque handles shared by the catalog.
//!
//! C enums are `int` sized and mirrored as [`c_int`]. Flag sets backed by a fixed width
//! integer keep that width.

use core::ffi::c_int;

/// Fills the gap a 64-bit compiler leaves between a 32-bit member and a following pointer,
/// or at the end of a record whose alignment comes from a pointer.
///
/// Zero-sized on 32-bit targets.
pub type PointerPadding32 = [u8; size_of::<usize>() - 4];

/// Same as [`PointerPadding32`] after a 16-bit member.
pub type PointerPadding16 = [u8; size_of::<usize>() - 2];

pub type DisplayId = u32;
pub type WindowId = u32;
pub type KeyboardId = u32;
pub type MouseId = u32;
pub type JoystickId = u32;
pub type SensorId = u32;
pub type AudioDeviceId = u32;
pub type CameraId = u32;
pub type PenId = u32;
pub type TouchId = u64;
pub type FingerId = u64;
pub type PropertiesId = u32;

pub type EventType = u32;
pub type Keycode = u32;
pub type MouseButtonFlags = u32;
pub type MouseWheelDirection = c_int;
pub type PowerState = c_int;
pub type PenInputFlags = u32;
pub type PenAxis = c_int;

pub type PixelFormat = c_int;
pub type Colorspace = c_int;
pub type SurfaceFlags = u32;

pub type AudioFormat = c_int;
pub type SensorType = c_int;
pub type GamepadBindingType = c_int;
pub type GamepadButton = c_int;
pub type GamepadAxis = c_int;

pub type PathType = c_int;
/// Nanoseconds since the Unix epoch.
pub type Time = i64;
pub type IoWhence = c_int;
pub type IoStatus = c_int;
pub type HidBusType = c_int;
pub type MessageBoxFlags = u32;
pub type MessageBoxButtonFlags = u32;

#[cfg(windows)]
pub type WChar = u16;
#[cfg(not(windows))]
pub type WChar = i32;

pub type GpuFilter = c_int;
pub type GpuSamplerMipmapMode = c_int;
pub type GpuSamplerAddressMode = c_int;
pub type GpuCompareOp = c_int;
pub type GpuVertexInputRate = c_int;
pub type GpuVertexElementFormat = c_int;
pub type GpuStencilOp = c_int;
pub type GpuBlendFactor = c_int;
pub type GpuBlendOp = c_int;
pub type GpuColorComponentFlags = u8;
pub type GpuShaderFormat = u32;
pub type GpuShaderStage = c_int;
pub type GpuTextureType = c_int;
pub type GpuTextureFormat = c_int;
pub type GpuTextureUsageFlags = u32;
pub type GpuSampleCount = c_int;
pub type GpuBufferUsageFlags = u32;
pub type GpuTransferBufferUsage = c_int;
pub type GpuFillMode = c_int;
pub type GpuCullMode = c_int;
pub type GpuFrontFace = c_int;
pub type GpuPrimitiveType = c_int;
pub type GpuLoadOp = c_int;
pub type GpuStoreOp = c_int;

macro_rules! opaque_handles {
    ($( $(#[$meta:meta])* $name:ident ),* $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque_handles! {
    Window,
    SurfaceData,
    DisplayModeData,
    GpuBuffer,
    GpuTransferBuffer,
    GpuTexture,
    GpuSampler,
    GpuShader,
}
