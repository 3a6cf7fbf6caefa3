#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

pub mod events;
pub mod gpu;
pub mod haptic;
pub mod joystick;
pub mod system;
pub mod types;
pub mod video;

use abicheck_layout::{CatalogEntry, LayoutReport, LayoutValidator};

macro_rules! catalog {
    ($( $ty:ty ),* $(,)?) => {
        &[ $( CatalogEntry::of::<$ty>(), )* ]
    };
}

/// Every checked struct, in the order of the library headers.
static CATALOG: &[CatalogEntry] = catalog![
    events::CommonEvent,
    events::DisplayEvent,
    events::WindowEvent,
    events::KeyboardDeviceEvent,
    events::KeyboardEvent,
    events::TextEditingEvent,
    events::TextEditingCandidatesEvent,
    events::TextInputEvent,
    events::MouseDeviceEvent,
    events::MouseMotionEvent,
    events::MouseButtonEvent,
    events::MouseWheelEvent,
    events::JoyAxisEvent,
    events::JoyBallEvent,
    events::JoyHatEvent,
    events::JoyButtonEvent,
    events::JoyDeviceEvent,
    events::JoyBatteryEvent,
    events::GamepadAxisEvent,
    events::GamepadButtonEvent,
    events::GamepadDeviceEvent,
    events::GamepadTouchpadEvent,
    events::GamepadSensorEvent,
    events::AudioDeviceEvent,
    events::CameraDeviceEvent,
    events::TouchFingerEvent,
    events::PenProximityEvent,
    events::PenMotionEvent,
    events::PenTouchEvent,
    events::PenButtonEvent,
    events::PenAxisEvent,
    events::RenderEvent,
    events::DropEvent,
    events::ClipboardEvent,
    events::SensorEvent,
    events::QuitEvent,
    events::UserEvent,
    events::Event,
    video::CameraSpec,
    haptic::HapticDirection,
    haptic::HapticConstant,
    haptic::HapticPeriodic,
    haptic::HapticCondition,
    haptic::HapticRamp,
    haptic::HapticLeftRight,
    haptic::HapticCustom,
    haptic::HapticEffect,
    system::StorageInterface,
    system::DateTime,
    events::Finger,
    joystick::GamepadBindingInputAxis,
    joystick::GamepadBindingInputHat,
    joystick::GamepadBindingInput,
    joystick::GamepadBindingOutputAxis,
    joystick::GamepadBindingOutput,
    joystick::GamepadBinding,
    system::Locale,
    system::AudioSpec,
    system::DialogFileFilter,
    system::IoStreamInterface,
    gpu::GpuDepthStencilValue,
    gpu::GpuViewport,
    gpu::GpuTextureTransferInfo,
    gpu::GpuTransferBufferLocation,
    gpu::GpuTextureLocation,
    gpu::GpuTextureRegion,
    gpu::GpuBlitRegion,
    gpu::GpuBufferLocation,
    gpu::GpuBufferRegion,
    gpu::GpuIndirectDrawCommand,
    gpu::GpuIndexedIndirectDrawCommand,
    gpu::GpuIndirectDispatchCommand,
    gpu::GpuSamplerCreateInfo,
    gpu::GpuVertexBinding,
    gpu::GpuVertexAttribute,
    gpu::GpuVertexInputState,
    gpu::GpuStencilOpState,
    gpu::GpuColorAttachmentBlendState,
    gpu::GpuShaderCreateInfo,
    gpu::GpuTextureCreateInfo,
    gpu::GpuBufferCreateInfo,
    gpu::GpuTransferBufferCreateInfo,
    gpu::GpuRasterizerState,
    gpu::GpuMultisampleState,
    gpu::GpuDepthStencilState,
    gpu::GpuColorAttachmentDescription,
    gpu::GpuGraphicsPipelineAttachmentInfo,
    gpu::GpuGraphicsPipelineCreateInfo,
    gpu::GpuComputePipelineCreateInfo,
    gpu::GpuColorAttachmentInfo,
    gpu::GpuDepthStencilAttachmentInfo,
    gpu::GpuBufferBinding,
    gpu::GpuTextureSamplerBinding,
    gpu::GpuStorageBufferWriteOnlyBinding,
    gpu::GpuStorageTextureWriteOnlyBinding,
    video::Surface,
    video::Vertex,
    video::DisplayMode,
    system::AssertData,
    system::HidDeviceInfo,
    video::Point,
    video::FPoint,
    video::Rect,
    video::FRect,
    joystick::VirtualJoystickTouchpadDesc,
    joystick::VirtualJoystickSensorDesc,
    joystick::VirtualJoystickDesc,
    system::PathInfo,
    system::MessageBoxButtonData,
    system::MessageBoxColor,
    system::MessageBoxColorScheme,
    system::MessageBoxData,
    video::Color,
    video::FColor,
    video::Palette,
    video::PixelFormatDetails,
];

pub fn catalog() -> impl ExactSizeIterator<Item = &'static CatalogEntry> {
    CATALOG.iter()
}

/// Looks up a catalog entry by C name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name().eq_ignore_ascii_case(name))
}

/// Checks every catalog entry and returns the full report.
pub fn validate_catalog() -> LayoutReport {
    let mut validator = LayoutValidator::new();

    debug!(count = CATALOG.len(), "Validating struct catalog");

    validator.check_all(catalog().copied());

    validator.finish()
}

/// Checks that every catalogued struct has the same size and member offsets with default
/// packing and with forced 8-byte and 4-byte packing.
///
/// Each mismatch is logged at the error level. Returns true when no mismatch was found.
pub fn check_struct_offsets() -> bool {
    validate_catalog().is_conformant()
}
