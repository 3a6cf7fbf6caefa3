//! Force feedback effect descriptions.
//!
//! All effects start with the same header (type, direction, replay and trigger) so the
//! [`HapticEffect`] union can be read through `type` before picking a member.

use abicheck_layout::{abi_struct, abi_union};

use crate::types::PointerPadding32;

abi_struct! {
    #[abi(name = "SDL_HapticDirection")]
    #[derive(Debug, Default)]
    pub struct HapticDirection {
        /// Polar, cartesian, spherical or steering axis encoding.
        pub r#type: u8,
        pub dir: [i32; 3],
    }
}

abi_struct! {
    #[abi(name = "SDL_HapticConstant")]
    #[derive(Debug, Default)]
    pub struct HapticConstant {
        pub r#type: u16,
        pub direction: HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub level: i16,
        pub attack_length: u16,
        pub attack_level: u16,
        pub fade_length: u16,
        pub fade_level: u16,
    }
}

abi_struct! {
    #[abi(name = "SDL_HapticPeriodic")]
    #[derive(Debug, Default)]
    pub struct HapticPeriodic {
        pub r#type: u16,
        pub direction: HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub period: u16,
        pub magnitude: i16,
        pub offset: i16,
        /// Horizontal shift in hundredths of a degree.
        pub phase: u16,
        pub attack_length: u16,
        pub attack_level: u16,
        pub fade_length: u16,
        pub fade_level: u16,
    }
}

abi_struct! {
    #[abi(name = "SDL_HapticCondition")]
    #[derive(Debug, Default)]
    pub struct HapticCondition {
        pub r#type: u16,
        pub direction: HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub right_sat: [u16; 3],
        pub left_sat: [u16; 3],
        pub right_coeff: [i16; 3],
        pub left_coeff: [i16; 3],
        pub deadband: [u16; 3],
        pub center: [i16; 3],
    }
}

abi_struct! {
    #[abi(name = "SDL_HapticRamp")]
    #[derive(Debug, Default)]
    pub struct HapticRamp {
        pub r#type: u16,
        pub direction: HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub start: i16,
        pub end: i16,
        pub attack_length: u16,
        pub attack_level: u16,
        pub fade_length: u16,
        pub fade_level: u16,
    }
}

abi_struct! {
    #[abi(name = "SDL_HapticLeftRight")]
    #[derive(Debug, Default)]
    pub struct HapticLeftRight {
        pub r#type: u16,
        pub length: u32,
        pub large_magnitude: u16,
        pub small_magnitude: u16,
    }
}

abi_struct! {
    #[abi(name = "SDL_HapticCustom")]
    #[derive(Debug)]
    pub struct HapticCustom {
        pub r#type: u16,
        pub direction: HapticDirection,
        pub length: u32,
        pub delay: u16,
        pub button: u16,
        pub interval: u16,
        pub channels: u8,
        pub period: u16,
        pub samples: u16,
        pub padding: PointerPadding32,
        /// `channels * samples` values, interleaved by channel.
        pub data: *mut u16,
        pub attack_length: u16,
        pub attack_level: u16,
        pub fade_length: u16,
        pub fade_level: u16,
    }
}

abi_union! {
    #[abi(name = "SDL_HapticEffect")]
    pub union HapticEffect {
        pub r#type: u16,
        pub constant: HapticConstant,
        pub periodic: HapticPeriodic,
        pub condition: HapticCondition,
        pub ramp: HapticRamp,
        pub leftright: HapticLeftRight,
        pub custom: HapticCustom,
        pub padding: [u8; 72],
    }
}
