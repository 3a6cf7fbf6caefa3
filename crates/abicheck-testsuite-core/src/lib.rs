//! Probe types shared by the integration tests.
//!
//! The `abi_struct!` probes are well formed. The hand-written ones implement `AbiStruct`
//! over twins that deliberately disagree with the default layout.

use abicheck_layout::{abi_struct, struct_layout, AbiStruct, Packing, StructLayout};

abi_struct! {
    #[abi(name = "Probe_Aligned")]
    #[derive(Debug, Default)]
    pub struct AlignedProbe {
        pub a: u32,
        pub b: u32,
        pub c: u16,
        pub d: u16,
    }
}

abi_struct! {
    #[abi(name = "Probe_Tagged")]
    #[derive(Debug, Default)]
    pub struct TaggedProbe {
        pub r#type: u32,
        pub r#mod: u16,
        pub padding: u16,
    }
}

abi_struct! {
    #[abi(name = "Probe_Padded")]
    #[derive(Debug, Default)]
    pub struct PaddedProbe {
        pub tag: u32,
        pub padding: u32,
        pub value: u64,
    }
}

abi_struct! {
    #[abi(name = "Probe_Unpadded")]
    #[derive(Debug, Default)]
    pub struct UnpaddedProbe {
        pub tag: u32,
        pub value: u64,
    }
}

/// `c` moves right after `a` in the 4-byte packed twin.
#[repr(C)]
pub struct MovedFieldProbe {
    pub a: u8,
    pub b: u32,
    pub c: u8,
}

#[repr(C, packed(8))]
pub struct MovedFieldProbePack8 {
    pub a: u8,
    pub b: u32,
    pub c: u8,
}

#[repr(C, packed(4))]
pub struct MovedFieldProbePack4 {
    pub a: u8,
    pub c: u8,
    pub b: u32,
}

impl AbiStruct for MovedFieldProbe {
    const NAME: &'static str = "Probe_MovedField";

    fn layout(packing: Packing) -> StructLayout {
        match packing {
            Packing::Default => struct_layout!(MovedFieldProbe { a, b, c }),
            Packing::Pack8 => struct_layout!(MovedFieldProbePack8 { a, b, c }),
            Packing::Pack4 => struct_layout!(MovedFieldProbePack4 { a, c, b }),
        }
    }
}

/// The 8-byte packed twin names its last member `d` instead of `c`.
#[repr(C)]
pub struct MissingFieldProbe {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

#[repr(C, packed(8))]
pub struct MissingFieldProbePack8 {
    pub a: u32,
    pub b: u32,
    pub d: u32,
}

#[repr(C, packed(4))]
pub struct MissingFieldProbePack4 {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl AbiStruct for MissingFieldProbe {
    const NAME: &'static str = "Probe_MissingField";

    fn layout(packing: Packing) -> StructLayout {
        match packing {
            Packing::Default => struct_layout!(MissingFieldProbe { a, b, c }),
            Packing::Pack8 => struct_layout!(MissingFieldProbePack8 { a, b, d }),
            Packing::Pack4 => struct_layout!(MissingFieldProbePack4 { a, b, c }),
        }
    }
}
