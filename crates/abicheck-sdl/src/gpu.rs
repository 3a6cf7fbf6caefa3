use core::ffi::c_char;

use abicheck_layout::abi_struct;

use crate::types::{
    GpuBlendFactor, GpuBlendOp, GpuBuffer, GpuBufferUsageFlags, GpuColorComponentFlags, GpuCompareOp, GpuCullMode,
    GpuFillMode, GpuFilter, GpuFrontFace, GpuLoadOp, GpuPrimitiveType, GpuSampleCount, GpuSampler,
    GpuSamplerAddressMode, GpuSamplerMipmapMode, GpuShader, GpuShaderFormat, GpuShaderStage, GpuStencilOp, GpuStoreOp,
    GpuTexture, GpuTextureFormat, GpuTextureType, GpuTextureUsageFlags, GpuTransferBuffer, GpuTransferBufferUsage,
    GpuVertexElementFormat, GpuVertexInputRate, PointerPadding32, PropertiesId,
};
use crate::video::FColor;

abi_struct! {
    #[abi(name = "SDL_GPUDepthStencilValue")]
    #[derive(Debug, Default)]
    pub struct GpuDepthStencilValue {
        pub depth: f32,
        pub stencil: u8,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUViewport")]
    #[derive(Debug, Default)]
    pub struct GpuViewport {
        pub x: f32,
        pub y: f32,
        pub w: f32,
        pub h: f32,
        pub min_depth: f32,
        pub max_depth: f32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUTextureTransferInfo")]
    #[derive(Debug)]
    pub struct GpuTextureTransferInfo {
        pub transfer_buffer: *mut GpuTransferBuffer,
        pub offset: u32,
        /// Number of pixels from one row to the next.
        pub image_pitch: u32,
        /// Number of rows from one layer or depth slice to the next.
        pub image_height: u32,
        pub padding: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUTransferBufferLocation")]
    #[derive(Debug)]
    pub struct GpuTransferBufferLocation {
        pub transfer_buffer: *mut GpuTransferBuffer,
        pub offset: u32,
        pub padding: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUTextureLocation")]
    #[derive(Debug)]
    pub struct GpuTextureLocation {
        pub texture: *mut GpuTexture,
        pub mip_level: u32,
        pub layer: u32,
        pub x: u32,
        pub y: u32,
        pub z: u32,
        pub padding: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUTextureRegion")]
    #[derive(Debug)]
    pub struct GpuTextureRegion {
        pub texture: *mut GpuTexture,
        pub mip_level: u32,
        pub layer: u32,
        pub x: u32,
        pub y: u32,
        pub z: u32,
        pub w: u32,
        pub h: u32,
        pub d: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUBlitRegion")]
    #[derive(Debug)]
    pub struct GpuBlitRegion {
        pub texture: *mut GpuTexture,
        pub mip_level: u32,
        pub layer_or_depth_plane: u32,
        pub x: u32,
        pub y: u32,
        pub w: u32,
        pub h: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUBufferLocation")]
    #[derive(Debug)]
    pub struct GpuBufferLocation {
        pub buffer: *mut GpuBuffer,
        pub offset: u32,
        pub padding: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUBufferRegion")]
    #[derive(Debug)]
    pub struct GpuBufferRegion {
        pub buffer: *mut GpuBuffer,
        pub offset: u32,
        pub size: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUIndirectDrawCommand")]
    #[derive(Debug, Default)]
    pub struct GpuIndirectDrawCommand {
        pub vertex_count: u32,
        pub instance_count: u32,
        pub first_vertex: u32,
        pub first_instance: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUIndexedIndirectDrawCommand")]
    #[derive(Debug, Default)]
    pub struct GpuIndexedIndirectDrawCommand {
        pub index_count: u32,
        pub instance_count: u32,
        pub first_index: u32,
        pub vertex_offset: i32,
        pub first_instance: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUIndirectDispatchCommand")]
    #[derive(Debug, Default)]
    pub struct GpuIndirectDispatchCommand {
        pub group_count_x: u32,
        pub group_count_y: u32,
        pub group_count_z: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUSamplerCreateInfo")]
    #[derive(Debug, Default)]
    pub struct GpuSamplerCreateInfo {
        pub min_filter: GpuFilter,
        pub mag_filter: GpuFilter,
        pub mipmap_mode: GpuSamplerMipmapMode,
        pub address_mode_u: GpuSamplerAddressMode,
        pub address_mode_v: GpuSamplerAddressMode,
        pub address_mode_w: GpuSamplerAddressMode,
        pub mip_lod_bias: f32,
        pub max_anisotropy: f32,
        pub anisotropy_enable: bool,
        pub compare_enable: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub compare_op: GpuCompareOp,
        pub min_lod: f32,
        pub max_lod: f32,
        pub props: PropertiesId,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUVertexBinding")]
    #[derive(Debug, Default)]
    pub struct GpuVertexBinding {
        pub binding: u32,
        pub stride: u32,
        pub input_rate: GpuVertexInputRate,
        /// Ignored unless `input_rate` is per instance.
        pub instance_step_rate: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUVertexAttribute")]
    #[derive(Debug, Default)]
    pub struct GpuVertexAttribute {
        pub location: u32,
        pub binding: u32,
        pub format: GpuVertexElementFormat,
        pub offset: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUVertexInputState")]
    #[derive(Debug)]
    pub struct GpuVertexInputState {
        pub vertex_bindings: *const GpuVertexBinding,
        pub vertex_binding_count: u32,
        pub padding1: PointerPadding32,
        pub vertex_attributes: *const GpuVertexAttribute,
        pub vertex_attribute_count: u32,
        pub padding2: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUStencilOpState")]
    #[derive(Debug, Default)]
    pub struct GpuStencilOpState {
        pub fail_op: GpuStencilOp,
        pub pass_op: GpuStencilOp,
        pub depth_fail_op: GpuStencilOp,
        pub compare_op: GpuCompareOp,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUColorAttachmentBlendState")]
    #[derive(Debug, Default)]
    pub struct GpuColorAttachmentBlendState {
        pub blend_enable: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub src_color_blend_factor: GpuBlendFactor,
        pub dst_color_blend_factor: GpuBlendFactor,
        pub color_blend_op: GpuBlendOp,
        pub src_alpha_blend_factor: GpuBlendFactor,
        pub dst_alpha_blend_factor: GpuBlendFactor,
        pub alpha_blend_op: GpuBlendOp,
        pub color_write_mask: GpuColorComponentFlags,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUShaderCreateInfo")]
    #[derive(Debug)]
    pub struct GpuShaderCreateInfo {
        pub code_size: usize,
        pub code: *const u8,
        pub entry_point_name: *const c_char,
        pub format: GpuShaderFormat,
        pub stage: GpuShaderStage,
        pub sampler_count: u32,
        pub storage_texture_count: u32,
        pub storage_buffer_count: u32,
        pub uniform_buffer_count: u32,
        pub props: PropertiesId,
        pub padding: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUTextureCreateInfo")]
    #[derive(Debug, Default)]
    pub struct GpuTextureCreateInfo {
        pub r#type: GpuTextureType,
        pub format: GpuTextureFormat,
        pub usage_flags: GpuTextureUsageFlags,
        pub width: u32,
        pub height: u32,
        pub layer_count_or_depth: u32,
        pub level_count: u32,
        pub sample_count: GpuSampleCount,
        pub props: PropertiesId,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUBufferCreateInfo")]
    #[derive(Debug, Default)]
    pub struct GpuBufferCreateInfo {
        pub usage_flags: GpuBufferUsageFlags,
        pub size_in_bytes: u32,
        pub props: PropertiesId,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUTransferBufferCreateInfo")]
    #[derive(Debug, Default)]
    pub struct GpuTransferBufferCreateInfo {
        pub usage: GpuTransferBufferUsage,
        pub size_in_bytes: u32,
        pub props: PropertiesId,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPURasterizerState")]
    #[derive(Debug, Default)]
    pub struct GpuRasterizerState {
        pub fill_mode: GpuFillMode,
        pub cull_mode: GpuCullMode,
        pub front_face: GpuFrontFace,
        pub depth_bias_enable: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub depth_bias_constant_factor: f32,
        pub depth_bias_clamp: f32,
        pub depth_bias_slope_factor: f32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUMultisampleState")]
    #[derive(Debug, Default)]
    pub struct GpuMultisampleState {
        pub sample_count: GpuSampleCount,
        pub sample_mask: u32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUDepthStencilState")]
    #[derive(Debug, Default)]
    pub struct GpuDepthStencilState {
        pub depth_test_enable: bool,
        pub depth_write_enable: bool,
        pub stencil_test_enable: bool,
        pub padding1: u8,
        pub compare_op: GpuCompareOp,
        pub back_stencil_state: GpuStencilOpState,
        pub front_stencil_state: GpuStencilOpState,
        pub compare_mask: u8,
        pub write_mask: u8,
        pub reference: u8,
        pub padding2: u8,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUColorAttachmentDescription")]
    #[derive(Debug, Default)]
    pub struct GpuColorAttachmentDescription {
        pub format: GpuTextureFormat,
        pub blend_state: GpuColorAttachmentBlendState,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUGraphicsPipelineAttachmentInfo")]
    #[derive(Debug)]
    pub struct GpuGraphicsPipelineAttachmentInfo {
        pub color_attachment_descriptions: *const GpuColorAttachmentDescription,
        pub color_attachment_count: u32,
        pub has_depth_stencil_attachment: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub depth_stencil_format: GpuTextureFormat,
        pub padding4: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUGraphicsPipelineCreateInfo")]
    #[derive(Debug)]
    pub struct GpuGraphicsPipelineCreateInfo {
        pub vertex_shader: *mut GpuShader,
        pub fragment_shader: *mut GpuShader,
        pub vertex_input_state: GpuVertexInputState,
        pub primitive_type: GpuPrimitiveType,
        pub rasterizer_state: GpuRasterizerState,
        pub multisample_state: GpuMultisampleState,
        pub depth_stencil_state: GpuDepthStencilState,
        pub padding1: PointerPadding32,
        pub attachment_info: GpuGraphicsPipelineAttachmentInfo,
        pub blend_constants: [f32; 4],
        pub props: PropertiesId,
        pub padding2: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUComputePipelineCreateInfo")]
    #[derive(Debug)]
    pub struct GpuComputePipelineCreateInfo {
        pub code_size: usize,
        pub code: *const u8,
        pub entry_point_name: *const c_char,
        pub format: GpuShaderFormat,
        pub read_only_storage_texture_count: u32,
        pub read_only_storage_buffer_count: u32,
        pub write_only_storage_texture_count: u32,
        pub write_only_storage_buffer_count: u32,
        pub uniform_buffer_count: u32,
        pub thread_count_x: u32,
        pub thread_count_y: u32,
        pub thread_count_z: u32,
        pub props: PropertiesId,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUColorAttachmentInfo")]
    /// Color target of a render pass.
    ///
    /// `load_op` decides what happens to the texture contents at the beginning of the pass
    /// (load, clear to `clear_color`, or don't care) and `store_op` at its end.
    #[derive(Debug)]
    pub struct GpuColorAttachmentInfo {
        pub texture: *mut GpuTexture,
        pub mip_level: u32,
        pub layer_or_depth_plane: u32,
        pub clear_color: FColor,
        pub load_op: GpuLoadOp,
        pub store_op: GpuStoreOp,
        pub cycle: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub padding4: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUDepthStencilAttachmentInfo")]
    /// Depth and stencil target of a render pass, with separate load and store operations
    /// for each aspect.
    #[derive(Debug)]
    pub struct GpuDepthStencilAttachmentInfo {
        pub texture: *mut GpuTexture,
        pub depth_stencil_clear_value: GpuDepthStencilValue,
        pub load_op: GpuLoadOp,
        pub store_op: GpuStoreOp,
        pub stencil_load_op: GpuLoadOp,
        pub stencil_store_op: GpuStoreOp,
        pub cycle: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub padding4: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUBufferBinding")]
    #[derive(Debug)]
    pub struct GpuBufferBinding {
        pub buffer: *mut GpuBuffer,
        pub offset: u32,
        pub padding: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUTextureSamplerBinding")]
    #[derive(Debug)]
    pub struct GpuTextureSamplerBinding {
        pub texture: *mut GpuTexture,
        pub sampler: *mut GpuSampler,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUStorageBufferWriteOnlyBinding")]
    #[derive(Debug)]
    pub struct GpuStorageBufferWriteOnlyBinding {
        pub buffer: *mut GpuBuffer,
        pub cycle: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub padding4: PointerPadding32,
    }
}

abi_struct! {
    #[abi(name = "SDL_GPUStorageTextureWriteOnlyBinding")]
    #[derive(Debug)]
    pub struct GpuStorageTextureWriteOnlyBinding {
        pub texture: *mut GpuTexture,
        pub mip_level: u32,
        pub layer: u32,
        pub cycle: bool,
        pub padding1: u8,
        pub padding2: u8,
        pub padding3: u8,
        pub padding4: PointerPadding32,
    }
}
