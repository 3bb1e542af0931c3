use crate::buffers::FrameBuffers;
use imgui::Context;
use imgui::DrawData;
use imgui::DrawVert;
use imgui::TextureId;
use std::ffi::c_void;
use std::mem::ManuallyDrop;
use tracing::error;
use windows::core::s;
use windows::core::w;
use windows::core::Interface;
use windows::core::Result;
use windows::core::PCSTR;
use windows::Win32::Foundation::CloseHandle;
use windows::Win32::Graphics::Direct3D::Fxc::D3DCompile;
use windows::Win32::Graphics::Direct3D::ID3DBlob;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT;
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_R32G32_FLOAT;
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_R8G8B8A8_UNORM;
use windows::Win32::Graphics::Dxgi::Common::DXGI_SAMPLE_DESC;
use windows::Win32::System::Threading::CreateEventA;
use windows::Win32::System::Threading::WaitForSingleObject;
use windows::Win32::System::Threading::INFINITE;

const VERTEX_SHADER: &str = r"
cbuffer vertexBuffer : register(b0) {
    float4x4 ProjectionMatrix;
};

struct VS_INPUT {
    float2 pos : POSITION;
    float4 col : COLOR0;
    float2 uv  : TEXCOORD0;
};

struct PS_INPUT {
    float4 pos : SV_POSITION;
    float4 col : COLOR0;
    float2 uv  : TEXCOORD0;
};

PS_INPUT main(VS_INPUT input) {
    PS_INPUT output;
    output.pos = mul(ProjectionMatrix, float4(input.pos.xy, 0.f, 1.f));
    output.col = input.col;
    output.uv = input.uv;
    return output;
}
";

const PIXEL_SHADER: &str = r"
struct PS_INPUT {
    float4 pos : SV_POSITION;
    float4 col : COLOR0;
    float2 uv  : TEXCOORD0;
};

sampler sampler0;
Texture2D texture0;

float4 main(PS_INPUT input) : SV_Target {
    return input.col * texture0.Sample(sampler0, input.uv);
}
";

/// GPU objects with device lifetime: root signature, pipeline state, the font
/// atlas, and one set of geometry buffers per frame in flight.
pub(crate) struct DeviceObjects {
    root_signature: ID3D12RootSignature,
    pipeline_state: ID3D12PipelineState,
    _font_texture: ID3D12Resource, // keeps the atlas alive; sampled via the host's SRV slot
    frames: Vec<FrameBuffers>,
}

impl DeviceObjects {
    pub(crate) fn new(
        context: &mut Context,
        device: &ID3D12Device,
        rtv_format: DXGI_FORMAT,
        font_srv_cpu_handle: D3D12_CPU_DESCRIPTOR_HANDLE,
        font_srv_gpu_handle: D3D12_GPU_DESCRIPTOR_HANDLE,
        frames_in_flight: usize,
    ) -> Result<Self> {
        let root_signature = create_root_signature(device)?;
        let pipeline_state = create_pipeline_state(device, rtv_format, &root_signature)?;
        let font_texture =
            create_font_texture(device, context, font_srv_cpu_handle, font_srv_gpu_handle)?;

        let mut frames = Vec::new();
        frames.resize_with(frames_in_flight, FrameBuffers::default);

        Ok(DeviceObjects {
            root_signature,
            pipeline_state,
            _font_texture: font_texture,
            frames,
        })
    }

    pub(crate) fn render(
        &mut self,
        device: &ID3D12Device,
        frame: usize,
        draw_data: &DrawData,
        command_list: &ID3D12GraphicsCommandList,
    ) -> Result<()> {
        self.frames[frame].render(
            device,
            &self.root_signature,
            &self.pipeline_state,
            draw_data,
            command_list,
        )
    }
}

/// 16 root constants for the projection matrix, one SRV table for the font
/// atlas, and a static bilinear sampler.
fn create_root_signature(device: &ID3D12Device) -> Result<ID3D12RootSignature> {
    let srv_range = D3D12_DESCRIPTOR_RANGE {
        RangeType: D3D12_DESCRIPTOR_RANGE_TYPE_SRV,
        NumDescriptors: 1,
        ..Default::default()
    };

    let parameters = [
        D3D12_ROOT_PARAMETER {
            ParameterType: D3D12_ROOT_PARAMETER_TYPE_32BIT_CONSTANTS,
            Anonymous: D3D12_ROOT_PARAMETER_0 {
                Constants: D3D12_ROOT_CONSTANTS {
                    ShaderRegister: 0,
                    RegisterSpace: 0,
                    Num32BitValues: 16,
                },
            },
            ShaderVisibility: D3D12_SHADER_VISIBILITY_VERTEX,
        },
        D3D12_ROOT_PARAMETER {
            ParameterType: D3D12_ROOT_PARAMETER_TYPE_DESCRIPTOR_TABLE,
            Anonymous: D3D12_ROOT_PARAMETER_0 {
                DescriptorTable: D3D12_ROOT_DESCRIPTOR_TABLE {
                    NumDescriptorRanges: 1,
                    pDescriptorRanges: &srv_range,
                },
            },
            ShaderVisibility: D3D12_SHADER_VISIBILITY_PIXEL,
        },
    ];

    let sampler = D3D12_STATIC_SAMPLER_DESC {
        Filter: D3D12_FILTER_MIN_MAG_MIP_LINEAR,
        AddressU: D3D12_TEXTURE_ADDRESS_MODE_WRAP,
        AddressV: D3D12_TEXTURE_ADDRESS_MODE_WRAP,
        AddressW: D3D12_TEXTURE_ADDRESS_MODE_WRAP,
        ComparisonFunc: D3D12_COMPARISON_FUNC_ALWAYS,
        BorderColor: D3D12_STATIC_BORDER_COLOR_TRANSPARENT_BLACK,
        ShaderVisibility: D3D12_SHADER_VISIBILITY_PIXEL,
        ..Default::default()
    };

    let desc = D3D12_ROOT_SIGNATURE_DESC {
        NumParameters: parameters.len() as u32,
        pParameters: parameters.as_ptr(),
        NumStaticSamplers: 1,
        pStaticSamplers: &sampler,
        Flags: D3D12_ROOT_SIGNATURE_FLAG_ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT
            | D3D12_ROOT_SIGNATURE_FLAG_DENY_HULL_SHADER_ROOT_ACCESS
            | D3D12_ROOT_SIGNATURE_FLAG_DENY_DOMAIN_SHADER_ROOT_ACCESS
            | D3D12_ROOT_SIGNATURE_FLAG_DENY_GEOMETRY_SHADER_ROOT_ACCESS,
    };

    let mut blob = None;
    let blob = unsafe {
        D3D12SerializeRootSignature(&desc, D3D_ROOT_SIGNATURE_VERSION_1, &mut blob, None)
    }
    .map(|()| blob.unwrap())?;

    unsafe {
        device.CreateRootSignature(
            0,
            std::slice::from_raw_parts(blob.GetBufferPointer() as _, blob.GetBufferSize()),
        )
    }
}

fn create_pipeline_state(
    device: &ID3D12Device,
    rtv_format: DXGI_FORMAT,
    root_signature: &ID3D12RootSignature,
) -> Result<ID3D12PipelineState> {
    let vertex_shader = compile_shader(VERTEX_SHADER, s!("main"), s!("vs_5_0"))?;
    let pixel_shader = compile_shader(PIXEL_SHADER, s!("main"), s!("ps_5_0"))?;

    let input_layout = [
        input_element(
            s!("POSITION"),
            std::mem::offset_of!(DrawVert, pos) as u32,
            DXGI_FORMAT_R32G32_FLOAT,
        ),
        input_element(
            s!("TEXCOORD"),
            std::mem::offset_of!(DrawVert, uv) as u32,
            DXGI_FORMAT_R32G32_FLOAT,
        ),
        input_element(
            s!("COLOR"),
            std::mem::offset_of!(DrawVert, col) as u32,
            DXGI_FORMAT_R8G8B8A8_UNORM,
        ),
    ];

    let shader_bytecode = |blob: &ID3DBlob| unsafe {
        D3D12_SHADER_BYTECODE {
            pShaderBytecode: blob.GetBufferPointer(),
            BytecodeLength: blob.GetBufferSize(),
        }
    };

    let default_stencil_op = D3D12_DEPTH_STENCILOP_DESC {
        StencilFailOp: D3D12_STENCIL_OP_KEEP,
        StencilDepthFailOp: D3D12_STENCIL_OP_KEEP,
        StencilPassOp: D3D12_STENCIL_OP_KEEP,
        StencilFunc: D3D12_COMPARISON_FUNC_ALWAYS,
    };

    let mut desc = D3D12_GRAPHICS_PIPELINE_STATE_DESC {
        pRootSignature: unsafe { std::mem::transmute_copy(root_signature) },
        VS: shader_bytecode(&vertex_shader),
        PS: shader_bytecode(&pixel_shader),
        BlendState: D3D12_BLEND_DESC {
            AlphaToCoverageEnable: false.into(),
            IndependentBlendEnable: false.into(),
            RenderTarget: [
                // Standard premultiplied-style alpha blend for GUI geometry.
                D3D12_RENDER_TARGET_BLEND_DESC {
                    BlendEnable: true.into(),
                    LogicOpEnable: false.into(),
                    SrcBlend: D3D12_BLEND_SRC_ALPHA,
                    DestBlend: D3D12_BLEND_INV_SRC_ALPHA,
                    BlendOp: D3D12_BLEND_OP_ADD,
                    SrcBlendAlpha: D3D12_BLEND_ONE,
                    DestBlendAlpha: D3D12_BLEND_INV_SRC_ALPHA,
                    BlendOpAlpha: D3D12_BLEND_OP_ADD,
                    LogicOp: D3D12_LOGIC_OP_NOOP,
                    RenderTargetWriteMask: D3D12_COLOR_WRITE_ENABLE_ALL.0 as u8,
                },
                D3D12_RENDER_TARGET_BLEND_DESC::default(),
                D3D12_RENDER_TARGET_BLEND_DESC::default(),
                D3D12_RENDER_TARGET_BLEND_DESC::default(),
                D3D12_RENDER_TARGET_BLEND_DESC::default(),
                D3D12_RENDER_TARGET_BLEND_DESC::default(),
                D3D12_RENDER_TARGET_BLEND_DESC::default(),
                D3D12_RENDER_TARGET_BLEND_DESC::default(),
            ],
        },
        SampleMask: u32::MAX,
        RasterizerState: D3D12_RASTERIZER_DESC {
            FillMode: D3D12_FILL_MODE_SOLID,
            CullMode: D3D12_CULL_MODE_NONE,
            DepthBias: D3D12_DEFAULT_DEPTH_BIAS,
            DepthBiasClamp: D3D12_DEFAULT_DEPTH_BIAS_CLAMP,
            SlopeScaledDepthBias: D3D12_DEFAULT_SLOPE_SCALED_DEPTH_BIAS,
            DepthClipEnable: true.into(),
            ..Default::default()
        },
        DepthStencilState: D3D12_DEPTH_STENCIL_DESC {
            DepthEnable: false.into(),
            DepthWriteMask: D3D12_DEPTH_WRITE_MASK_ALL,
            DepthFunc: D3D12_COMPARISON_FUNC_ALWAYS,
            StencilEnable: false.into(),
            FrontFace: default_stencil_op,
            BackFace: default_stencil_op,
            ..Default::default()
        },
        InputLayout: D3D12_INPUT_LAYOUT_DESC {
            pInputElementDescs: input_layout.as_ptr(),
            NumElements: input_layout.len() as u32,
        },
        PrimitiveTopologyType: D3D12_PRIMITIVE_TOPOLOGY_TYPE_TRIANGLE,
        NumRenderTargets: 1,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    desc.RTVFormats[0] = rtv_format;

    unsafe { device.CreateGraphicsPipelineState(&desc) }
}

fn input_element(
    semantic: PCSTR,
    offset: u32,
    format: DXGI_FORMAT,
) -> D3D12_INPUT_ELEMENT_DESC {
    D3D12_INPUT_ELEMENT_DESC {
        SemanticName: semantic,
        SemanticIndex: 0,
        Format: format,
        InputSlot: 0,
        AlignedByteOffset: offset,
        InputSlotClass: D3D12_INPUT_CLASSIFICATION_PER_VERTEX_DATA,
        InstanceDataStepRate: 0,
    }
}

fn compile_shader(hlsl: &str, entry_point: PCSTR, target: PCSTR) -> Result<ID3DBlob> {
    let mut shader = None;
    let mut errors: Option<ID3DBlob> = None;
    let result = unsafe {
        D3DCompile(
            hlsl.as_ptr() as *const c_void,
            hlsl.len(),
            None,
            None,
            None,
            entry_point,
            target,
            0,
            0,
            &mut shader,
            Some(&mut errors),
        )
    }
    .map(|()| shader.unwrap());

    if result.is_err() {
        if let Some(errors) = errors {
            let message = unsafe {
                String::from_utf8_lossy(std::slice::from_raw_parts(
                    errors.GetBufferPointer() as *const u8,
                    errors.GetBufferSize(),
                ))
                .into_owned()
            };
            error!("GUI shader compilation failed: {message}");
        }
    }

    result
}

/// Builds the font atlas, uploads it into a default-heap texture through an
/// upload buffer, and writes the SRV into the host's heap slot. Uses a
/// one-shot queue and fence; blocks until the copy retires so the upload
/// buffer can be released on return.
fn create_font_texture(
    device: &ID3D12Device,
    context: &mut Context,
    font_srv_cpu_handle: D3D12_CPU_DESCRIPTOR_HANDLE,
    font_srv_gpu_handle: D3D12_GPU_DESCRIPTOR_HANDLE,
) -> Result<ID3D12Resource> {
    let atlas = context.fonts().build_rgba32_texture();
    let (width, height) = (atlas.width, atlas.height);

    let texture = create_texture_resource(device, width, height)?;
    unsafe { texture.SetName(w!("imgui font atlas")) }?;

    let upload_pitch = (width * 4).next_multiple_of(D3D12_TEXTURE_DATA_PITCH_ALIGNMENT);
    let upload_buffer = create_upload_resource(device, (height * upload_pitch) as u64)?;
    copy_atlas_rows(&upload_buffer, atlas.data, width, height, upload_pitch)?;

    // Record the upload copy plus the transition into the sampled state.
    let src = D3D12_TEXTURE_COPY_LOCATION {
        pResource: resource_ref(&upload_buffer),
        Type: D3D12_TEXTURE_COPY_TYPE_PLACED_FOOTPRINT,
        Anonymous: D3D12_TEXTURE_COPY_LOCATION_0 {
            PlacedFootprint: D3D12_PLACED_SUBRESOURCE_FOOTPRINT {
                Footprint: D3D12_SUBRESOURCE_FOOTPRINT {
                    Format: DXGI_FORMAT_R8G8B8A8_UNORM,
                    Width: width,
                    Height: height,
                    Depth: 1,
                    RowPitch: upload_pitch,
                },
                ..Default::default()
            },
        },
    };
    let dst = D3D12_TEXTURE_COPY_LOCATION {
        pResource: resource_ref(&texture),
        Type: D3D12_TEXTURE_COPY_TYPE_SUBRESOURCE_INDEX,
        Anonymous: D3D12_TEXTURE_COPY_LOCATION_0 {
            SubresourceIndex: 0,
        },
    };
    let barrier = D3D12_RESOURCE_BARRIER {
        Type: D3D12_RESOURCE_BARRIER_TYPE_TRANSITION,
        Anonymous: D3D12_RESOURCE_BARRIER_0 {
            Transition: ManuallyDrop::new(D3D12_RESOURCE_TRANSITION_BARRIER {
                pResource: resource_ref(&texture),
                Subresource: D3D12_RESOURCE_BARRIER_ALL_SUBRESOURCES,
                StateBefore: D3D12_RESOURCE_STATE_COPY_DEST,
                StateAfter: D3D12_RESOURCE_STATE_PIXEL_SHADER_RESOURCE,
            }),
        },
        ..Default::default()
    };

    unsafe {
        let queue: ID3D12CommandQueue = device.CreateCommandQueue(&D3D12_COMMAND_QUEUE_DESC {
            Type: D3D12_COMMAND_LIST_TYPE_DIRECT,
            NodeMask: 1,
            ..Default::default()
        })?;
        let allocator: ID3D12CommandAllocator =
            device.CreateCommandAllocator(D3D12_COMMAND_LIST_TYPE_DIRECT)?;
        let command_list: ID3D12GraphicsCommandList =
            device.CreateCommandList(0, D3D12_COMMAND_LIST_TYPE_DIRECT, &allocator, None)?;

        command_list.CopyTextureRegion(&dst, 0, 0, 0, &src, None);
        command_list.ResourceBarrier(&[barrier]);
        command_list.Close()?;

        queue.ExecuteCommandLists(&[Some(command_list.cast()?)]);

        let fence: ID3D12Fence = device.CreateFence(0, D3D12_FENCE_FLAG_NONE)?;
        let event = CreateEventA(None, false, false, None)?;
        queue.Signal(&fence, 1)?;
        fence.SetEventOnCompletion(1, event)?;
        WaitForSingleObject(event, INFINITE);
        CloseHandle(event)?;

        device.CreateShaderResourceView(
            &texture,
            Some(&D3D12_SHADER_RESOURCE_VIEW_DESC {
                Format: DXGI_FORMAT_R8G8B8A8_UNORM,
                ViewDimension: D3D12_SRV_DIMENSION_TEXTURE2D,
                Shader4ComponentMapping: D3D12_DEFAULT_SHADER_4_COMPONENT_MAPPING,
                Anonymous: D3D12_SHADER_RESOURCE_VIEW_DESC_0 {
                    Texture2D: D3D12_TEX2D_SRV {
                        MipLevels: 1,
                        ..Default::default()
                    },
                },
            }),
            font_srv_cpu_handle,
        );
    }

    // Widgets reference the atlas through the GPU handle of the host's slot.
    context.fonts().tex_id = TextureId::new(font_srv_gpu_handle.ptr as usize);

    Ok(texture)
}

fn create_texture_resource(device: &ID3D12Device, width: u32, height: u32) -> Result<ID3D12Resource> {
    let desc = D3D12_RESOURCE_DESC {
        Dimension: D3D12_RESOURCE_DIMENSION_TEXTURE2D,
        Width: width as u64,
        Height: height,
        DepthOrArraySize: 1,
        MipLevels: 1,
        Format: DXGI_FORMAT_R8G8B8A8_UNORM,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            Quality: 0,
        },
        ..Default::default()
    };

    let mut texture: Option<ID3D12Resource> = None;
    unsafe {
        device.CreateCommittedResource(
            &D3D12_HEAP_PROPERTIES {
                Type: D3D12_HEAP_TYPE_DEFAULT,
                ..Default::default()
            },
            D3D12_HEAP_FLAG_NONE,
            &desc,
            D3D12_RESOURCE_STATE_COPY_DEST,
            None,
            &mut texture,
        )?;
    }
    Ok(texture.unwrap())
}

fn create_upload_resource(device: &ID3D12Device, size: u64) -> Result<ID3D12Resource> {
    let desc = D3D12_RESOURCE_DESC {
        Dimension: D3D12_RESOURCE_DIMENSION_BUFFER,
        Width: size,
        Height: 1,
        DepthOrArraySize: 1,
        MipLevels: 1,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            Quality: 0,
        },
        Layout: D3D12_TEXTURE_LAYOUT_ROW_MAJOR,
        ..Default::default()
    };

    let mut buffer: Option<ID3D12Resource> = None;
    unsafe {
        device.CreateCommittedResource(
            &D3D12_HEAP_PROPERTIES {
                Type: D3D12_HEAP_TYPE_UPLOAD,
                ..Default::default()
            },
            D3D12_HEAP_FLAG_NONE,
            &desc,
            D3D12_RESOURCE_STATE_GENERIC_READ,
            None,
            &mut buffer,
        )?;
    }
    Ok(buffer.unwrap())
}

/// Copies the tightly packed atlas rows into the pitch-aligned upload buffer.
fn copy_atlas_rows(
    upload_buffer: &ID3D12Resource,
    data: &[u8],
    width: u32,
    height: u32,
    upload_pitch: u32,
) -> Result<()> {
    let row_size = width as usize * 4;

    unsafe {
        let mut mapped = std::ptr::null_mut();
        upload_buffer.Map(
            0,
            Some(&D3D12_RANGE { Begin: 0, End: 0 }),
            Some(&mut mapped),
        )?;
        let mapped: *mut u8 = mapped.cast();

        for row in 0..height as usize {
            std::ptr::copy_nonoverlapping(
                data.as_ptr().add(row * row_size),
                mapped.add(row * upload_pitch as usize),
                row_size,
            );
        }
        upload_buffer.Unmap(0, None);
    }
    Ok(())
}

/// Clones a resource pointer into the form the barrier/copy-location structs
/// expect without touching its reference count.
fn resource_ref(resource: &ID3D12Resource) -> ManuallyDrop<Option<ID3D12Resource>> {
    unsafe { std::mem::transmute_copy(resource) }
}
