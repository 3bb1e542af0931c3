use imgui::internal::RawWrapper;
use imgui::DrawCmd;
use imgui::DrawData;
use imgui::DrawIdx;
use imgui::DrawVert;
use std::ffi::c_void;
use windows::core::Result;
use windows::Win32::Foundation::RECT;
use windows::Win32::Graphics::Direct3D::D3D_PRIMITIVE_TOPOLOGY_TRIANGLELIST;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_R16_UINT;
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_R32_UINT;
use windows::Win32::Graphics::Dxgi::Common::DXGI_SAMPLE_DESC;

// Growth slack so steady widget churn does not reallocate every frame.
const VERTEX_SLACK: usize = 5000;
const INDEX_SLACK: usize = 10000;

/// Upload-heap vertex/index buffers for one frame in flight. Grown on demand,
/// never shrunk.
#[derive(Default)]
pub(crate) struct FrameBuffers {
    vertex_buffer: Option<ID3D12Resource>,
    index_buffer: Option<ID3D12Resource>,
    vertex_capacity: usize,
    index_capacity: usize,
}

impl FrameBuffers {
    pub(crate) fn render(
        &mut self,
        device: &ID3D12Device,
        root_signature: &ID3D12RootSignature,
        pipeline_state: &ID3D12PipelineState,
        draw_data: &DrawData,
        command_list: &ID3D12GraphicsCommandList,
    ) -> Result<()> {
        if draw_data.total_vtx_count == 0 {
            return Ok(());
        }
        self.ensure_capacity(
            device,
            draw_data.total_vtx_count as usize,
            draw_data.total_idx_count as usize,
        )?;
        self.upload(draw_data)?;
        self.setup_render_state(root_signature, pipeline_state, draw_data, command_list);
        self.replay(root_signature, pipeline_state, draw_data, command_list);
        Ok(())
    }

    fn ensure_capacity(
        &mut self,
        device: &ID3D12Device,
        vertices: usize,
        indices: usize,
    ) -> Result<()> {
        if let Some(capacity) = next_capacity(self.vertex_capacity, vertices, VERTEX_SLACK) {
            self.vertex_buffer = Some(create_geometry_buffer(
                device,
                capacity * std::mem::size_of::<DrawVert>(),
            )?);
            self.vertex_capacity = capacity;
        }
        if let Some(capacity) = next_capacity(self.index_capacity, indices, INDEX_SLACK) {
            self.index_buffer = Some(create_geometry_buffer(
                device,
                capacity * std::mem::size_of::<DrawIdx>(),
            )?);
            self.index_capacity = capacity;
        }
        Ok(())
    }

    /// Copies every draw list into the two contiguous upload buffers.
    fn upload(&self, draw_data: &DrawData) -> Result<()> {
        let (Some(vertex_buffer), Some(index_buffer)) =
            (self.vertex_buffer.as_ref(), self.index_buffer.as_ref())
        else {
            return Ok(());
        };

        unsafe {
            let mut vtx_dst = map(vertex_buffer)?.cast::<DrawVert>();
            let mut idx_dst = map(index_buffer)?.cast::<DrawIdx>();

            for draw_list in draw_data.draw_lists() {
                let vtx = draw_list.vtx_buffer();
                std::ptr::copy_nonoverlapping(vtx.as_ptr(), vtx_dst, vtx.len());
                vtx_dst = vtx_dst.add(vtx.len());

                let idx = draw_list.idx_buffer();
                std::ptr::copy_nonoverlapping(idx.as_ptr(), idx_dst, idx.len());
                idx_dst = idx_dst.add(idx.len());
            }

            vertex_buffer.Unmap(0, None);
            index_buffer.Unmap(0, None);
        }
        Ok(())
    }

    /// Replays the draw commands. The buffers were merged, so offsets into
    /// them are tracked per draw list.
    fn replay(
        &self,
        root_signature: &ID3D12RootSignature,
        pipeline_state: &ID3D12PipelineState,
        draw_data: &DrawData,
        command_list: &ID3D12GraphicsCommandList,
    ) {
        let clip_off = draw_data.display_pos;
        let mut vtx_offset = 0;
        let mut idx_offset = 0;

        for draw_list in draw_data.draw_lists() {
            for command in draw_list.commands() {
                match command {
                    DrawCmd::Elements { count, cmd_params } => {
                        let clip_min = [
                            cmd_params.clip_rect[0] - clip_off[0],
                            cmd_params.clip_rect[1] - clip_off[1],
                        ];
                        let clip_max = [
                            cmd_params.clip_rect[2] - clip_off[0],
                            cmd_params.clip_rect[3] - clip_off[1],
                        ];
                        if clip_max[0] <= clip_min[0] || clip_max[1] <= clip_min[1] {
                            continue;
                        }

                        let scissor = RECT {
                            left: clip_min[0] as i32,
                            top: clip_min[1] as i32,
                            right: clip_max[0] as i32,
                            bottom: clip_max[1] as i32,
                        };
                        let texture = D3D12_GPU_DESCRIPTOR_HANDLE {
                            ptr: cmd_params.texture_id.id() as u64,
                        };

                        unsafe {
                            command_list.SetGraphicsRootDescriptorTable(1, texture);
                            command_list.RSSetScissorRects(&[scissor]);
                            command_list.DrawIndexedInstanced(
                                count as u32,
                                1,
                                (cmd_params.idx_offset + idx_offset) as u32,
                                (cmd_params.vtx_offset + vtx_offset) as i32,
                                0,
                            );
                        }
                    }
                    DrawCmd::ResetRenderState => self.setup_render_state(
                        root_signature,
                        pipeline_state,
                        draw_data,
                        command_list,
                    ),
                    DrawCmd::RawCallback { callback, raw_cmd } => unsafe {
                        callback(draw_list.raw(), raw_cmd)
                    },
                }
            }
            idx_offset += draw_list.idx_buffer().len();
            vtx_offset += draw_list.vtx_buffer().len();
        }
    }

    fn setup_render_state(
        &self,
        root_signature: &ID3D12RootSignature,
        pipeline_state: &ID3D12PipelineState,
        draw_data: &DrawData,
        command_list: &ID3D12GraphicsCommandList,
    ) {
        let (Some(vertex_buffer), Some(index_buffer)) =
            (self.vertex_buffer.as_ref(), self.index_buffer.as_ref())
        else {
            return;
        };

        let projection = projection_matrix(draw_data.display_pos, draw_data.display_size);

        let viewport = D3D12_VIEWPORT {
            Width: draw_data.display_size[0],
            Height: draw_data.display_size[1],
            MinDepth: 0.0,
            MaxDepth: 1.0,
            ..Default::default()
        };

        let vertex_stride = std::mem::size_of::<DrawVert>();
        let vbv = D3D12_VERTEX_BUFFER_VIEW {
            BufferLocation: unsafe { vertex_buffer.GetGPUVirtualAddress() },
            SizeInBytes: (self.vertex_capacity * vertex_stride) as u32,
            StrideInBytes: vertex_stride as u32,
        };

        let index_stride = std::mem::size_of::<DrawIdx>();
        let ibv = D3D12_INDEX_BUFFER_VIEW {
            BufferLocation: unsafe { index_buffer.GetGPUVirtualAddress() },
            SizeInBytes: (self.index_capacity * index_stride) as u32,
            Format: if index_stride == 2 {
                DXGI_FORMAT_R16_UINT
            } else {
                DXGI_FORMAT_R32_UINT
            },
        };

        unsafe {
            command_list.RSSetViewports(&[viewport]);
            command_list.IASetVertexBuffers(0, Some(&[vbv]));
            command_list.IASetIndexBuffer(Some(&ibv));
            command_list.IASetPrimitiveTopology(D3D_PRIMITIVE_TOPOLOGY_TRIANGLELIST);
            command_list.SetGraphicsRootSignature(root_signature);
            command_list.SetPipelineState(pipeline_state);
            command_list.SetGraphicsRoot32BitConstants(
                0,
                16,
                projection.as_ptr() as *const c_void,
                0,
            );
            command_list.OMSetBlendFactor(Some(&[0.0, 0.0, 0.0, 0.0]));
        }
    }
}

/// New capacity if `required` does not fit in `current`, `None` otherwise.
fn next_capacity(current: usize, required: usize, slack: usize) -> Option<usize> {
    (current < required).then_some(required + slack)
}

/// Orthographic projection from GUI display space (top-left origin) to clip
/// space, column-major as consumed by the vertex shader's root constants.
fn projection_matrix(display_pos: [f32; 2], display_size: [f32; 2]) -> [[f32; 4]; 4] {
    let l = display_pos[0];
    let r = display_pos[0] + display_size[0];
    let t = display_pos[1];
    let b = display_pos[1] + display_size[1];

    [
        [2.0 / (r - l), 0.0, 0.0, 0.0],
        [0.0, 2.0 / (t - b), 0.0, 0.0],
        [0.0, 0.0, 0.5, 0.0],
        [(r + l) / (l - r), (t + b) / (b - t), 0.5, 1.0],
    ]
}

fn create_geometry_buffer(device: &ID3D12Device, size: usize) -> Result<ID3D12Resource> {
    let desc = D3D12_RESOURCE_DESC {
        Dimension: D3D12_RESOURCE_DIMENSION_BUFFER,
        Width: size as u64,
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

unsafe fn map(resource: &ID3D12Resource) -> Result<*mut u8> {
    let mut mapped = std::ptr::null_mut();
    resource.Map(0, None, Some(&mut mapped))?;
    Ok(mapped.cast())
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgui::internal::RawWrapper;
    use pretty_assertions::assert_eq;

    fn transform(m: &[[f32; 4]; 4], p: [f32; 2]) -> [f32; 2] {
        [
            p[0] * m[0][0] + p[1] * m[1][0] + m[3][0],
            p[0] * m[0][1] + p[1] * m[1][1] + m[3][1],
        ]
    }

    #[test]
    fn projection_maps_display_corners_to_clip_corners() {
        let m = projection_matrix([0.0, 0.0], [1280.0, 800.0]);
        assert_eq!(transform(&m, [0.0, 0.0]), [-1.0, 1.0]);
        assert_eq!(transform(&m, [1280.0, 800.0]), [1.0, -1.0]);
        assert_eq!(transform(&m, [640.0, 400.0]), [0.0, 0.0]);
    }

    #[test]
    fn projection_respects_display_offset() {
        let m = projection_matrix([100.0, 50.0], [200.0, 100.0]);
        assert_eq!(transform(&m, [100.0, 50.0]), [-1.0, 1.0]);
        assert_eq!(transform(&m, [300.0, 150.0]), [1.0, -1.0]);
    }

    // User callbacks receive the raw draw list pointer; it must describe the
    // same geometry the safe accessors hand to the upload path. Builds a real
    // GUI frame, so it is the only test here that creates a context.
    #[test]
    fn raw_draw_list_matches_safe_accessors() {
        let mut context = imgui::Context::create();
        context.set_ini_filename(None);
        context.io_mut().display_size = [1280.0, 800.0];
        context.io_mut().delta_time = 1.0 / 60.0;
        context.fonts().build_rgba32_texture();

        let ui = context.new_frame();
        ui.window("raw view").build(|| {
            ui.button("press");
        });

        let draw_data = context.render();
        assert!(draw_data.total_vtx_count > 0);
        for draw_list in draw_data.draw_lists() {
            let raw = unsafe { draw_list.raw() };
            assert_eq!(raw.VtxBuffer.Size as usize, draw_list.vtx_buffer().len());
            assert_eq!(raw.IdxBuffer.Size as usize, draw_list.idx_buffer().len());
        }
    }

    #[test]
    fn buffers_grow_only_when_capacity_is_exceeded() {
        assert_eq!(next_capacity(0, 300, VERTEX_SLACK), Some(300 + VERTEX_SLACK));
        assert_eq!(next_capacity(5300, 300, VERTEX_SLACK), None);
        assert_eq!(next_capacity(5300, 5300, VERTEX_SLACK), None);
        assert_eq!(
            next_capacity(5300, 5301, VERTEX_SLACK),
            Some(5301 + VERTEX_SLACK)
        );
    }
}
