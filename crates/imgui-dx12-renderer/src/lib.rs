//! Dear ImGui render backend for Direct3D 12, following the reference
//! `imgui_impl_dx12` backend.
//!
//! The host application owns the device, the swap chain, and one
//! shader-visible SRV heap slot; this crate owns the GUI pipeline state, the
//! font atlas texture, and the per-frame geometry upload buffers. Draw
//! commands are appended to a command list the host is currently recording.

mod buffers;
mod device_objects;

use device_objects::DeviceObjects;
use imgui::BackendFlags;
use imgui::Context;
use imgui::DrawData;
use imgui::TextureId;
use windows::core::Result;
use windows::Win32::Graphics::Direct3D12::ID3D12Device;
use windows::Win32::Graphics::Direct3D12::ID3D12GraphicsCommandList;
use windows::Win32::Graphics::Direct3D12::D3D12_CPU_DESCRIPTOR_HANDLE;
use windows::Win32::Graphics::Direct3D12::D3D12_GPU_DESCRIPTOR_HANDLE;
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT;

pub struct Renderer {
    device: ID3D12Device,
    rtv_format: DXGI_FORMAT,
    font_srv_cpu_handle: D3D12_CPU_DESCRIPTOR_HANDLE,
    font_srv_gpu_handle: D3D12_GPU_DESCRIPTOR_HANDLE,
    frames_in_flight: usize,
    frame_index: usize,
    device_objects: Option<DeviceObjects>,
}

impl Renderer {
    /// `font_srv_cpu_handle`/`font_srv_gpu_handle` must address the same slot
    /// of a shader-visible descriptor heap that stays bound while GUI draw
    /// commands execute.
    pub fn new(
        context: &mut Context,
        device: ID3D12Device,
        frames_in_flight: usize,
        rtv_format: DXGI_FORMAT,
        font_srv_cpu_handle: D3D12_CPU_DESCRIPTOR_HANDLE,
        font_srv_gpu_handle: D3D12_GPU_DESCRIPTOR_HANDLE,
    ) -> Result<Self> {
        context.set_renderer_name(Some(format!(
            "imgui_dx12_renderer {}",
            env!("CARGO_PKG_VERSION")
        )));
        context
            .io_mut()
            .backend_flags
            .insert(BackendFlags::RENDERER_HAS_VTX_OFFSET);

        Ok(Renderer {
            device,
            rtv_format,
            font_srv_cpu_handle,
            font_srv_gpu_handle,
            frames_in_flight,
            frame_index: usize::MAX,
            device_objects: None,
        })
    }

    /// Creates the pipeline state and font atlas on first use.
    pub fn new_frame(&mut self, context: &mut Context) -> Result<()> {
        if self.device_objects.is_none() {
            self.device_objects = Some(DeviceObjects::new(
                context,
                &self.device,
                self.rtv_format,
                self.font_srv_cpu_handle,
                self.font_srv_gpu_handle,
                self.frames_in_flight,
            )?);
        }
        Ok(())
    }

    /// Appends the frame's GUI draw commands to `command_list`. The list must
    /// be open, with the render target and the shader-visible heap already
    /// bound.
    pub fn render_draw_data(
        &mut self,
        draw_data: &DrawData,
        command_list: &ID3D12GraphicsCommandList,
    ) -> Result<()> {
        if draw_data.display_size.iter().any(|size| *size <= 0.0) {
            return Ok(());
        }

        let Some(device_objects) = self.device_objects.as_mut() else {
            return Ok(());
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        device_objects.render(
            &self.device,
            self.frame_index % self.frames_in_flight,
            draw_data,
            command_list,
        )
    }

    /// Drops every GPU object this backend created. The font texture id is
    /// cleared so a later `new_frame` rebuilds the atlas.
    pub fn invalidate_device_objects(&mut self, context: &mut Context) {
        context.fonts().tex_id = TextureId::new(0);
        self.device_objects = None;
    }
}
