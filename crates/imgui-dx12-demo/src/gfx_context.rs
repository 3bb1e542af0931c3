use crate::app_error::AppResult;
use crate::descriptor_heap::create_render_target_views;
use crate::descriptor_heap::create_rtv_heap;
use crate::descriptor_heap::create_srv_heap;
use crate::descriptor_heap::rtv_handle;
use crate::device::create_device;
use crate::pacing::FramePacer;
use crate::swap_chain::create_swap_chain;
use crate::swap_chain::FRAME_COUNT;
use crate::ui::UiInput;
use crate::ui::UiState;
use eyre::WrapErr;
use std::mem::ManuallyDrop;
use tracing::error;
use windows::core::Interface;
use windows::Win32::Foundation::CloseHandle;
use windows::Win32::Foundation::HANDLE;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::IDXGISwapChain3;
use windows::Win32::Graphics::Dxgi::DXGI_PRESENT;
use windows::Win32::System::Threading::CreateEventA;
use windows::Win32::System::Threading::WaitForSingleObjectEx;
use windows::Win32::System::Threading::INFINITE;

const CLEAR_COLOR: [f32; 4] = [0.0, 0.3, 0.3, 1.0];

/// Owns every device-side object for the lifetime of the run: the device and
/// queue, the swap chain and its render targets, the descriptor heaps, one
/// command allocator per back buffer, and the fence that paces reuse of
/// those allocators.
pub struct GfxContext {
    device: ID3D12Device,
    command_queue: ID3D12CommandQueue,
    swap_chain: IDXGISwapChain3,
    rtv_heap: ID3D12DescriptorHeap,
    rtv_increment: u32,
    srv_heap: ID3D12DescriptorHeap,
    render_targets: [ID3D12Resource; FRAME_COUNT as usize],
    command_allocators: [ID3D12CommandAllocator; FRAME_COUNT as usize],
    command_list: ID3D12GraphicsCommandList,
    fence: ID3D12Fence,
    fence_event: HANDLE,
    pacer: FramePacer,
    frame_index: u32,
}

impl GfxContext {
    pub fn new(hwnd: HWND) -> AppResult<Self> {
        let (factory, device, command_queue) = create_device()?;
        let swap_chain = create_swap_chain(&factory, &command_queue, hwnd)?;
        let frame_index = unsafe { swap_chain.GetCurrentBackBufferIndex() };

        let (rtv_heap, rtv_increment) = create_rtv_heap(&device)?;
        let render_targets =
            create_render_target_views(&device, &swap_chain, &rtv_heap, rtv_increment)?;
        let srv_heap = create_srv_heap(&device)?;

        let command_allocators = array_init::try_array_init(|_| unsafe {
            device.CreateCommandAllocator(D3D12_COMMAND_LIST_TYPE_DIRECT)
        })
        .wrap_err("creating command allocators")?;

        let command_list: ID3D12GraphicsCommandList = unsafe {
            device.CreateCommandList(
                0,
                D3D12_COMMAND_LIST_TYPE_DIRECT,
                &command_allocators[frame_index as usize],
                None,
            )
        }
        .wrap_err("creating command list")?;
        // Created open; the render loop expects to begin each frame with a
        // Reset.
        unsafe { command_list.Close() }.wrap_err("closing freshly created command list")?;

        let fence: ID3D12Fence = unsafe { device.CreateFence(0, D3D12_FENCE_FLAG_NONE) }
            .wrap_err("creating frame fence")?;
        let fence_event =
            unsafe { CreateEventA(None, false, false, None) }.wrap_err("creating fence event")?;

        let mut context = Self {
            device,
            command_queue,
            swap_chain,
            rtv_heap,
            rtv_increment,
            srv_heap,
            render_targets,
            command_allocators,
            command_list,
            fence,
            fence_event,
            pacer: FramePacer::new(),
            frame_index,
        };

        // Wait for setup to finish on the GPU before the first frame records.
        let setup = context.pacer.flush(context.frame_index as usize);
        unsafe { context.command_queue.Signal(&context.fence, setup) }
            .wrap_err("signaling setup fence")?;
        context.wait_for_fence(setup)?;

        Ok(context)
    }

    pub fn device(&self) -> &ID3D12Device {
        &self.device
    }

    /// CPU and GPU handles of the single shader-visible slot the GUI
    /// renderer puts its font atlas view in.
    pub fn font_srv_handles(&self) -> (D3D12_CPU_DESCRIPTOR_HANDLE, D3D12_GPU_DESCRIPTOR_HANDLE) {
        unsafe {
            (
                self.srv_heap.GetCPUDescriptorHandleForHeapStart(),
                self.srv_heap.GetGPUDescriptorHandleForHeapStart(),
            )
        }
    }

    /// Records and submits one frame, presents with vsync, then advances the
    /// pacer, blocking only when the next allocator's prior list has not yet
    /// retired on the GPU.
    pub fn render_frame(&mut self, ui: &mut UiState, input: &mut UiInput) -> AppResult<()> {
        self.record_frame(ui, input)?;

        let command_list = self
            .command_list
            .cast::<ID3D12CommandList>()
            .wrap_err("casting command list for submission")?;
        unsafe { self.command_queue.ExecuteCommandLists(&[Some(command_list)]) };

        unsafe { self.swap_chain.Present(1, DXGI_PRESENT(0)) }
            .ok()
            .wrap_err("presenting frame")?;

        self.move_to_next_frame()
    }

    fn record_frame(&mut self, ui: &mut UiState, input: &mut UiInput) -> AppResult<()> {
        let index = self.frame_index as usize;

        // move_to_next_frame proved the GPU has retired this allocator's
        // previous list, so the reset cannot pull recording out from under
        // in-flight work.
        let allocator = &self.command_allocators[index];
        unsafe { allocator.Reset() }.wrap_err("resetting command allocator")?;
        unsafe { self.command_list.Reset(allocator, None) }.wrap_err("resetting command list")?;

        unsafe {
            self.command_list.ResourceBarrier(&[transition_barrier(
                &self.render_targets[index],
                D3D12_RESOURCE_STATE_PRESENT,
                D3D12_RESOURCE_STATE_RENDER_TARGET,
            )]);
        }

        let rtv = rtv_handle(
            unsafe { self.rtv_heap.GetCPUDescriptorHandleForHeapStart() },
            self.frame_index,
            self.rtv_increment,
        );

        unsafe {
            self.command_list.OMSetRenderTargets(1, Some(&rtv), false, None);
            self.command_list.ClearRenderTargetView(rtv, &CLEAR_COLOR, None);
            self.command_list
                .SetDescriptorHeaps(&[Some(self.srv_heap.clone())]);
        }

        ui.draw(input, &self.command_list)?;

        unsafe {
            self.command_list.ResourceBarrier(&[transition_barrier(
                &self.render_targets[index],
                D3D12_RESOURCE_STATE_RENDER_TARGET,
                D3D12_RESOURCE_STATE_PRESENT,
            )]);
        }
        unsafe { self.command_list.Close() }.wrap_err("closing command list")?;

        Ok(())
    }

    fn move_to_next_frame(&mut self) -> AppResult<()> {
        let submitted = self.frame_index as usize;
        let signal = self.pacer.signal_value(submitted);
        unsafe { self.command_queue.Signal(&self.fence, signal) }
            .wrap_err("signaling frame fence")?;

        self.frame_index = unsafe { self.swap_chain.GetCurrentBackBufferIndex() };
        let reuse_target = self.pacer.begin_frame(self.frame_index as usize, signal);
        self.wait_for_fence(reuse_target)
    }

    fn wait_for_fence(&self, value: u64) -> AppResult<()> {
        if unsafe { self.fence.GetCompletedValue() } < value {
            unsafe {
                self.fence
                    .SetEventOnCompletion(value, self.fence_event)
                    .wrap_err("arming fence event")?;
                WaitForSingleObjectEx(self.fence_event, INFINITE, false);
            }
        }
        Ok(())
    }

    fn drain_gpu(&mut self) -> AppResult<()> {
        let target = self.pacer.last_scheduled();
        unsafe { self.command_queue.Signal(&self.fence, target) }
            .wrap_err("signaling drain fence")?;
        self.wait_for_fence(target)
    }
}

impl Drop for GfxContext {
    fn drop(&mut self) {
        // The GPU may still be reading resources this struct is about to
        // release.
        if let Err(report) = self.drain_gpu() {
            error!("failed to drain GPU work on shutdown: {report}");
        }
        if let Err(e) = unsafe { CloseHandle(self.fence_event) } {
            error!("failed to close fence event: {e}");
        }
    }
}

fn transition_barrier(
    resource: &ID3D12Resource,
    state_before: D3D12_RESOURCE_STATES,
    state_after: D3D12_RESOURCE_STATES,
) -> D3D12_RESOURCE_BARRIER {
    D3D12_RESOURCE_BARRIER {
        Type: D3D12_RESOURCE_BARRIER_TYPE_TRANSITION,
        Flags: D3D12_RESOURCE_BARRIER_FLAG_NONE,
        Anonymous: D3D12_RESOURCE_BARRIER_0 {
            Transition: ManuallyDrop::new(D3D12_RESOURCE_TRANSITION_BARRIER {
                pResource: unsafe { std::mem::transmute_copy(resource) },
                StateBefore: state_before,
                StateAfter: state_after,
                Subresource: D3D12_RESOURCE_BARRIER_ALL_SUBRESOURCES,
            }),
        },
    }
}
