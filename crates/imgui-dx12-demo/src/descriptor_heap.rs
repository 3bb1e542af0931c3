use crate::app_error::AppResult;
use crate::swap_chain::FRAME_COUNT;
use eyre::WrapErr;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::IDXGISwapChain3;

/// CPU-only heap holding one render-target view per back buffer. Returns the
/// heap and the device's RTV descriptor increment, which must always be
/// queried, never assumed.
pub fn create_rtv_heap(device: &ID3D12Device) -> AppResult<(ID3D12DescriptorHeap, u32)> {
    let heap: ID3D12DescriptorHeap = unsafe {
        device.CreateDescriptorHeap(&D3D12_DESCRIPTOR_HEAP_DESC {
            NumDescriptors: FRAME_COUNT,
            Type: D3D12_DESCRIPTOR_HEAP_TYPE_RTV,
            ..Default::default()
        })
    }
    .wrap_err("creating RTV descriptor heap")?;

    let increment =
        unsafe { device.GetDescriptorHandleIncrementSize(D3D12_DESCRIPTOR_HEAP_TYPE_RTV) };

    Ok((heap, increment))
}

/// Shader-visible heap with a single slot, reserved for the GUI renderer's
/// font atlas view.
pub fn create_srv_heap(device: &ID3D12Device) -> AppResult<ID3D12DescriptorHeap> {
    let heap = unsafe {
        device.CreateDescriptorHeap(&D3D12_DESCRIPTOR_HEAP_DESC {
            NumDescriptors: 1,
            Type: D3D12_DESCRIPTOR_HEAP_TYPE_CBV_SRV_UAV,
            Flags: D3D12_DESCRIPTOR_HEAP_FLAG_SHADER_VISIBLE,
            ..Default::default()
        })
    }
    .wrap_err("creating shader-visible SRV heap")?;

    Ok(heap)
}

/// CPU handle for back buffer `index`: heap base offset by the device's
/// descriptor increment.
pub fn rtv_handle(
    base: D3D12_CPU_DESCRIPTOR_HANDLE,
    index: u32,
    increment: u32,
) -> D3D12_CPU_DESCRIPTOR_HANDLE {
    D3D12_CPU_DESCRIPTOR_HANDLE {
        ptr: base.ptr + (index * increment) as usize,
    }
}

/// Retrieves each back buffer from the swap chain and binds a render-target
/// view for it at its slot in the RTV heap.
pub fn create_render_target_views(
    device: &ID3D12Device,
    swap_chain: &IDXGISwapChain3,
    rtv_heap: &ID3D12DescriptorHeap,
    increment: u32,
) -> AppResult<[ID3D12Resource; FRAME_COUNT as usize]> {
    let base = unsafe { rtv_heap.GetCPUDescriptorHandleForHeapStart() };

    let render_targets = array_init::try_array_init(|i| -> AppResult<ID3D12Resource> {
        let buffer: ID3D12Resource = unsafe { swap_chain.GetBuffer(i as u32) }
            .wrap_err("retrieving swap chain buffer")?;
        unsafe {
            device.CreateRenderTargetView(&buffer, None, rtv_handle(base, i as u32, increment));
        }
        Ok(buffer)
    })?;

    Ok(render_targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn handles_step_by_the_queried_increment() {
        let base = D3D12_CPU_DESCRIPTOR_HANDLE { ptr: 0x1000 };
        assert_eq!(rtv_handle(base, 0, 32).ptr, 0x1000);
        assert_eq!(rtv_handle(base, 1, 32).ptr, 0x1020);
    }

    proptest! {
        #[test]
        fn handle_equals_base_plus_index_times_increment(
            base in 0usize..0x1_0000_0000,
            increment in 1u32..4096,
            index in 0u32..FRAME_COUNT,
        ) {
            let handle = rtv_handle(D3D12_CPU_DESCRIPTOR_HANDLE { ptr: base }, index, increment);
            prop_assert_eq!(handle.ptr, base + (index * increment) as usize);
        }
    }
}
