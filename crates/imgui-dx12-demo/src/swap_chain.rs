use crate::app_error::AppResult;
use eyre::WrapErr;
use windows::core::Interface;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D12::ID3D12CommandQueue;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;

/// Two back buffers, double buffered.
pub const FRAME_COUNT: u32 = 2;

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

/// Format shared by the swap chain, the render-target views, and the GUI
/// renderer's pipeline state.
pub const BACK_BUFFER_FORMAT: DXGI_FORMAT = DXGI_FORMAT_R8G8B8A8_UNORM;

/// Creates the fixed-size flip-discard presentation surface bound to the
/// window and the direct queue. Resizing the window later does not recreate
/// the buffers; the compositor scales the fixed-size image instead.
pub fn create_swap_chain(
    factory: &IDXGIFactory4,
    command_queue: &ID3D12CommandQueue,
    hwnd: HWND,
) -> AppResult<IDXGISwapChain3> {
    let desc = DXGI_SWAP_CHAIN_DESC1 {
        BufferCount: FRAME_COUNT,
        Width: WINDOW_WIDTH,
        Height: WINDOW_HEIGHT,
        Format: BACK_BUFFER_FORMAT,
        BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
        SwapEffect: DXGI_SWAP_EFFECT_FLIP_DISCARD,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            ..Default::default()
        },
        ..Default::default()
    };

    let swap_chain: IDXGISwapChain1 = unsafe {
        factory.CreateSwapChainForHwnd(command_queue, hwnd, &desc, None, None)
    }
    .wrap_err("creating swap chain")?;
    let swap_chain: IDXGISwapChain3 = swap_chain
        .cast()
        .wrap_err("querying IDXGISwapChain3")?;

    unsafe {
        factory
            .MakeWindowAssociation(hwnd, DXGI_MWA_NO_ALT_ENTER)
            .wrap_err("disabling alt-enter fullscreen transitions")?;
    }

    Ok(swap_chain)
}
