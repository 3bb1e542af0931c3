use crate::app_error::AppResult;
use eyre::WrapErr;
use tracing::info;
use tracing::warn;
use windows::core::IUnknown;
use windows::Win32::Graphics::Direct3D::D3D_FEATURE_LEVEL_11_0;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::*;

/// Creates the DXGI factory, the D3D12 device on the default adapter at the
/// minimum feature level, and the direct command queue every frame submits
/// to. There is deliberately no adapter enumeration or fallback; any failure
/// here is fatal to startup.
pub fn create_device() -> AppResult<(IDXGIFactory4, ID3D12Device, ID3D12CommandQueue)> {
    let mut factory_flags = DXGI_CREATE_FACTORY_FLAGS(0);
    if cfg!(debug_assertions) {
        unsafe {
            let mut debug: Option<ID3D12Debug> = None;
            if let Some(debug) = D3D12GetDebugInterface(&mut debug).ok().and(debug) {
                debug.EnableDebugLayer();
                factory_flags |= DXGI_CREATE_FACTORY_DEBUG;
                info!("D3D12 debug layer enabled");
            } else {
                warn!("D3D12 debug layer unavailable");
            }
        }
    }

    let factory: IDXGIFactory4 =
        unsafe { CreateDXGIFactory2(factory_flags) }.wrap_err("creating DXGI factory")?;

    let mut device: Option<ID3D12Device> = None;
    unsafe { D3D12CreateDevice(None::<&IUnknown>, D3D_FEATURE_LEVEL_11_0, &mut device) }
        .wrap_err("creating D3D12 device")?;
    let device = device.unwrap();

    let command_queue: ID3D12CommandQueue = unsafe {
        device.CreateCommandQueue(&D3D12_COMMAND_QUEUE_DESC {
            Type: D3D12_COMMAND_LIST_TYPE_DIRECT,
            ..Default::default()
        })
    }
    .wrap_err("creating direct command queue")?;

    Ok((factory, device, command_queue))
}
