use crate::app_error::AppResult;
use crate::window_class::WindowClass;
use windows::core::PCWSTR;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;

/// Creates the (initially hidden) top-level window. `window_data` must stay
/// valid for the window's lifetime; the window procedure writes through it.
pub fn create_window<W: WindowClass>(
    our_module: HMODULE,
    window_rect: RECT,
    title: PCWSTR,
    window_data: *mut W::WindowData,
) -> AppResult<HWND> {
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            W::ID,
            title,
            WS_OVERLAPPEDWINDOW,
            100,
            100,
            window_rect.right - window_rect.left,
            window_rect.bottom - window_rect.top,
            None,                    // no parent window
            None,                    // no menus
            Some(our_module.into()),
            Some(window_data as _),
        )
    }?;
    Ok(hwnd)
}
