use crate::app_error::AppResult;
use windows::core::PCWSTR;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;

pub trait WindowClass {
    const ID: PCWSTR;

    /// State the window procedure mutates; owned by the caller for the
    /// window's lifetime and installed via the create parameters.
    type WindowData;

    /// Returns true when the message was fully handled; false falls through
    /// to `DefWindowProcW`.
    fn handle(data: &mut Self::WindowData, message: u32, wparam: WPARAM, lparam: LPARAM) -> bool;
}

pub fn create_window_class_struct<W: WindowClass>(instance: HMODULE) -> AppResult<WNDCLASSEXW> {
    // WNDCLASSEXW - https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-wndclassexw
    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc::<W>),
        hInstance: instance.into(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
        lpszClassName: W::ID,
        ..Default::default()
    };
    Ok(wc)
}

pub fn register_window_class(class: &WNDCLASSEXW) -> AppResult<()> {
    let atom = unsafe { RegisterClassExW(class) };
    if atom == 0 {
        return Err(windows::core::Error::from_win32().into());
    }
    Ok(())
}

// A panic must not unwind across the window procedure's ABI boundary.
fn guarded_handle<W: WindowClass>(
    data: &mut W::WindowData,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        W::handle(data, message, wparam, lparam)
    }))
    .unwrap_or(false)
}

extern "system" fn wndproc<W: WindowClass>(
    window: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if message == WM_CREATE {
        unsafe {
            let create_struct: &CREATESTRUCTW = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(window, GWLP_USERDATA, create_struct.lpCreateParams as _);
        }
        return LRESULT(0);
    }

    if message == WM_DESTROY {
        unsafe { PostQuitMessage(0) };
        return LRESULT(0);
    }

    let user_data = unsafe { GetWindowLongPtrW(window, GWLP_USERDATA) };
    let data = std::ptr::NonNull::<W::WindowData>::new(user_data as *mut W::WindowData);
    let handled = match data {
        // Messages can arrive before WM_CREATE or after WM_DESTROY.
        None => false,
        Some(mut data) => guarded_handle::<W>(unsafe { data.as_mut() }, message, wparam, lparam),
    };

    if handled {
        LRESULT(0)
    } else {
        unsafe { DefWindowProcW(window, message, wparam, lparam) }
    }
}
