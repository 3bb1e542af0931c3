pub mod app_error;
pub mod create_window;
pub mod descriptor_heap;
pub mod device;
pub mod frame_loop;
pub mod gfx_context;
pub mod pacing;
pub mod swap_chain;
pub mod ui;
pub mod window_class;

use app_error::AppResult;
use create_window::create_window;
use frame_loop::Win32MessagePump;
use gfx_context::GfxContext;
use swap_chain::WINDOW_HEIGHT;
use swap_chain::WINDOW_WIDTH;
use tracing::info;
use ui::DemoWindowClass;
use ui::UiInput;
use ui::UiState;
use window_class::create_window_class_struct;
use window_class::register_window_class;
use windows::core::w;
use windows::Win32::Foundation::HMODULE;
use windows::Win32::Foundation::RECT;
use windows::Win32::System::LibraryLoader::GetModuleHandleExW;
use windows::Win32::UI::WindowsAndMessaging::AdjustWindowRect;
use windows::Win32::UI::WindowsAndMessaging::ShowWindow;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOW;
use windows::Win32::UI::WindowsAndMessaging::WS_OVERLAPPEDWINDOW;

fn main() {
    match run() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(report) => {
            eprintln!("{report:?}");
            std::process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    color_eyre::install()?;
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();

    let our_module = get_handle_to_file_used_to_create_the_calling_process()?;

    let window_class = create_window_class_struct::<DemoWindowClass>(our_module)?;
    register_window_class(&window_class)?;

    let mut window_rect = RECT {
        left: 0,
        top: 0,
        right: WINDOW_WIDTH as i32,
        bottom: WINDOW_HEIGHT as i32,
    };
    // Grow the rectangle so the client area, not the outer frame, is 1280x800.
    unsafe { AdjustWindowRect(&mut window_rect, WS_OVERLAPPEDWINDOW, false)? };

    // The window procedure writes into this through the pointer installed at
    // WM_CREATE, so it must outlive the window. Boxed to pin its address.
    let mut input = Box::new(UiInput::default());
    let hwnd = create_window::<DemoWindowClass>(
        our_module,
        window_rect,
        w!("Dear ImGui Example"),
        &mut *input,
    )?;

    let mut gfx = GfxContext::new(hwnd)?;
    let mut ui = UiState::new(&gfx)?;

    unsafe { _ = ShowWindow(hwnd, SW_SHOW) };

    let exit_code = frame_loop::run(&mut Win32MessagePump, || {
        gfx.render_frame(&mut ui, &mut input)
    })?;
    info!("exiting with code {exit_code}");
    Ok(exit_code)
}

fn get_handle_to_file_used_to_create_the_calling_process() -> AppResult<HMODULE> {
    let mut out = Default::default();
    unsafe { GetModuleHandleExW(Default::default(), None, &mut out)? };
    Ok(out)
}
