use crate::app_error::AppResult;
use crate::gfx_context::GfxContext;
use crate::swap_chain::BACK_BUFFER_FORMAT;
use crate::swap_chain::FRAME_COUNT;
use crate::swap_chain::WINDOW_HEIGHT;
use crate::swap_chain::WINDOW_WIDTH;
use crate::window_class::WindowClass;
use imgui_dx12_renderer::Renderer;
use std::time::Instant;
use tracing::info;
use tracing::warn;
use windows::core::w;
use windows::core::PCWSTR;
use windows::Win32::Foundation::LPARAM;
use windows::Win32::Foundation::WPARAM;
use windows::Win32::Graphics::Direct3D12::ID3D12GraphicsCommandList;
use windows::Win32::UI::WindowsAndMessaging::*;

/// Mouse state the window procedure accumulates between frames; drained into
/// the GUI io before each frame is built.
#[derive(Debug, Default)]
pub struct UiInput {
    pub mouse_pos: [f32; 2],
    pub mouse_down: [bool; 2],
    pub mouse_wheel: f32,
}

pub struct DemoWindowClass;

impl WindowClass for DemoWindowClass {
    const ID: PCWSTR = w!("ImGui Example");
    type WindowData = UiInput;

    fn handle(data: &mut UiInput, message: u32, wparam: WPARAM, lparam: LPARAM) -> bool {
        match message {
            WM_MOUSEMOVE => {
                // Client coordinates, signed; negative values appear while
                // dragging with capture outside the client area.
                data.mouse_pos = [
                    (lparam.0 & 0xffff) as u16 as i16 as f32,
                    ((lparam.0 >> 16) & 0xffff) as u16 as i16 as f32,
                ];
                true
            }
            WM_LBUTTONDOWN | WM_LBUTTONDBLCLK => {
                data.mouse_down[0] = true;
                true
            }
            WM_LBUTTONUP => {
                data.mouse_down[0] = false;
                true
            }
            WM_RBUTTONDOWN | WM_RBUTTONDBLCLK => {
                data.mouse_down[1] = true;
                true
            }
            WM_RBUTTONUP => {
                data.mouse_down[1] = false;
                true
            }
            WM_MOUSEWHEEL => {
                data.mouse_wheel += ((wparam.0 >> 16) & 0xffff) as u16 as i16 as f32 / 120.0;
                true
            }
            WM_SIZE => {
                // The swap chain keeps its fixed startup size; the compositor
                // scales the presented image.
                warn!("window resized; swap chain resize is not implemented");
                false
            }
            _ => false,
        }
    }
}

/// The GUI context and its D3D12 renderer, advanced once per frame.
pub struct UiState {
    context: imgui::Context,
    renderer: Renderer,
    last_frame: Instant,
}

impl UiState {
    pub fn new(gfx: &GfxContext) -> AppResult<Self> {
        let mut context = imgui::Context::create();
        context.set_ini_filename(None);
        context.set_platform_name(Some(format!(
            "imgui-dx12-demo {}",
            env!("CARGO_PKG_VERSION")
        )));
        context.style_mut().use_dark_colors();
        context.io_mut().display_size = [WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32];

        let (font_srv_cpu, font_srv_gpu) = gfx.font_srv_handles();
        let renderer = Renderer::new(
            &mut context,
            gfx.device().clone(),
            FRAME_COUNT as usize,
            BACK_BUFFER_FORMAT,
            font_srv_cpu,
            font_srv_gpu,
        )?;

        Ok(Self {
            context,
            renderer,
            last_frame: Instant::now(),
        })
    }

    /// Builds the frame's widgets and appends their draw commands to the
    /// open command list.
    pub fn draw(
        &mut self,
        input: &mut UiInput,
        command_list: &ID3D12GraphicsCommandList,
    ) -> AppResult<()> {
        self.renderer.new_frame(&mut self.context)?;

        let now = Instant::now();
        let io = self.context.io_mut();
        io.update_delta_time(now - self.last_frame);
        self.last_frame = now;
        io.mouse_pos = input.mouse_pos;
        io.mouse_down[0] = input.mouse_down[0];
        io.mouse_down[1] = input.mouse_down[1];
        io.mouse_wheel = std::mem::take(&mut input.mouse_wheel);

        let ui = self.context.new_frame();
        ui.window("Hello Window").build(|| {
            if ui.button("Press me!") {
                info!("Button pressed!");
            }
        });

        let draw_data = self.context.render();
        self.renderer.render_draw_data(draw_data, command_list)?;
        Ok(())
    }
}
