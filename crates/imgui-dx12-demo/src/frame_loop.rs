use crate::app_error::AppResult;
use windows::Win32::UI::WindowsAndMessaging::DispatchMessageW;
use windows::Win32::UI::WindowsAndMessaging::PeekMessageW;
use windows::Win32::UI::WindowsAndMessaging::TranslateMessage;
use windows::Win32::UI::WindowsAndMessaging::MSG;
use windows::Win32::UI::WindowsAndMessaging::PM_REMOVE;
use windows::Win32::UI::WindowsAndMessaging::WM_QUIT;

pub enum PumpEvent {
    /// A message was dequeued and dispatched.
    Dispatched,
    /// The quit message was observed; payload is the process exit code.
    Quit(i32),
}

/// Seam over the OS message queue so the loop's behavior is testable.
pub trait MessagePump {
    /// `None` means the queue was empty.
    fn poll(&mut self) -> Option<PumpEvent>;
}

pub struct Win32MessagePump;

impl MessagePump for Win32MessagePump {
    fn poll(&mut self) -> Option<PumpEvent> {
        let mut message = MSG::default();
        if !unsafe { PeekMessageW(&mut message, None, 0, 0, PM_REMOVE) }.as_bool() {
            return None;
        }
        if message.message == WM_QUIT {
            return Some(PumpEvent::Quit(message.wParam.0 as i32));
        }
        unsafe {
            _ = TranslateMessage(&message);
            DispatchMessageW(&message);
        }
        Some(PumpEvent::Dispatched)
    }
}

/// Drains pending messages, rendering one frame whenever the queue is empty,
/// until the quit message arrives. Returns its payload as the exit code.
///
/// Present's vsync wait inside `render` is the only throttle; with an empty
/// queue this loop renders continuously.
pub fn run<P, F>(pump: &mut P, mut render: F) -> AppResult<i32>
where
    P: MessagePump,
    F: FnMut() -> AppResult<()>,
{
    loop {
        match pump.poll() {
            Some(PumpEvent::Quit(exit_code)) => return Ok(exit_code),
            Some(PumpEvent::Dispatched) => continue,
            None => render()?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::eyre;
    use std::collections::VecDeque;

    struct ScriptedPump {
        events: VecDeque<Option<PumpEvent>>,
    }

    impl ScriptedPump {
        fn new(events: impl IntoIterator<Item = Option<PumpEvent>>) -> Self {
            Self {
                events: events.into_iter().collect(),
            }
        }
    }

    impl MessagePump for ScriptedPump {
        fn poll(&mut self) -> Option<PumpEvent> {
            self.events.pop_front().expect("loop polled past the script")
        }
    }

    #[test]
    fn quit_payload_becomes_the_exit_code() {
        let mut pump = ScriptedPump::new([Some(PumpEvent::Quit(42))]);
        let exit_code = run(&mut pump, || Ok(())).unwrap();
        assert_eq!(exit_code, 42);
    }

    #[test]
    fn no_frame_renders_after_quit_is_observed() {
        let mut pump = ScriptedPump::new([
            None,
            Some(PumpEvent::Dispatched),
            Some(PumpEvent::Quit(0)),
            // Anything after the quit would panic the scripted pump.
        ]);
        let mut frames = 0;
        let exit_code = run(&mut pump, || {
            frames += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(exit_code, 0);
        assert_eq!(frames, 1);
    }

    #[test]
    fn idle_loop_renders_once_per_empty_poll() {
        let mut events: Vec<Option<PumpEvent>> = std::iter::repeat_with(|| None).take(100).collect();
        events.push(Some(PumpEvent::Quit(0)));
        let mut pump = ScriptedPump::new(events);

        let mut frames = 0;
        run(&mut pump, || {
            frames += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(frames, 100);
    }

    #[test]
    fn dispatched_messages_do_not_render() {
        let mut pump = ScriptedPump::new([
            Some(PumpEvent::Dispatched),
            Some(PumpEvent::Dispatched),
            Some(PumpEvent::Quit(7)),
        ]);
        let mut frames = 0;
        let exit_code = run(&mut pump, || {
            frames += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(exit_code, 7);
        assert_eq!(frames, 0);
    }

    #[test]
    fn render_failure_aborts_the_loop() {
        let mut pump = ScriptedPump::new([None, Some(PumpEvent::Quit(0))]);
        let result = run(&mut pump, || Err(eyre!("device removed").into()));
        assert!(result.is_err());
    }
}
