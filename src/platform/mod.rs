//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the logic thread via crossbeam
// channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Orchestrator    │
//  │   ↓                      │    │   ↓              │
//  │  InputProcessor          │    │  StateTracker    │
//  │   ├─ Converts Winit      │    │   ↓              │
//  │   └─ Logical pixels      │    │  SceneManager    │
//  │   ↓                      │    │                  │
//  │  InputBuffer             │    └──────────────────┘
//  │   ├─ discrete: Vec<>     │        ↑        │
//  │   └─ continuous: Set<>   │        │        │
//  │   ↓                      │        │        │
//  │  RedrawRequested ────────┼────────┘        │
//  │   (flush, PlatformEvent) │                 │
//  │                          │                 │
//  │  apply CoreEvents ←──────┼─────────────────┘
//  │   (caption, exit)        │      CoreEvent
//  └──────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Pending CoreEvents applied
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input is batched per redraw so
//   its order survives the thread hop
// - **Graceful channel disconnect**: if the logic thread dies, the
//   platform logs and keeps the window open until it is closed
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Constants ===========================================================

const DEFAULT_TITLE: &str = "Helicopter Madness";

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Runs on the main thread and talks to the logic thread only through
/// its two channel ends.
///
/// # Fields
///
/// - `window`: created lazily in `resumed()`
/// - `buffer`: accumulates events until `RedrawRequested`
/// - `event_sender`: input to the logic thread
/// - `core_receiver`: captions and exit requests from the logic thread
pub(crate) struct Platform {
    window: Option<Window>,
    window_size: LogicalSize<f64>,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    core_receiver: Receiver<CoreEvent>,
    input_processor: InputProcessor,
    caption: String,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform. The window itself is created in `resumed()`.
    pub fn new(
        event_sender: Sender<PlatformEvent>,
        core_receiver: Receiver<CoreEvent>,
        window_size: LogicalSize<f64>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            window_size,
            buffer: InputBuffer::new(),
            event_sender,
            core_receiver,
            input_processor: InputProcessor::new(),
            caption: DEFAULT_TITLE.to_string(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the game quits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the logic thread; drops it if the logic
    /// thread is gone.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs { discrete, continuous })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    /// Applies everything the logic thread sent since the last frame.
    ///
    /// Returns `true` if the game asked to exit.
    fn poll_core_events(&mut self) -> bool {
        loop {
            match self.core_receiver.try_recv() {
                Ok(CoreEvent::Caption(caption)) => {
                    if let Some(window) = &self.window {
                        window.set_title(&caption);
                    }
                    self.caption = caption;
                }
                Ok(CoreEvent::Exit) => {
                    info!(target: "platform", "Exit requested by game");
                    return true;
                }
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => {
                    trace!(target: "platform", "Core channel closed");
                    return false;
                }
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.caption.clone())
            .with_inner_size(self.window_size)
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                self.input_processor.set_scale_factor(window.scale_factor());
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    self.input_processor.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(target: "platform", "Scale factor changed to {}", scale_factor);
                self.input_processor.set_scale_factor(*scale_factor);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(*position);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if self.poll_core_events() {
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crossbeam_channel::unbounded;

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<CoreEvent>) {
        let (tx, rx) = unbounded();
        let (core_tx, core_rx) = unbounded();
        let platform = Platform::new(tx, core_rx, LogicalSize::new(1024.0, 600.0));
        (platform, rx, core_tx)
    }

    //--- Construction -----------------------------------------------------

    #[test]
    fn window_is_created_lazily() {
        let (platform, _rx, _core_tx) = platform();
        assert!(platform.window().is_none());
        assert_eq!(platform.caption, DEFAULT_TITLE);
    }

    //--- Input Flushing ---------------------------------------------------

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _core_tx) = platform();

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx, _core_tx) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete, vec![InputEvent::KeyDown(KeyCode::Space)]);
                assert!(continuous.is_empty());
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_survives_disconnected_channel() {
        let (mut platform, rx, _core_tx) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        drop(rx);

        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    //--- Core Events ------------------------------------------------------

    #[test]
    fn caption_updates_are_applied_in_order() {
        let (mut platform, _rx, core_tx) = platform();
        core_tx.send(CoreEvent::Caption("first".into())).unwrap();
        core_tx.send(CoreEvent::Caption("second".into())).unwrap();

        assert!(!platform.poll_core_events());
        assert_eq!(platform.caption, "second");
    }

    #[test]
    fn exit_event_is_reported() {
        let (mut platform, _rx, core_tx) = platform();
        core_tx.send(CoreEvent::Exit).unwrap();

        assert!(platform.poll_core_events());
    }

    #[test]
    fn closed_core_channel_is_not_an_exit() {
        let (mut platform, _rx, core_tx) = platform();
        drop(core_tx);

        assert!(!platform.poll_core_events());
    }
}
