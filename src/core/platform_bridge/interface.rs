//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages and errors crossing the platform ↔ core thread boundary.
//
//   platform ──PlatformEvent──→ core
//   platform ←──CoreEvent────── core
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input gathered since the previous redraw.
    ///
    /// - `discrete`: key and button transitions, in arrival order
    /// - `continuous`: latest pointer position
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== CoreEvent ===========================================================

/// Events sent from core back to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CoreEvent {
    /// New text for the window title.
    Caption(String),

    /// The game asked to quit.
    Exit,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_is_std_error() {
        fn assert_error<T: std::error::Error + 'static>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn core_event_compares_by_payload() {
        assert_eq!(CoreEvent::Caption("a".into()), CoreEvent::Caption("a".into()));
        assert_ne!(CoreEvent::Caption("a".into()), CoreEvent::Exit);
    }
}
