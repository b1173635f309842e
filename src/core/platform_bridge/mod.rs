//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the windowing platform and the logic thread.
//
// Components:
// - `interface`: event types in both directions and platform errors
// - `event_collector`: core-side event draining
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{CoreEvent, PlatformEvent};
pub use interface::PlatformError;
