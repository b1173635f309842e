//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side receiver of platform events with bounded polling and
// shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input events → TickControl
//
// Polling never blocks; the orchestrator owns frame pacing.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== Constants ===========================================================

/// Upper bound on channel messages drained in one tick.
const MAX_EVENTS_PER_FRAME: usize = 100;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events into one flat, ordered list per tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(64),
        }
    }

    /// Drains pending platform events (bounded to prevent starvation).
    ///
    /// Returns `Exit` on a close request or when the platform side of the
    /// channel is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    self.events.extend(discrete);
                    self.events.extend(continuous);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} batches this frame", drained);
        }

        TickControl::Continue
    }

    /// Input events collected by the last `collect_frame`, in order.
    pub(crate) fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_flattens_batches_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs {
            discrete: vec![InputEvent::KeyDown(KeyCode::KeyA)],
            continuous: vec![InputEvent::MouseMoved { x: 1.0, y: 2.0 }],
        })
        .unwrap();
        tx.send(PlatformEvent::Inputs {
            discrete: vec![InputEvent::KeyUp(KeyCode::KeyA)],
            continuous: vec![],
        })
        .unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(
            collector.events(),
            [
                InputEvent::KeyDown(KeyCode::KeyA),
                InputEvent::MouseMoved { x: 1.0, y: 2.0 },
                InputEvent::KeyUp(KeyCode::KeyA),
            ]
        );
    }

    #[test]
    fn collect_returns_exit_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_clears_previous_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs {
            discrete: vec![InputEvent::KeyDown(KeyCode::Space)],
            continuous: vec![],
        })
        .unwrap();

        collector.collect_frame();
        assert_eq!(collector.events().len(), 1);

        collector.collect_frame();
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }
}
