//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the logic (non-platform) thread.
//
// Responsibilities:
// - Own the GlobalSystems and the GameContext for the whole run
// - Receive platform events over a crossbeam channel
// - Tick the scene manager at a fixed rate (TPS)
// - Report caption changes and quit requests back to the platform
//
// Notes:
// The orchestrator runs independently from the platform layer. The two
// threads share no memory; every interaction is a channel message, so
// the simulation itself stays single-threaded.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, info, warn};

//=== Module Declarations =================================================

pub mod globals;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;

//=== Internal Modules ====================================================

use globals::{GameContext, GlobalSystems};
use platform_bridge::{CoreEvent, EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================
//
// Owns the simulation and schedules its updates.
//
pub(crate) struct CoreSystemsOrchestrator {
    systems: GlobalSystems,
    context: GameContext,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Takes fully built systems; the logic thread is not started yet.
    //
    pub(crate) fn new(systems: GlobalSystems, context: GameContext) -> Self {
        Self { systems, context }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking at `tps`.
    //
    // Each tick:
    //  1. Collects platform input (exits on close or disconnect)
    //  2. Updates the global systems with the measured frame time
    //  3. Flushes sound cues, caption changes and quit requests
    //  4. Sleeps to maintain fixed pacing
    //
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        core_sender: Sender<CoreEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let Self { mut systems, mut context } = self;
            let mut collector = EventCollector::new(receiver);
            let mut last_caption = String::new();
            let mut last_tick = Instant::now();

            info!("Core thread started ({:.1} TPS)", tps);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Update systems --------------------------------
                let elapsed = frame_start.duration_since(last_tick);
                last_tick = frame_start;
                systems.update(&mut context, collector.events(), elapsed);

                //--- Step 3: Report back to the platform -------------------
                for cue in context.audio.drain() {
                    debug!(
                        "Sound cue {:?} (music volume {:.1})",
                        cue,
                        context.audio.music_volume()
                    );
                }

                let caption = systems.scene_manager.caption();
                if caption != last_caption {
                    match core_sender.try_send(CoreEvent::Caption(caption.clone())) {
                        Ok(()) => last_caption = caption,
                        Err(TrySendError::Full(_)) => {
                            warn!("Platform is not draining core events, caption update deferred")
                        }
                        Err(TrySendError::Disconnected(_)) => {
                            info!("Platform gone, core thread exiting.");
                            break;
                        }
                    }
                }

                if systems.scene_manager.exit_requested() {
                    info!("Quit requested, core thread exiting.");
                    request_platform_exit(&core_sender);
                    break;
                }

                //--- Step 4: Maintain deterministic pacing ----------------
                let busy = frame_start.elapsed();
                if busy < frame_duration {
                    thread::sleep(frame_duration - busy);
                }
            }
        })
    }
}

/// Asks the platform to close the window. Returns false when the platform
/// side has already hung up.
fn request_platform_exit(core_sender: &Sender<CoreEvent>) -> bool {
    match core_sender.send(CoreEvent::Exit) {
        Ok(()) => true,
        Err(_) => {
            warn!("Platform gone before the exit request could be delivered");
            false
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::globals::Stage;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::scene::SceneManager;
    use crate::scenes::MemoryScoreStore;
    use crossbeam_channel::{bounded, unbounded};

    fn orchestrator() -> CoreSystemsOrchestrator {
        let mut context = GameContext::with_seed(Stage::new(1024.0, 600.0), 1);
        let manager = SceneManager::new(&mut context, Box::new(MemoryScoreStore::new()), 5);
        CoreSystemsOrchestrator::new(GlobalSystems::new(manager), context)
    }

    #[test]
    fn window_close_stops_core_thread() {
        let (tx, rx) = unbounded();
        let (core_tx, _core_rx) = bounded(16);
        let handle = orchestrator().spawn_core_thread(rx, core_tx, 240.0);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert!(handle.join().is_ok());
    }

    #[test]
    fn quit_from_menu_sends_exit() {
        let (tx, rx) = unbounded();
        let (core_tx, core_rx) = bounded(16);
        let handle = orchestrator().spawn_core_thread(rx, core_tx, 240.0);

        tx.send(PlatformEvent::Inputs {
            discrete: vec![
                InputEvent::KeyDown(KeyCode::ArrowUp),
                InputEvent::KeyDown(KeyCode::Enter),
            ],
            continuous: vec![],
        })
        .unwrap();

        let mut saw_caption = false;
        let mut saw_exit = false;
        while let Ok(event) = core_rx.recv_timeout(Duration::from_secs(2)) {
            match event {
                CoreEvent::Caption(_) => saw_caption = true,
                CoreEvent::Exit => {
                    saw_exit = true;
                    break;
                }
            }
        }

        assert!(saw_caption);
        assert!(saw_exit);
        assert!(handle.join().is_ok());
    }

    #[test]
    fn exit_request_reaches_a_live_platform() {
        let (core_tx, core_rx) = bounded(1);

        assert!(request_platform_exit(&core_tx));
        assert!(matches!(core_rx.try_recv(), Ok(CoreEvent::Exit)));
    }

    #[test]
    fn exit_request_to_a_closed_platform_is_reported() {
        let (core_tx, core_rx) = bounded(1);
        drop(core_rx);

        assert!(!request_platform_exit(&core_tx));
    }
}
