//=========================================================================
// Helicopter Madness Engine
//
// Main entry point and coordinator for the game runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_config()           └─ spawns logic thread
//         ├─ with_tps()                 runs platform
//         ├─ with_channel_capacity()    blocks until exit
//         └─ with_score_store()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info, warn};
use winit::dpi::LogicalSize;

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::globals::{GameContext, GlobalSystems, Stage};
use crate::core::platform_bridge::{CoreEvent, PlatformEvent};
use crate::core::scene::SceneManager;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;
use crate::scenes::{RonScoreStore, ScoreStore};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// Everything defaults to [`GameConfig::default`]: 1024×600 stage,
/// 60 TPS, 128-event channel, high scores in `highscores.ron`.
///
/// # Examples
///
/// ```no_run
/// use helicopter_madness::{EngineBuilder, GameConfig};
///
/// EngineBuilder::new()
///     .with_config(GameConfig::load())
///     .with_tps(120.0)
///     .build()
///     .run();
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    score_store: Option<Box<dyn ScoreStore>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            score_store: None,
        }
    }

    /// Replaces every setting with `config`.
    ///
    /// # Panics
    ///
    /// Panics if `config.tps` or `config.channel_capacity` is not
    /// positive.
    pub fn with_config(self, config: GameConfig) -> Self {
        let tps = config.tps;
        let capacity = config.channel_capacity;
        Self { config, ..self }.with_tps(tps).with_channel_capacity(capacity)
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.config.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    /// Uses `store` for the high-score table instead of the RON file
    /// named in the config.
    pub fn with_score_store(mut self, store: Box<dyn ScoreStore>) -> Self {
        self.score_store = Some(store);
        self
    }

    /// Builds the game context, every scene and the engine.
    pub fn build(self) -> Engine {
        let config = self.config;
        info!(
            "Building engine (TPS: {}, channel: {})",
            config.tps, config.channel_capacity
        );

        let stage = stage_from(&config);
        let mut context = GameContext::new(stage, config.rng_seed);

        let store = self
            .score_store
            .unwrap_or_else(|| Box::new(RonScoreStore::new(config.high_score_file.clone())));
        let capacity = config.high_score_capacity.max(1);
        let scene_manager = SceneManager::new(&mut context, store, capacity);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(GlobalSystems::new(scene_manager), context),
            window_size: LogicalSize::new(f64::from(stage.width()), f64::from(stage.height())),
            tps: config.tps,
            channel_capacity: config.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Stage from the configured size, or the default size if it is not
/// positive.
fn stage_from(config: &GameConfig) -> Stage {
    if config.stage_width > 0.0 && config.stage_height > 0.0 {
        return Stage::new(config.stage_width, config.stage_height);
    }

    let fallback = GameConfig::default();
    warn!(
        "Invalid stage size {}x{}, using {}x{}",
        config.stage_width, config.stage_height, fallback.stage_width, fallback.stage_height
    );
    Stage::new(fallback.stage_width, fallback.stage_height)
}

//=== Engine ==============================================================

/// Game runtime. Create via [`EngineBuilder`].
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► StateTracker, SceneManager, GameContext
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: crossbeam channels (PlatformEvent →, ← CoreEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    window_size: LogicalSize<f64>,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the game exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates both channels
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close or Quit: both sides stop, logic thread joined
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (core_tx, core_rx): (Sender<CoreEvent>, Receiver<CoreEvent>) =
            bounded(self.channel_capacity);

        info!("Channels created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, core_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, core_rx, self.window_size);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::MemoryScoreStore;

    fn builder() -> EngineBuilder {
        EngineBuilder::new().with_score_store(Box::new(MemoryScoreStore::new()))
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config.tps, 60.0);
        assert_eq!(builder.config.channel_capacity, 128);
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.config.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn config_is_validated_too() {
        EngineBuilder::new().with_config(GameConfig { tps: -1.0, ..GameConfig::default() });
    }

    #[test]
    fn build_uses_configured_stage() {
        let engine = builder()
            .with_config(GameConfig {
                stage_width: 800.0,
                stage_height: 480.0,
                rng_seed: Some(3),
                ..GameConfig::default()
            })
            .build();

        assert_eq!(engine.window_size, LogicalSize::new(800.0, 480.0));
    }

    #[test]
    fn invalid_stage_falls_back_to_default() {
        let config = GameConfig { stage_width: 0.0, ..GameConfig::default() };
        assert_eq!(stage_from(&config), Stage::new(1024.0, 600.0));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = builder().with_tps(120.0).with_channel_capacity(256).build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
    }
}
