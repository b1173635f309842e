//=========================================================================
// Helicopter Madness — Library Root
//
// This crate defines the public API surface of the game.
//
// Responsibilities:
// - Expose the runtime entry point (`Engine`, `EngineBuilder`)
// - Expose the scene state machine and gameplay scenes so they can be
//   driven headlessly (tests, tools)
// - Keep the window layer (`platform`) hidden from users
//
// Typical usage:
// ```no_run
// use helicopter_madness::{EngineBuilder, GameConfig};
//
// fn main() {
//     EngineBuilder::new().with_config(GameConfig::load()).build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds input, the scene manager and the shared game context.
// `scenes` holds the concrete scenes and their components.
// `config` holds the startup settings read from `helicopter.ron`.
//
pub mod config;
pub mod core;
pub mod prelude;
pub mod scenes;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit window and event loop and is not part of the
// public API surface. `engine` wires both threads together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use config::GameConfig;
pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Engine, EngineBuilder};
