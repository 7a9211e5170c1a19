//=========================================================================
// Aetheric Boot — Library Root
//
// Bootstraps a 2D game's first scene: builds a root scene with a boot
// layer, configures the UI bundle path and activates the scene through
// the director, choosing the activation strategy by platform.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the bootstrap routine and its platform strategies
// - Keep the Winit host (`platform`) internal
//
// Typical usage:
// ```no_run
// use aetheric_boot::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the service traits (director, audio, UI loader), the
// scene graph and the engine context passed into the bootstrap.
//
// `bootstrap` holds the shared startup routine and the native/browser
// strategies.
//
pub mod bootstrap;
pub mod config;
pub mod core;
pub mod error;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit window and drives the director each frame.
//
// `engine` defines the main engine entry point.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use error::{BootError, DirectorError};
