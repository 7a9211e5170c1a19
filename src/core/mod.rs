//=========================================================================
// Core
//
// Engine-facing building blocks used by the bootstrap.
//
// Responsibilities:
// - Geometry and platform identification
// - Scene graph root, boot layer trait and transitions
// - Service traits (director, audio, UI bundle loader) and the
//   context object that carries them
//
// Notes:
// Nothing in `core` looks services up globally. Everything the
// bootstrap touches arrives through an `EngineContext`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod audio;
pub mod context;
pub mod director;
pub mod geometry;
pub mod platform_kind;
pub mod scene;
pub mod ui_loader;

//=== Public API ==========================================================

pub use audio::{AudioEngine, SilentAudio};
pub use context::{EngineContext, Services};
pub use director::{Director, DirectorState, HeadlessDirector};
pub use geometry::{Point, Size};
pub use platform_kind::PlatformKind;
pub use scene::{BootInfo, Layer, LayerFactory, SceneRoot, SceneTransition};
pub use ui_loader::{BundleLoader, UiLoader};
