//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_boot::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Bootstrap
pub use crate::bootstrap::{bootstrap, BootOutcome, Bootstrap, PlatformStrategy};
pub use crate::config::BootConfig;
pub use crate::error::{BootError, DirectorError};

// Services and context
pub use crate::core::{
    AudioEngine, Director, EngineContext, HeadlessDirector, Services, UiLoader,
};

// Scene graph
pub use crate::core::scene::{
    BlankLayer, BootInfo, FadeTransition, GameLayer, GameState, Layer, SceneRoot, SceneTransition,
};

// Values
pub use crate::core::{PlatformKind, Point, Size};
