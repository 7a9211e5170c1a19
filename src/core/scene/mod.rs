//=========================================================================
// Scene Graph
//=========================================================================
//
// Root scene and boot layer types built by the bootstrap.
//
// Architecture:
//   SceneRoot
//     ├─ win_size / center / size_ratio / position
//     └─ boot_layer: Option<Box<dyn Layer>>
//
// Flow:
//   Director::tick() → SceneRoot::update() → Layer::update()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Point, Size};

//=== Module Declarations =================================================

mod blank;
mod game;
mod root;
pub mod transition;

//=== Public API ==========================================================

pub use blank::BlankLayer;
pub use game::{GameLayer, GameState};
pub use root::SceneRoot;
pub use transition::{FadeTransition, SceneTransition};

//=== Layer Trait =========================================================

/// A full-screen surface attached to a scene root.
///
/// The boot layer, i.e. the application's first screen, implements this.
/// Only `name()` is required; lifecycle hooks default to no-ops.
///
/// ```rust
/// # use aetheric_boot::prelude::*;
/// struct MainMenu;
///
/// impl Layer for MainMenu {
///     fn name(&self) -> &str {
///         "main-menu"
///     }
/// }
/// ```
pub trait Layer {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Called when the owning scene becomes the running scene.
    fn on_enter(&mut self) {}

    /// Called when the owning scene is released by the director.
    fn on_exit(&mut self) {}

    /// Called every director tick while the owning scene is running.
    fn update(&mut self, _dt: f32) {}
}

//=== Boot Layer Factory ==================================================

/// Values available to the boot layer when it is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct BootInfo {
    pub win_size: Size,
    pub center: Point,
    pub resource_path: String,
}

/// Builds the boot layer for a freshly created scene root.
///
/// Called once per bootstrap invocation.
pub type LayerFactory = Box<dyn FnMut(&BootInfo) -> Box<dyn Layer>>;
