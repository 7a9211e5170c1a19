//=========================================================================
// Director
//=========================================================================
//
// Owner of the running scene and of scene activation.
//
// Architecture:
//   Director (trait)
//     ├─ win_size() / running_scene()     queried by the bootstrap
//     └─ run_with_scene() / replace_scene()  activation
//
//   HeadlessDirector: in-crate implementation driven by the native host
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::Size;
use crate::core::scene::{SceneRoot, SceneTransition};
use crate::error::DirectorError;

//=== Module Declarations =================================================

mod headless;

//=== Public API ==========================================================

pub use headless::{DirectorState, HeadlessDirector};

//=== Director Trait ======================================================

/// Scene activation service.
///
/// Once a scene is handed over through `run_with_scene` or
/// `replace_scene`, the director owns it until it is replaced.
pub trait Director {
    /// Current window size in logical units.
    fn win_size(&self) -> Size;

    /// Scene currently running, if any.
    fn running_scene(&self) -> Option<&SceneRoot>;

    /// Starts the first scene.
    ///
    /// # Errors
    ///
    /// [`DirectorError::AlreadyRunning`] if a scene is already running.
    fn run_with_scene(&mut self, scene: SceneRoot) -> Result<(), DirectorError>;

    /// Replaces the running scene.
    ///
    /// # Errors
    ///
    /// [`DirectorError::NotRunning`] if no scene has been started.
    fn replace_scene(&mut self, transition: SceneTransition) -> Result<(), DirectorError>;
}
