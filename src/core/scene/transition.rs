//=========================================================================
// Scene Transitions
//=========================================================================
//
// Ways a director can swap the running scene for a new root.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneRoot;
use crate::error::BootError;

//=== FadeTransition ======================================================

/// Cross-fade to a new scene over a fixed duration (seconds).
#[derive(Debug)]
pub struct FadeTransition {
    duration: f32,
    scene: SceneRoot,
}

impl FadeTransition {
    /// Creates a fade into `scene`.
    ///
    /// # Errors
    ///
    /// [`BootError::InvalidFadeDuration`] if `duration` is negative or not finite.
    pub fn new(duration: f32, scene: SceneRoot) -> Result<Self, BootError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(BootError::InvalidFadeDuration(duration));
        }
        Ok(Self { duration, scene })
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn scene(&self) -> &SceneRoot {
        &self.scene
    }

    pub fn into_scene(self) -> SceneRoot {
        self.scene
    }
}

//=== SceneTransition =====================================================

/// Replacement request passed to [`crate::core::director::Director::replace_scene`].
#[derive(Debug)]
pub enum SceneTransition {
    /// Swap immediately; the old root is released right away.
    Immediate(SceneRoot),

    /// Fade in the new root; the old root is released when the fade ends.
    Fade(FadeTransition),
}

impl SceneTransition {
    /// Incoming scene of this transition.
    pub fn scene(&self) -> &SceneRoot {
        match self {
            Self::Immediate(scene) => scene,
            Self::Fade(fade) => fade.scene(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
