//=========================================================================
// Native Strategy
//=========================================================================
//
// Mobile and desktop activation: the bootstrap hands the new root to
// the director itself.
//
//   no running scene  → run_with_scene(scene)
//   running scene     → replace_scene(Fade(fade_duration, scene))
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{BootOutcome, PlatformStrategy};
use crate::core::scene::{FadeTransition, SceneRoot, SceneTransition};
use crate::core::{Director, EngineContext, PlatformKind, Size};
use crate::error::BootError;

//=== NativeStrategy ======================================================

/// Activates the root through the director.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeStrategy {
    kind: PlatformKind,
    fade_duration: f32,
}

impl NativeStrategy {
    pub fn new(kind: PlatformKind, fade_duration: f32) -> Self {
        Self { kind, fade_duration }
    }
}

impl PlatformStrategy for NativeStrategy {
    fn kind(&self) -> PlatformKind {
        self.kind
    }

    fn resolve_window_size(&self, ctx: &mut dyn EngineContext) -> Size {
        ctx.director().win_size()
    }

    fn attach_and_activate(
        &self,
        ctx: &mut dyn EngineContext,
        scene: SceneRoot,
    ) -> Result<BootOutcome, BootError> {
        activate_scene(ctx.director(), scene, self.fade_duration)
    }
}

//=== Activation ==========================================================

/// Starts `scene`, or fades to it if another scene is already running.
///
/// Exactly one of `run_with_scene` / `replace_scene` is called.
pub fn activate_scene(
    director: &mut dyn Director,
    scene: SceneRoot,
    fade_duration: f32,
) -> Result<BootOutcome, BootError> {
    if director.running_scene().is_none() {
        info!(target: "boot", "No running scene, starting director");
        director.run_with_scene(scene)?;
        return Ok(BootOutcome::Started);
    }

    info!(target: "boot", "Scene already running, fading over {}s", fade_duration);
    let fade = FadeTransition::new(fade_duration, scene)?;
    director.replace_scene(SceneTransition::Fade(fade))?;
    Ok(BootOutcome::Replaced { fade_duration })
}

//=========================================================================
// Unit Tests
//=========================================================================
