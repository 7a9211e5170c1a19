//=========================================================================
// Browser Strategy
//=========================================================================
//
// Browser activation: the root is prepared but not handed to the
// director. The hosting page activates it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{BootOutcome, PlatformStrategy};
use crate::core::scene::SceneRoot;
use crate::core::{EngineContext, PlatformKind, Point, Size};
use crate::error::BootError;

//=== BrowserStrategy =====================================================

/// Prepares the root for external activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowserStrategy {
    reference_width: f32,
}

impl BrowserStrategy {
    pub fn new(reference_width: f32) -> Self {
        Self { reference_width }
    }
}

impl PlatformStrategy for BrowserStrategy {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Browser
    }

    fn resolve_window_size(&self, ctx: &mut dyn EngineContext) -> Size {
        ctx.director().win_size()
    }

    fn attach_and_activate(
        &self,
        _ctx: &mut dyn EngineContext,
        mut scene: SceneRoot,
    ) -> Result<BootOutcome, BootError> {
        let ratio = scene.win_size().width_ratio(self.reference_width);
        scene.set_size_ratio(ratio);
        scene.set_position(Point::ORIGIN);

        debug!(
            target: "boot",
            "Browser scene prepared (size ratio {}), awaiting page activation",
            ratio
        );
        Ok(BootOutcome::Pending(scene))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
