//=========================================================================
// Headless Director
//=========================================================================
//
// Director implementation with no renderer attached.
//
// The native host ticks it once per redraw. Fade transitions keep the
// outgoing root alive until the fade duration has elapsed, then call
// its `on_exit` and drop it.
//
// State machine:
//   Idle ──run_with_scene──> Running ──replace(Fade)──> Transitioning
//                               ↑                            │
//                               └──────── fade elapsed ──────┘
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::Director;
use crate::core::geometry::Size;
use crate::core::scene::{SceneRoot, SceneTransition};
use crate::error::DirectorError;

//=== DirectorState =======================================================

/// Activation state of a [`HeadlessDirector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorState {
    /// No scene has been started.
    Idle,

    /// A scene is running and no fade is in progress.
    Running,

    /// A fade is in progress; the outgoing root is still alive.
    Transitioning,
}

//=== ActiveFade ==========================================================

struct ActiveFade {
    duration: f32,
    elapsed: f32,
    outgoing: SceneRoot,
}

//=== HeadlessDirector ====================================================

/// In-crate [`Director`] driven by [`HeadlessDirector::tick`].
pub struct HeadlessDirector {
    win_size: Size,
    running: Option<SceneRoot>,
    fade: Option<ActiveFade>,
    frames: u64,
}

impl HeadlessDirector {
    //--- Construction -----------------------------------------------------

    pub fn new(win_size: Size) -> Self {
        Self {
            win_size,
            running: None,
            fade: None,
            frames: 0,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> DirectorState {
        match (&self.running, &self.fade) {
            (None, _) => DirectorState::Idle,
            (Some(_), None) => DirectorState::Running,
            (Some(_), Some(_)) => DirectorState::Transitioning,
        }
    }

    /// Fraction of the active fade completed, in `[0, 1]`.
    pub fn fade_progress(&self) -> Option<f32> {
        self.fade
            .as_ref()
            .map(|fade| (fade.elapsed / fade.duration).clamp(0.0, 1.0))
    }

    /// Root being faded out, kept alive until the fade completes.
    pub fn outgoing_scene(&self) -> Option<&SceneRoot> {
        self.fade.as_ref().map(|fade| &fade.outgoing)
    }

    /// Number of ticks processed since construction.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    //--- Host Integration -------------------------------------------------

    /// Updates the reported window size (e.g. on resize).
    pub fn set_win_size(&mut self, win_size: Size) {
        debug!(
            target: "director",
            "Window size changed: {}x{} -> {}x{}",
            self.win_size.width,
            self.win_size.height,
            win_size.width,
            win_size.height
        );
        self.win_size = win_size;
    }

    /// Advances the running scene and any active fade by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.frames += 1;

        if let Some(scene) = self.running.as_mut() {
            scene.update(dt);
        }

        let finished = match self.fade.as_mut() {
            Some(fade) => {
                fade.elapsed += dt;
                fade.elapsed >= fade.duration
            }
            None => false,
        };

        if finished {
            self.finish_fade();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn finish_fade(&mut self) {
        if let Some(mut fade) = self.fade.take() {
            debug!(target: "director", "Fade complete, releasing outgoing scene");
            fade.outgoing.on_exit();
        }
    }

    fn enter(&mut self, mut scene: SceneRoot) -> Option<SceneRoot> {
        scene.on_enter();
        self.running.replace(scene)
    }
}

//=== Director Implementation =============================================

impl Director for HeadlessDirector {
    fn win_size(&self) -> Size {
        self.win_size
    }

    fn running_scene(&self) -> Option<&SceneRoot> {
        self.running.as_ref()
    }

    fn run_with_scene(&mut self, scene: SceneRoot) -> Result<(), DirectorError> {
        if self.running.is_some() {
            warn!(target: "director", "run_with_scene called while a scene is running");
            return Err(DirectorError::AlreadyRunning);
        }

        info!(target: "director", "Running initial scene");
        self.enter(scene);
        Ok(())
    }

    fn replace_scene(&mut self, transition: SceneTransition) -> Result<(), DirectorError> {
        if self.running.is_none() {
            warn!(target: "director", "replace_scene called with no running scene");
            return Err(DirectorError::NotRunning);
        }

        // A new replacement completes any fade still in flight.
        self.finish_fade();

        match transition {
            SceneTransition::Immediate(scene) => {
                info!(target: "director", "Replacing running scene");
                if let Some(mut old) = self.enter(scene) {
                    old.on_exit();
                }
            }
            SceneTransition::Fade(fade) => {
                let duration = fade.duration();
                info!(target: "director", "Replacing running scene with {}s fade", duration);

                let outgoing = self.enter(fade.into_scene());
                if let Some(mut outgoing) = outgoing {
                    if duration > 0.0 {
                        self.fade = Some(ActiveFade {
                            duration,
                            elapsed: 0.0,
                            outgoing,
                        });
                    } else {
                        outgoing.on_exit();
                    }
                }
            }
        }

        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
