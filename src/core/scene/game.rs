//=========================================================================
// Game Layer
//=========================================================================
//
// Boot layer wrapping an application-defined game state value.
//
// The state is initialised exactly once, when the layer is built, so a
// factory can hand the bootstrap a fully prepared first screen.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::Layer;

//=== GameState ===========================================================

/// Application state driven by a [`GameLayer`].
pub trait GameState {
    /// Runs once, when the owning layer is constructed.
    fn init(&mut self) {}

    /// Runs every director tick while the owning scene is running.
    fn update(&mut self, _dt: f32) {}
}

//=== GameLayer ===========================================================

/// [`Layer`] built from a game state value.
///
/// ```rust
/// # use aetheric_boot::prelude::*;
/// #[derive(Default)]
/// struct Score {
///     points: u32,
/// }
///
/// impl GameState for Score {
///     fn init(&mut self) {
///         self.points = 0;
///     }
/// }
///
/// let boot = Bootstrap::new(BootConfig::default())
///     .with_boot_layer(|_info: &BootInfo| Box::new(GameLayer::new(Score::default())) as Box<dyn Layer>);
/// # let _ = boot;
/// ```
#[derive(Debug)]
pub struct GameLayer<S: GameState> {
    state: S,
}

impl<S: GameState> GameLayer<S> {
    pub fn new(mut state: S) -> Self {
        state.init();
        debug!(target: "boot", "Game layer initialised");
        Self { state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S: GameState> Layer for GameLayer<S> {
    fn name(&self) -> &str {
        "game"
    }

    fn update(&mut self, dt: f32) {
        self.state.update(dt);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
