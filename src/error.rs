//=========================================================================
// Errors
//=========================================================================
//
// Error types surfaced by the bootstrap, the director and the host.
//
// Startup failures are fatal for the host: `Engine::run` returns them
// and the binary exits. Nothing here attempts recovery.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== DirectorError =======================================================

/// Scene activation errors reported by a [`crate::core::director::Director`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectorError {
    /// `run_with_scene` called while a scene is already running.
    #[error("a scene is already running; use replace_scene instead")]
    AlreadyRunning,

    /// `replace_scene` called before any scene was started.
    #[error("no scene is running; use run_with_scene first")]
    NotRunning,
}

//=== BootError ===========================================================

/// Errors produced while configuring or bootstrapping the first scene.
#[derive(Debug, Error)]
pub enum BootError {
    /// Platform identifier outside the closed `browser`/`mobile`/`desktop` set.
    #[error("unknown platform identifier {0:?} (expected \"browser\", \"mobile\" or \"desktop\")")]
    UnknownPlatform(String),

    /// A scene root carries at most one boot layer.
    #[error("scene root already has a boot layer attached")]
    BootLayerAlreadyAttached,

    #[error("fade duration must be finite and non-negative, got {0}")]
    InvalidFadeDuration(f32),

    #[error("reference width must be finite and positive, got {0}")]
    InvalidReferenceWidth(f32),

    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error(transparent)]
    Director(#[from] DirectorError),

    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    WindowCreation(#[from] winit::error::OsError),
}

//=========================================================================
// Unit Tests
//=========================================================================
