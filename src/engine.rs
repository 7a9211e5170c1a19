//=========================================================================
// Aetheric Boot Engine
//
// Main entry point: configuration, bootstrap and native host.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Native Host]
//         │                          │
//         ├─ with_config()           ├─ boot(ctx)  (custom host / tests)
//         ├─ with_platform()         └─ run()      opens window,
//         ├─ with_fade_duration()                  bootstraps, ticks
//         └─ with_boot_layer()                     until close
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::bootstrap::{BootOutcome, Bootstrap};
use crate::config::BootConfig;
use crate::core::scene::{BootInfo, Layer};
use crate::core::{EngineContext, PlatformKind};
use crate::error::BootError;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Resource path**: `"res/CCB/"`
/// - **Fade duration**: 0.5 seconds
/// - **Reference width**: 480
/// - **Platform**: detected from the build target
/// - **Window**: "Aetheric Boot", 960x640
/// - **Boot layer**: [`crate::core::scene::BlankLayer`]
///
/// # Examples
///
/// ```no_run
/// use aetheric_boot::prelude::*;
///
/// struct MainMenu;
/// impl Layer for MainMenu {
///     fn name(&self) -> &str { "main-menu" }
/// }
///
/// EngineBuilder::new()
///     .with_title("Watermelon")
///     .with_fade_duration(0.5)
///     .with_boot_layer(|_info| Box::new(MainMenu) as Box<dyn Layer>)
///     .build()
///     .run()
///     .unwrap();
/// ```
pub struct EngineBuilder {
    config: BootConfig,
    factory: Option<Box<dyn FnMut(&BootInfo) -> Box<dyn Layer>>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: BootConfig::default(),
            factory: None,
        }
    }

    /// Replaces every setting with `config` (e.g. loaded from TOML).
    ///
    /// Values are validated when the engine boots or runs.
    pub fn with_config(mut self, config: BootConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the native window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window.title = title.into();
        self
    }

    /// Sets the native window size in logical units.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.config.window.width = width;
        self.config.window.height = height;
        self
    }

    /// Sets the UI bundle resource directory.
    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.config.resource_path = path.into();
        self
    }

    /// Sets the fade used when a scene is already running.
    ///
    /// Default: 0.5
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is negative or not finite.
    pub fn with_fade_duration(mut self, seconds: f32) -> Self {
        assert!(
            seconds.is_finite() && seconds >= 0.0,
            "Fade duration must be non-negative, got {}",
            seconds
        );
        self.config.fade_duration = seconds;
        self
    }

    /// Sets the design width used for the browser size ratio.
    ///
    /// Default: 480
    ///
    /// # Panics
    ///
    /// Panics if `width <= 0.0` or not finite.
    pub fn with_reference_width(mut self, width: f32) -> Self {
        assert!(
            width.is_finite() && width > 0.0,
            "Reference width must be positive, got {}",
            width
        );
        self.config.reference_width = width;
        self
    }

    /// Forces a platform instead of detecting it.
    pub fn with_platform(mut self, kind: PlatformKind) -> Self {
        self.config.platform = Some(kind);
        self
    }

    /// Sets the boot layer factory.
    pub fn with_boot_layer<F>(mut self, factory: F) -> Self
    where
        F: FnMut(&BootInfo) -> Box<dyn Layer> + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            target: "boot",
            "Building engine (resource path: {:?}, fade: {}s, platform: {})",
            self.config.resource_path,
            self.config.fade_duration,
            self.config.platform_kind()
        );

        let bootstrap = match self.factory {
            Some(factory) => Bootstrap::new(self.config).with_boot_layer(factory),
            None => Bootstrap::new(self.config),
        };

        Engine { bootstrap }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Configured bootstrap plus native host.
pub struct Engine {
    bootstrap: Bootstrap,
}

impl Engine {
    pub fn config(&self) -> &BootConfig {
        self.bootstrap.config()
    }

    /// Bootstraps the first scene against caller-provided services.
    ///
    /// Used by hosts other than the built-in Winit one.
    pub fn boot(&mut self, ctx: &mut dyn EngineContext) -> Result<BootOutcome, BootError> {
        self.bootstrap.run_detected(ctx)
    }

    /// Opens the native window, bootstraps the first scene and blocks
    /// until the window closes.
    ///
    /// # Errors
    ///
    /// Event loop, window creation or bootstrap failures.
    pub fn run(self) -> Result<(), BootError> {
        info!(target: "boot", "Starting engine runtime");

        let result = Platform::new(self.bootstrap).run();

        info!(target: "boot", "Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
