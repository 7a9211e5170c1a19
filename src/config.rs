//=========================================================================
// Boot Configuration
//=========================================================================
//
// Startup settings, loadable from TOML.
//
// Every field is optional in the file; missing values fall back to the
// defaults below. Unknown keys and unknown platform identifiers are
// rejected.
//
// Example:
// ```toml
// resource_path = "res/CCB/"
// fade_duration = 0.5
// reference_width = 480.0
// platform = "desktop"
//
// [window]
// title = "Watermelon"
// width = 960
// height = 640
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::PlatformKind;
use crate::error::BootError;

//=== Defaults ============================================================

/// Directory the UI bundle loader reads from.
pub const DEFAULT_RESOURCE_PATH: &str = "res/CCB/";

/// Fade duration (seconds) used when replacing a running scene.
pub const DEFAULT_FADE_DURATION: f32 = 0.5;

/// Design width the browser size ratio is computed against.
pub const DEFAULT_REFERENCE_WIDTH: f32 = 480.0;

//=== WindowConfig ========================================================

/// Native window settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Aetheric Boot".to_string(),
            width: 960,
            height: 640,
        }
    }
}

//=== BootConfig ==========================================================

/// Bootstrap settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootConfig {
    pub resource_path: String,
    pub fade_duration: f32,
    pub reference_width: f32,

    /// Target platform; detected from the build target when absent.
    pub platform: Option<PlatformKind>,

    pub window: WindowConfig,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            fade_duration: DEFAULT_FADE_DURATION,
            reference_width: DEFAULT_REFERENCE_WIDTH,
            platform: None,
            window: WindowConfig::default(),
        }
    }
}

impl BootConfig {
    //--- Loading ----------------------------------------------------------

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, BootError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BootError> {
        let path = path.as_ref();
        debug!(target: "boot", "Loading config from {:?}", path);

        let source = fs::read_to_string(path).map_err(|source| BootError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    //--- Validation -------------------------------------------------------

    /// Checks value ranges that the type system does not capture.
    pub fn validate(&self) -> Result<(), BootError> {
        if !self.fade_duration.is_finite() || self.fade_duration < 0.0 {
            return Err(BootError::InvalidFadeDuration(self.fade_duration));
        }

        if !self.reference_width.is_finite() || self.reference_width <= 0.0 {
            return Err(BootError::InvalidReferenceWidth(self.reference_width));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(BootError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }

        Ok(())
    }

    /// Configured platform, or the detected one.
    pub fn platform_kind(&self) -> PlatformKind {
        self.platform.unwrap_or_else(PlatformKind::detect)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
