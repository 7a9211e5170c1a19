//=========================================================================
// Platform Kind
//=========================================================================
//
// Closed set of runtime platforms the bootstrap can target.
//
// Parsing is strict: anything other than "browser", "mobile" or
// "desktop" is rejected instead of being treated as native.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::error::BootError;

//=== PlatformKind ========================================================

/// Runtime platform selecting the bootstrap strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// Browser runtime (wasm). The scene is built but activated by the host page.
    Browser,

    /// Native mobile runtime.
    Mobile,

    /// Native desktop runtime.
    Desktop,
}

impl PlatformKind {
    /// Platform the crate was compiled for.
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Browser
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }

    pub fn is_browser(&self) -> bool {
        matches!(self, Self::Browser)
    }
}

//--- Trait Implementations -----------------------------------------------

impl FromStr for PlatformKind {
    type Err = BootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "browser" => Ok(Self::Browser),
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            other => Err(BootError::UnknownPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
