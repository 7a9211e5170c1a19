//=========================================================================
// UI Bundle Loader
//=========================================================================
//
// Resolves externally authored UI bundle files against a resource
// directory. The bundle format itself is opaque to this crate.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use log::debug;

//=== UiLoader ============================================================

/// Loader for externally authored UI bundles.
pub trait UiLoader {
    /// Sets the directory bundle files are read from.
    fn set_resource_path(&mut self, path: &str);

    fn resource_path(&self) -> &Path;

    /// Full path of a bundle file inside the resource directory.
    fn resolve(&self, file: &str) -> PathBuf {
        self.resource_path().join(file)
    }
}

//=== BundleLoader ========================================================

/// Path-only [`UiLoader`] used by the native host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleLoader {
    resource_path: PathBuf,
}

impl BundleLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UiLoader for BundleLoader {
    fn set_resource_path(&mut self, path: &str) {
        debug!(target: "boot", "UI bundle resource path set to {:?}", path);
        self.resource_path = PathBuf::from(path);
    }

    fn resource_path(&self) -> &Path {
        &self.resource_path
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
