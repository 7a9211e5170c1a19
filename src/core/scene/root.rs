//=========================================================================
// Scene Root
//=========================================================================
//
// Top-level container handed to the director.
//
// A root is created once per bootstrap call and owned by the director
// from activation until it is replaced. It never has more than one
// boot layer.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::debug;

//=== Internal Dependencies ===============================================

use super::Layer;
use crate::core::geometry::{Point, Size};
use crate::error::BootError;

//=== SceneRoot ===========================================================

/// Root of the scene graph built at startup.
pub struct SceneRoot {
    win_size: Size,
    center: Point,
    size_ratio: Option<f32>,
    position: Point,
    boot_layer: Option<Box<dyn Layer>>,
}

impl SceneRoot {
    //--- Construction -----------------------------------------------------

    /// Creates an empty root for the given window size.
    ///
    /// The center is derived as half the window size.
    pub fn new(win_size: Size) -> Self {
        Self {
            win_size,
            center: win_size.center(),
            size_ratio: None,
            position: Point::ORIGIN,
            boot_layer: None,
        }
    }

    //--- Children ---------------------------------------------------------

    /// Attaches the boot layer as this root's child.
    ///
    /// # Errors
    ///
    /// [`BootError::BootLayerAlreadyAttached`] if a boot layer is present.
    pub fn attach_boot_layer(&mut self, layer: Box<dyn Layer>) -> Result<(), BootError> {
        if self.boot_layer.is_some() {
            return Err(BootError::BootLayerAlreadyAttached);
        }

        debug!(target: "boot", "Attaching boot layer {:?}", layer.name());
        self.boot_layer = Some(layer);
        Ok(())
    }

    pub fn boot_layer(&self) -> Option<&dyn Layer> {
        self.boot_layer.as_deref()
    }

    pub fn child_count(&self) -> usize {
        usize::from(self.boot_layer.is_some())
    }

    //--- Accessors --------------------------------------------------------

    pub fn win_size(&self) -> Size {
        self.win_size
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Width ratio against the design reference; set on the browser path only.
    pub fn size_ratio(&self) -> Option<f32> {
        self.size_ratio
    }

    pub fn set_size_ratio(&mut self, ratio: f32) {
        self.size_ratio = Some(ratio);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    //--- Lifecycle --------------------------------------------------------

    pub fn on_enter(&mut self) {
        if let Some(layer) = self.boot_layer.as_mut() {
            layer.on_enter();
        }
    }

    pub fn on_exit(&mut self) {
        if let Some(layer) = self.boot_layer.as_mut() {
            layer.on_exit();
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(layer) = self.boot_layer.as_mut() {
            layer.update(dt);
        }
    }
}

impl fmt::Debug for SceneRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneRoot")
            .field("win_size", &self.win_size)
            .field("center", &self.center)
            .field("size_ratio", &self.size_ratio)
            .field("position", &self.position)
            .field("boot_layer", &self.boot_layer.as_ref().map(|layer| layer.name()))
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
