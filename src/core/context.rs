//=========================================================================
// Engine Context
//=========================================================================
//
// Explicit handle to the engine services used during bootstrap.
//
// Services are passed in rather than looked up globally, so the
// bootstrap runs unchanged against the native host or a test fake.
//
// Architecture:
//   EngineContext (trait)
//     ├─ audio_engine()  → &mut dyn AudioEngine
//     ├─ director()      → &mut dyn Director
//     └─ ui_loader()     → &mut dyn UiLoader
//
//   Services<D>: owned implementation used by the host
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::audio::{AudioEngine, SilentAudio};
use crate::core::director::Director;
use crate::core::ui_loader::{BundleLoader, UiLoader};

//=== EngineContext Trait =================================================

/// Capability set the bootstrap needs from its host.
pub trait EngineContext {
    fn audio_engine(&mut self) -> &mut dyn AudioEngine;

    fn director(&mut self) -> &mut dyn Director;

    fn ui_loader(&mut self) -> &mut dyn UiLoader;
}

//=== Services ============================================================

/// Owned set of engine services.
///
/// The director type stays concrete so the host can keep driving it
/// (ticks, resizes) after the bootstrap has run.
pub struct Services<D: Director> {
    pub audio: Box<dyn AudioEngine>,
    pub director: D,
    pub ui_loader: BundleLoader,
}

impl<D: Director> Services<D> {
    /// Creates services around `director` with silent audio.
    pub fn new(director: D) -> Self {
        Self {
            audio: Box::new(SilentAudio::new()),
            director,
            ui_loader: BundleLoader::new(),
        }
    }

    /// Replaces the audio backend.
    pub fn with_audio<A: AudioEngine + 'static>(mut self, audio: A) -> Self {
        self.audio = Box::new(audio);
        self
    }
}

impl<D: Director> EngineContext for Services<D> {
    fn audio_engine(&mut self) -> &mut dyn AudioEngine {
        self.audio.as_mut()
    }

    fn director(&mut self) -> &mut dyn Director {
        &mut self.director
    }

    fn ui_loader(&mut self) -> &mut dyn UiLoader {
        &mut self.ui_loader
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
