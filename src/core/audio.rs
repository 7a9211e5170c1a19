//=========================================================================
// Audio Engine
//=========================================================================
//
// Capability surface for the audio service handed to the bootstrap.
//
// Mixing and playback live behind this trait in the host; the crate
// only resolves the service and exposes its volume controls.
//
//=========================================================================

/// Audio service resolved during bootstrap.
pub trait AudioEngine {
    /// Human-readable backend identifier, used in logs.
    fn backend_name(&self) -> &str;

    fn music_volume(&self) -> f32;

    /// Sets background music volume, clamped to `[0, 1]`.
    fn set_music_volume(&mut self, volume: f32);

    fn effects_volume(&self) -> f32;

    /// Sets sound effect volume, clamped to `[0, 1]`.
    fn set_effects_volume(&mut self, volume: f32);
}

//=== SilentAudio =========================================================

/// Audio engine that stores volumes but never produces sound.
///
/// Used by the native host until a real backend is plugged in, and by
/// tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SilentAudio {
    music_volume: f32,
    effects_volume: f32,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self {
            music_volume: 1.0,
            effects_volume: 1.0,
        }
    }
}

impl Default for SilentAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine for SilentAudio {
    fn backend_name(&self) -> &str {
        "silent"
    }

    fn music_volume(&self) -> f32 {
        self.music_volume
    }

    fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = clamp_volume(volume);
    }

    fn effects_volume(&self) -> f32 {
        self.effects_volume
    }

    fn set_effects_volume(&mut self, volume: f32) {
        self.effects_volume = clamp_volume(volume);
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_full_volume() {
        let audio = SilentAudio::new();
        assert_eq!(audio.music_volume(), 1.0);
        assert_eq!(audio.effects_volume(), 1.0);
        assert_eq!(audio.backend_name(), "silent");
    }

    #[test]
    fn volumes_are_clamped() {
        let mut audio = SilentAudio::new();

        audio.set_music_volume(1.5);
        audio.set_effects_volume(-0.2);
        assert_eq!(audio.music_volume(), 1.0);
        assert_eq!(audio.effects_volume(), 0.0);

        audio.set_music_volume(f32::NAN);
        assert_eq!(audio.music_volume(), 0.0);

        audio.set_effects_volume(0.25);
        assert_eq!(audio.effects_volume(), 0.25);
    }
}
