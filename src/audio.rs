//! Sound cues for simulation events
//!
//! The simulation only reports events; actual playback happens behind the
//! [`AudioSink`] trait supplied by the host.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Player was hit by a projectile
    Impact,
    /// Player fell off the level
    GameOver,
}

impl SoundEffect {
    /// Resource the host should load for this cue
    pub fn resource(&self) -> &'static str {
        match self {
            SoundEffect::Jump => ":resources:sounds/phaseJump1.ogg",
            SoundEffect::Impact => ":resources:sounds/hit1.wav",
            SoundEffect::GameOver => ":resources:sounds/hurt3.wav",
        }
    }

    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::HitByProjectile { .. } => Some(SoundEffect::Impact),
            GameEvent::FellOffLevel => Some(SoundEffect::GameOver),
            GameEvent::RunReset { .. } => None,
        }
    }
}

/// Something that can play a sound at a volume
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink for headless runs: writes cues to the log
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: Vec<SoundEffect>,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {:?} ({}) at {:.2}", effect, effect.resource(), volume);
        self.played.push(effect);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the cues for one tick's events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ResetCause;

    #[test]
    fn test_event_mapping() {
        let events = [
            GameEvent::Jumped,
            GameEvent::HitByProjectile { count: 2 },
            GameEvent::RunReset {
                cause: ResetCause::Hit,
                score: 10,
            },
            GameEvent::FellOffLevel,
        ];
        let mut audio = AudioManager::new(LogAudio::default());
        audio.handle_events(&events);
        assert_eq!(
            audio.sink().played,
            vec![SoundEffect::Jump, SoundEffect::Impact, SoundEffect::GameOver]
        );
    }

    #[test]
    fn test_fall_and_hit_cues_differ() {
        assert_ne!(
            SoundEffect::for_event(&GameEvent::FellOffLevel),
            SoundEffect::for_event(&GameEvent::HitByProjectile { count: 1 })
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(LogAudio::default());
        audio.set_muted(true);
        audio.play(SoundEffect::Jump);
        audio.set_muted(false);
        audio.set_master_volume(0.0);
        audio.play(SoundEffect::Jump);
        assert!(audio.sink().played.is_empty());
    }
}
