use std::collections::HashMap;
use std::path::Path;
use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundSettings},
    Volume,
};

use crate::config::AssetConfig;

/// The game's sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Collect,
    Jump,
    GameOver,
}

/// Fire-and-forget sound playback.
pub trait SoundSink {
    fn play(&mut self, sound: Sound);
}

/// Records what was played instead of playing it.
impl SoundSink for Vec<Sound> {
    fn play(&mut self, sound: Sound) {
        self.push(sound);
    }
}

pub struct AudioContext {
    /// `None` when audio hardware is unavailable (headless / CI / no audio device)
    /// or when the game runs muted.
    manager: Option<AudioManager>,
    sounds: HashMap<Sound, StaticSoundData>,
    volume: f32,
}

impl AudioContext {
    pub fn new() -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => Some(m),
            Err(e) => {
                tracing::warn!("failed to initialize audio manager: {e}; audio disabled");
                None
            }
        };
        Self { manager, sounds: HashMap::new(), volume: 1.0 }
    }

    /// A context that never opens an audio device.
    pub fn muted() -> Self {
        Self { manager: None, sounds: HashMap::new(), volume: 1.0 }
    }

    /// Open the device and load the three effects named in `assets`.
    pub fn from_assets(assets: &AssetConfig) -> Self {
        let mut ctx = Self::new();
        ctx.set_volume(assets.sound_volume);
        if ctx.is_available() {
            ctx.load_sound(Sound::Collect, &assets.collect_sound);
            ctx.load_sound(Sound::Jump, &assets.jump_sound);
            ctx.load_sound(Sound::GameOver, &assets.game_over_sound);
        }
        ctx
    }

    /// Returns true if audio hardware is available.
    pub fn is_available(&self) -> bool { self.manager.is_some() }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 2.0);
    }

    /// Load a sound file (OGG, WAV, etc.) into memory.
    /// A missing or unreadable file leaves that sound silent.
    pub fn load_sound<P: AsRef<Path>>(&mut self, sound: Sound, path: P) {
        match StaticSoundData::from_file(path.as_ref()) {
            Ok(data) => { self.sounds.insert(sound, data); }
            Err(e) => tracing::warn!(
                "failed to load {sound:?} from '{}': {e}",
                path.as_ref().display()
            ),
        }
    }
}

impl SoundSink for AudioContext {
    fn play(&mut self, sound: Sound) {
        let Some(manager) = self.manager.as_mut() else { return; };
        let Some(data) = self.sounds.get(&sound) else { return; };

        let mut settings = StaticSoundSettings::new();
        settings.volume = Volume::Amplitude(self.volume as f64).into();

        if let Err(e) = manager.play(data.clone().with_settings(settings)) {
            tracing::warn!("failed to play {sound:?}: {e}");
        }
    }
}

impl Default for AudioContext {
    fn default() -> Self { Self::new() }
}
