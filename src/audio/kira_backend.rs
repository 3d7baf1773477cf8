use std::path::Path;

use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::{static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings}, PlaybackRate},
    tween::Tween,
    Volume,
};

use super::{AudioBackend, SoundHandle, TrackHandle};

struct Track {
    /// `None` when the file failed to load; the track then plays silently.
    data: Option<StaticSoundData>,
    handle: Option<StaticSoundHandle>,
}

struct Sound {
    data: Option<StaticSoundData>,
    volume: f32,
}

/// [`AudioBackend`] over a kira `AudioManager`.
///
/// kira streams on its own audio thread, so `update_track` has nothing to
/// service here.
pub struct KiraBackend {
    manager: AudioManager,
    tracks: Vec<Track>,
    sounds: Vec<Sound>,
}

impl KiraBackend {
    /// Open the default audio device.
    pub fn new() -> anyhow::Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| anyhow::anyhow!("failed to initialize audio manager: {e}"))?;
        Ok(Self { manager, tracks: Vec::new(), sounds: Vec::new() })
    }

    fn load(path: &Path) -> Option<StaticSoundData> {
        match StaticSoundData::from_file(path) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("failed to load audio '{}': {e}", path.display());
                None
            }
        }
    }

    fn handle_mut(&mut self, track: TrackHandle) -> Option<&mut StaticSoundHandle> {
        self.tracks.get_mut(track.0)?.handle.as_mut()
    }
}

impl AudioBackend for KiraBackend {
    fn load_track(&mut self, path: &Path) -> TrackHandle {
        self.tracks.push(Track { data: Self::load(path), handle: None });
        TrackHandle(self.tracks.len() - 1)
    }

    fn load_sound(&mut self, path: &Path, volume: f32) -> SoundHandle {
        self.sounds.push(Sound { data: Self::load(path), volume });
        SoundHandle(self.sounds.len() - 1)
    }

    fn play_track(&mut self, track: TrackHandle, looping: bool) {
        let Some(entry) = self.tracks.get_mut(track.0) else { return };
        let Some(data) = entry.data.as_ref() else { return };

        if let Some(mut old) = entry.handle.take() {
            let _ = old.stop(Tween::default());
        }

        let mut settings = StaticSoundSettings::new();
        if looping {
            settings = settings.loop_region(0.0..);
        }
        settings.volume = Volume::Amplitude(0.0).into();

        match self.manager.play(data.clone().with_settings(settings)) {
            Ok(handle) => entry.handle = Some(handle),
            Err(e) => log::warn!("failed to play track {}: {e}", track.0),
        }
    }

    fn stop_track(&mut self, track: TrackHandle) {
        if let Some(entry) = self.tracks.get_mut(track.0) {
            if let Some(mut handle) = entry.handle.take() {
                let _ = handle.stop(Tween::default());
            }
        }
    }

    fn set_track_volume(&mut self, track: TrackHandle, volume: f32) {
        if let Some(handle) = self.handle_mut(track) {
            let _ = handle.set_volume(Volume::Amplitude(volume.clamp(0.0, 1.0) as f64), Tween::default());
        }
    }

    fn set_track_pitch(&mut self, track: TrackHandle, pitch: f32) {
        if let Some(handle) = self.handle_mut(track) {
            let _ = handle.set_playback_rate(PlaybackRate::Factor(pitch as f64), Tween::default());
        }
    }

    fn update_track(&mut self, _track: TrackHandle) {}

    fn play_sound(&mut self, sound: SoundHandle) {
        let Some(entry) = self.sounds.get(sound.0) else { return };
        let Some(data) = entry.data.as_ref() else { return };

        let mut settings = StaticSoundSettings::new();
        settings.volume = Volume::Amplitude(entry.volume.clamp(0.0, 1.0) as f64).into();

        if let Err(e) = self.manager.play(data.clone().with_settings(settings)) {
            log::warn!("failed to play sound {}: {e}", sound.0);
        }
    }
}
