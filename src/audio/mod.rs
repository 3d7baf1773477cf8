//! Audio collaborator and the music mixer built on top of it.
//!
//! [`AudioBackend`] is the thin seam to the sound library: load, play, stop,
//! volume, pitch and per-tick stream servicing. [`Mixer`] owns one backend
//! and drives cross-fades and pitch shifts over it.

mod kira_backend;
mod mixer;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub use kira_backend::KiraBackend;
pub use mixer::Mixer;

/// Backend-issued handle to a loaded music track.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackHandle(pub usize);

/// Backend-issued handle to a loaded sound effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub usize);

pub trait AudioBackend {
    /// Register a music track. Load failures are the backend's to report;
    /// the returned handle stays valid and simply plays nothing.
    fn load_track(&mut self, path: &Path) -> TrackHandle;
    /// Register a sound effect played at `volume` (0.0 - 1.0).
    fn load_sound(&mut self, path: &Path, volume: f32) -> SoundHandle;

    fn play_track(&mut self, track: TrackHandle, looping: bool);
    fn stop_track(&mut self, track: TrackHandle);
    fn set_track_volume(&mut self, track: TrackHandle, volume: f32);
    fn set_track_pitch(&mut self, track: TrackHandle, pitch: f32);
    /// Service the track's stream buffer. Called once per tick for every
    /// track the mixer holds.
    fn update_track(&mut self, track: TrackHandle);

    /// Fire-and-forget playback.
    fn play_sound(&mut self, sound: SoundHandle);
}

// ── NullBackend ──────────────────────────────────────────────────────────────

/// Silent backend for machines without an audio device.
#[derive(Debug, Default)]
pub struct NullBackend {
    tracks: usize,
    sounds: usize,
}

impl AudioBackend for NullBackend {
    fn load_track(&mut self, _path: &Path) -> TrackHandle {
        self.tracks += 1;
        TrackHandle(self.tracks - 1)
    }

    fn load_sound(&mut self, _path: &Path, _volume: f32) -> SoundHandle {
        self.sounds += 1;
        SoundHandle(self.sounds - 1)
    }

    fn play_track(&mut self, _track: TrackHandle, _looping: bool) {}
    fn stop_track(&mut self, _track: TrackHandle) {}
    fn set_track_volume(&mut self, _track: TrackHandle, _volume: f32) {}
    fn set_track_pitch(&mut self, _track: TrackHandle, _pitch: f32) {}
    fn update_track(&mut self, _track: TrackHandle) {}
    fn play_sound(&mut self, _sound: SoundHandle) {}
}

// ── RecordingBackend ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct TrackRecord {
    pub path: PathBuf,
    pub playing: bool,
    pub looping: bool,
    pub volume: f32,
    pub pitch: f32,
    /// Number of stream updates received.
    pub updates: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SoundRecord {
    pub path: PathBuf,
    pub volume: f32,
    pub plays: u32,
}

#[derive(Debug, Default)]
struct Recorded {
    tracks: Vec<TrackRecord>,
    sounds: Vec<SoundRecord>,
}

/// Backend that keeps the last state applied to every handle.
///
/// Clones share the same record, so a caller can hand one clone to the
/// [`Mixer`] and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    state: Rc<RefCell<Recorded>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, track: TrackHandle) -> TrackRecord {
        self.state.borrow().tracks[track.0].clone()
    }

    pub fn sound(&self, sound: SoundHandle) -> SoundRecord {
        self.state.borrow().sounds[sound.0].clone()
    }

    pub fn playing_tracks(&self) -> usize {
        self.state.borrow().tracks.iter().filter(|t| t.playing).count()
    }
}

impl AudioBackend for RecordingBackend {
    fn load_track(&mut self, path: &Path) -> TrackHandle {
        let mut state = self.state.borrow_mut();
        state.tracks.push(TrackRecord {
            path: path.to_path_buf(),
            playing: false,
            looping: false,
            volume: 1.0,
            pitch: 1.0,
            updates: 0,
        });
        TrackHandle(state.tracks.len() - 1)
    }

    fn load_sound(&mut self, path: &Path, volume: f32) -> SoundHandle {
        let mut state = self.state.borrow_mut();
        state.sounds.push(SoundRecord { path: path.to_path_buf(), volume, plays: 0 });
        SoundHandle(state.sounds.len() - 1)
    }

    fn play_track(&mut self, track: TrackHandle, looping: bool) {
        let record = &mut self.state.borrow_mut().tracks[track.0];
        record.playing = true;
        record.looping = looping;
    }

    fn stop_track(&mut self, track: TrackHandle) {
        self.state.borrow_mut().tracks[track.0].playing = false;
    }

    fn set_track_volume(&mut self, track: TrackHandle, volume: f32) {
        self.state.borrow_mut().tracks[track.0].volume = volume;
    }

    fn set_track_pitch(&mut self, track: TrackHandle, pitch: f32) {
        self.state.borrow_mut().tracks[track.0].pitch = pitch;
    }

    fn update_track(&mut self, track: TrackHandle) {
        self.state.borrow_mut().tracks[track.0].updates += 1;
    }

    fn play_sound(&mut self, sound: SoundHandle) {
        self.state.borrow_mut().sounds[sound.0].plays += 1;
    }
}
