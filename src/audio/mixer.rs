use std::collections::HashMap;

use crate::config::AudioConfig;
use crate::timer::Timer;

use super::{AudioBackend, SoundHandle, TrackHandle};

#[derive(Clone, Debug)]
struct Playing {
    name: String,
    handle: TrackHandle,
}

/// Music mixer: one current track, at most one incoming track, and an
/// optional pitch shift applied to both.
///
/// Cross-fade and pitch shift are independent state machines that may run
/// at the same time. Both advance in [`Mixer::advance`], once per tick.
pub struct Mixer {
    backend: Box<dyn AudioBackend>,
    tracks: HashMap<String, TrackHandle>,
    sounds: HashMap<String, SoundHandle>,

    current: Option<Playing>,
    next: Option<Playing>,

    /// Pitch committed by the last finished shift.
    current_pitch: f32,
    target_pitch: f32,
    /// Pitch last applied to the backend.
    live_pitch: f32,

    fade: Timer,
    shift: Timer,
    mixing: bool,
    shifting: bool,
}

impl Mixer {
    /// Register every track and sound listed in `config` with `backend`.
    pub fn new(mut backend: Box<dyn AudioBackend>, config: &AudioConfig) -> Self {
        let tracks = config
            .tracks
            .iter()
            .map(|t| (t.name.clone(), backend.load_track(&t.path)))
            .collect();
        let sounds = config
            .sounds
            .iter()
            .map(|s| (s.name.clone(), backend.load_sound(&s.path, s.volume)))
            .collect();

        Self {
            backend,
            tracks,
            sounds,
            current: None,
            next: None,
            current_pitch: 1.0,
            target_pitch: 1.0,
            live_pitch: 1.0,
            fade: Timer::new(config.crossfade_secs),
            shift: Timer::new(config.pitch_shift_secs),
            mixing: false,
            shifting: false,
        }
    }

    // ── Requests ───────────────────────────────────────────────────────────

    /// Cross-fade from the current track to `name`.
    ///
    /// Ignored when `name` is already current or a cross-fade is running.
    ///
    /// # Panics
    /// If `name` was never registered.
    pub fn request_track(&mut self, name: &str, looping: bool) {
        let handle = self.track_handle(name);

        if self.current.as_ref().is_some_and(|c| c.handle == handle) {
            log::debug!("track '{name}' is already playing, no change");
            return;
        }
        if self.mixing {
            log::debug!("track '{name}' requested while mixing, no change");
            return;
        }

        log::info!("cross-fading to '{name}'");
        self.backend.play_track(handle, looping);
        self.backend.set_track_volume(handle, 0.0);
        self.backend.set_track_pitch(handle, self.live_pitch);
        self.next = Some(Playing { name: name.to_string(), handle });
        self.fade.reset();
        self.mixing = true;
    }

    /// Glide the music pitch to `target`. Ignored when nothing is playing.
    /// A request during a running shift restarts it from the committed pitch.
    pub fn request_pitch(&mut self, target: f32) {
        if self.current.is_none() {
            log::debug!("pitch {target} requested with no track playing, no change");
            return;
        }
        self.target_pitch = target;
        self.shift.reset();
        self.shifting = true;
    }

    /// Play a registered sound effect.
    ///
    /// # Panics
    /// If `name` was never registered.
    pub fn play_sound(&mut self, name: &str) {
        let Some(&handle) = self.sounds.get(name) else {
            panic!("unknown sound effect '{name}'");
        };
        self.backend.play_sound(handle);
    }

    // ── Per-tick ───────────────────────────────────────────────────────────

    pub fn advance(&mut self, dt: f32) {
        if self.mixing {
            self.fade.tick(dt);
            let t = self.fade.progress();

            if let Some(current) = &self.current {
                self.backend.set_track_volume(current.handle, 1.0 - t);
            }
            if let Some(next) = &self.next {
                self.backend.set_track_volume(next.handle, t);
            }

            if self.fade.is_finished() {
                if let Some(outgoing) = self.current.take() {
                    self.backend.stop_track(outgoing.handle);
                }
                self.current = self.next.take();
                self.mixing = false;
                log::info!("cross-fade complete, now playing '{}'", self.current_track().unwrap_or("-"));
            }
        }

        if self.shifting {
            self.shift.tick(dt);
            self.live_pitch = if self.shift.is_finished() {
                self.target_pitch
            } else {
                let t = self.shift.progress();
                self.current_pitch + t * (self.target_pitch - self.current_pitch)
            };

            for playing in self.current.iter().chain(self.next.iter()) {
                self.backend.set_track_pitch(playing.handle, self.live_pitch);
            }

            if self.shift.is_finished() {
                self.current_pitch = self.target_pitch;
                self.live_pitch = self.target_pitch;
                self.shifting = false;
                log::debug!("pitch shift complete at {}", self.current_pitch);
            }
        }

        for playing in self.current.iter().chain(self.next.iter()) {
            self.backend.update_track(playing.handle);
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    /// # Panics
    /// If `name` was never registered.
    pub fn track_handle(&self, name: &str) -> TrackHandle {
        match self.tracks.get(name) {
            Some(&handle) => handle,
            None => panic!("unknown music track '{name}'"),
        }
    }

    /// # Panics
    /// If `name` was never registered.
    pub fn sound_handle(&self, name: &str) -> SoundHandle {
        match self.sounds.get(name) {
            Some(&handle) => handle,
            None => panic!("unknown sound effect '{name}'"),
        }
    }

    pub fn has_sound(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
    }

    pub fn current_track(&self) -> Option<&str> {
        self.current.as_ref().map(|p| p.name.as_str())
    }

    pub fn next_track(&self) -> Option<&str> {
        self.next.as_ref().map(|p| p.name.as_str())
    }

    pub fn is_mixing(&self) -> bool { self.mixing }
    pub fn is_shifting(&self) -> bool { self.shifting }

    /// Pitch committed by the last completed shift.
    pub fn current_pitch(&self) -> f32 { self.current_pitch }
    pub fn target_pitch(&self) -> f32 { self.target_pitch }
    /// Pitch currently applied, including an in-progress shift.
    pub fn pitch(&self) -> f32 { self.live_pitch }
}
