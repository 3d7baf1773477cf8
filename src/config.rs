use std::path::{Path, PathBuf};

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Canvas size and tick rate. Level layouts are authored against these
/// dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Target ticks per second.
    pub frame_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 900, height: 600, frame_rate: 60 }
    }
}

impl WindowConfig {
    /// Horizontal center of the canvas.
    pub fn cw(&self) -> f32 {
        self.width as f32 / 2.0
    }

    /// Vertical center of the canvas.
    pub fn ch(&self) -> f32 {
        self.height as f32 / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.cw(), self.ch())
    }

    /// Returns `0.0` when `height` is zero to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Seconds per tick at the target frame rate.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}

// ── AudioConfig ───────────────────────────────────────────────────────────────

/// Music tracks the shipped levels request by name.
pub const REQUIRED_TRACKS: [&str; 3] = ["title_theme", "win_theme", "no_stopping_now"];
/// Sound effects bound to the shipped buttons.
pub const REQUIRED_SOUNDS: [&str; 2] = ["click", "grab"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackAsset {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoundAsset {
    pub name: String,
    pub path: PathBuf,
    #[serde(default = "full_volume")]
    pub volume: f32,
}

fn full_volume() -> f32 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Length of a music cross-fade in seconds.
    pub crossfade_secs: f32,
    /// Length of a pitch shift in seconds.
    pub pitch_shift_secs: f32,
    pub tracks: Vec<TrackAsset>,
    pub sounds: Vec<SoundAsset>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        let track = |name: &str| TrackAsset {
            name: name.to_string(),
            path: PathBuf::from(format!("res/music/{name}.ogg")),
        };
        let sound = |name: &str, volume: f32| SoundAsset {
            name: name.to_string(),
            path: PathBuf::from(format!("res/sfx/{name}.ogg")),
            volume,
        };
        Self {
            crossfade_secs: 1.5,
            pitch_shift_secs: 1.0,
            tracks: vec![track("title_theme"), track("win_theme"), track("no_stopping_now")],
            sounds: vec![sound("click", 0.22), sound("grab", 0.40)],
        }
    }
}

// ── GameConfig ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub version: String,
    pub window: WindowConfig,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub audio: AudioConfig,
}

impl AudioConfig {
    pub fn has_track(&self, name: &str) -> bool {
        self.tracks.iter().any(|t| t.name == name)
    }

    pub fn has_sound(&self, name: &str) -> bool {
        self.sounds.iter().any(|s| s.name == name)
    }

    /// Every asset the levels ask for must be listed; the mixer panics on
    /// unknown names.
    pub fn validate(&self) -> anyhow::Result<()> {
        for name in REQUIRED_TRACKS {
            anyhow::ensure!(self.has_track(name), "missing music track '{name}'");
        }
        for name in REQUIRED_SOUNDS {
            anyhow::ensure!(self.has_sound(name), "missing sound effect '{name}'");
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Blink's Thinks".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            window: WindowConfig::default(),
            seed: None,
            audio: AudioConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Missing fields keep their defaults; an asset
    /// list that drops a required name is rejected.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid game config")?;
        config.audio.validate().context("incomplete audio config")?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("failed to parse config '{}'", path.display()))
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize game config")
    }
}
