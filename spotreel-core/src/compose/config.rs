use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::{Canvas, Fps},
    error::{SpotreelError, SpotreelResult},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Timing and sampling parameters for one reel.
///
/// Every field has a default matching the portrait 30 fps template: a 5 s
/// intro, three 15 s profiles and a 15 s outro over five background videos.
pub struct ReelConfig {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output frame size.
    pub canvas: Canvas,
    /// Length of the intro scene.
    pub intro_frames: u64,
    /// Length of each profile scene.
    pub profile_frames: u64,
    /// Length of the outro scene.
    pub outro_frames: u64,
    /// Records featured as profile scenes.
    pub profile_count: usize,
    /// Distinct background videos sampled from the catalog.
    pub video_count: usize,
    /// Records listed on the intro scene.
    pub intro_headlines: usize,
    /// Fixes every random pick when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1080,
                height: 1920,
            },
            intro_frames: 150,
            profile_frames: 450,
            outro_frames: 450,
            profile_count: 3,
            video_count: 5,
            intro_headlines: 3,
            seed: None,
        }
    }
}

impl ReelConfig {
    /// Load a JSON config file; omitted fields keep their defaults.
    pub fn from_path(path: &Path) -> SpotreelResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SpotreelError::io(path, e))?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            SpotreelError::serde(format!("parse config '{}': {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero frame rates, empty canvases, zero-length scenes and a
    /// zero profile count.
    pub fn validate(&self) -> SpotreelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SpotreelError::validation("canvas width/height must be > 0"));
        }
        if self.intro_frames == 0 || self.profile_frames == 0 || self.outro_frames == 0 {
            return Err(SpotreelError::validation("scene lengths must be > 0 frames"));
        }
        if self.profile_count == 0 {
            return Err(SpotreelError::validation("profile_count must be > 0"));
        }
        Ok(())
    }

    /// Total frames for a reel with `profiles` profile scenes.
    pub fn expected_duration(&self, profiles: usize) -> u64 {
        self.intro_frames
            .saturating_add(self.profile_frames.saturating_mul(profiles as u64))
            .saturating_add(self.outro_frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/config.rs"]
mod tests;
