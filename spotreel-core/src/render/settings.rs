use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::compose::plan::ReelKind;

/// Offthread video frame cache cap (512 MiB).
pub const DEFAULT_VIDEO_CACHE_BYTES: u64 = 512 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Intermediate frame encoding used by the renderer.
pub enum ImageFormat {
    /// Lossy, fast.
    Jpeg,
    /// Lossless, slower.
    Png,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Renderer log verbosity.
pub enum LogLevel {
    /// Progress only.
    Info,
    /// Per-frame diagnostics.
    Verbose,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Settings handed to the external renderer alongside a plan.
pub struct RenderSettings {
    /// Output video codec.
    pub codec: String,
    /// Constant rate factor; lower is higher quality.
    pub crf: u8,
    /// Format of intermediate frames; JPEG is faster than PNG.
    pub image_format: ImageFormat,
    /// Frames rendered in parallel. One keeps memory use low enough for long reels.
    pub concurrency: u32,
    /// Output scale relative to the composition canvas.
    pub scale: f64,
    /// Per-frame render timeout in milliseconds.
    pub timeout_ms: u64,
    /// Memory cap for decoded source video frames.
    pub offthread_video_cache_bytes: u64,
    /// Replace an existing output file.
    pub overwrite: bool,
    /// Renderer log verbosity.
    pub log_level: LogLevel,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            codec: "h264".to_string(),
            crf: 18,
            image_format: ImageFormat::Jpeg,
            concurrency: 1,
            scale: 1.0,
            timeout_ms: 120_000,
            offthread_video_cache_bytes: DEFAULT_VIDEO_CACHE_BYTES,
            overwrite: true,
            log_level: LogLevel::Info,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Named adjustments on top of [`RenderSettings::default`].
pub enum RenderPreset {
    /// Plain defaults.
    #[default]
    Default,
    /// Single-frame concurrency with verbose renderer logs.
    Optimized,
    /// `Optimized` plus a 0.8 output scale for memory-constrained hosts.
    Safe,
}

impl RenderSettings {
    /// Settings with `preset` applied on top of the defaults.
    pub fn for_preset(preset: RenderPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply `preset` in place.
    pub fn apply_preset(&mut self, preset: RenderPreset) {
        if matches!(preset, RenderPreset::Optimized | RenderPreset::Safe) {
            self.concurrency = 1;
            self.log_level = LogLevel::Verbose;
        }
        if preset == RenderPreset::Safe {
            self.scale = 0.8;
        }
    }
}

/// Default output file prefix for a reel kind.
pub fn default_prefix(kind: ReelKind) -> &'static str {
    match kind {
        ReelKind::Spot => "TikTok-Spot",
        ReelKind::Job => "TikTok-Job",
    }
}

/// `<prefix>-YYYYMMDD-HHMMSS.mp4`
pub fn output_filename(prefix: &str, at: &NaiveDateTime) -> String {
    format!("{prefix}-{}.mp4", at.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
