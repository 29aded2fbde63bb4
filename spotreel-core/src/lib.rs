//! spotreel prepares data for templated short-form video reels.
//!
//! A reel is an intro, a few profile scenes (one per featured record) and an
//! outro, rendered by an external engine. This crate does everything up to the
//! renderer's input:
//!
//! 1. **Decode**: content API records arrive with HTML entities (`&amp;`,
//!    `&#39;`, ...); [`decode_entities`] / [`decode_entities_in_value`] resolve them.
//! 2. **Type**: raw records become [`Spot`] or [`Job`] values ([`decode_records`]).
//! 3. **Sample**: [`select_unique`] draws distinct records and background videos.
//! 4. **Plan**: [`plan_reel`] lays the scenes out on a frame timeline as a [`ReelPlan`].
//!
//! Decoding and selection are pure and never fail. Filesystem access is limited
//! to [`MediaCatalog::scan_dir`], [`ReelConfig::from_path`] and
//! [`load_records_from_path`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod compose;
mod foundation;
mod records;
mod render;
mod select;
mod text;

pub use assets::catalog::{
    MediaCatalog, MediaKind, Resolution, ResolutionCounts, StaticFile, normalize_rel_path,
};
pub use compose::config::ReelConfig;
pub use compose::plan::{ReelKind, ReelPlan, Scene, SceneKind, plan_reel};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use foundation::error::{SpotreelError, SpotreelResult};
pub use records::load::{decode_record, decode_records, load_records, load_records_from_path};
pub use records::model::{Headline, InfoRow, Job, ReelRecord, Scalar, Spot};
pub use render::settings::{
    DEFAULT_VIDEO_CACHE_BYTES, ImageFormat, LogLevel, RenderPreset, RenderSettings,
    default_prefix, output_filename,
};
pub use select::unique::{
    Named, pick_one, seeded_rng, select_unique, select_unique_random, shuffle,
};
pub use text::entities::{
    NAMED_ENTITIES, decode_entities, decode_entities_in_value, decode_entities_opt,
};
pub use text::rating::{
    MAX_STARS, STAR, parse_leading_f64, rating_text_to_stars, rating_to_stars, stars_from_score,
};
