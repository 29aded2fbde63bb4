//! Scene sequencing for a reel.
//!
//! A reel is an intro, one profile scene per featured record, and an outro,
//! laid out back-to-back on a single timeline. Each scene gets a background
//! video drawn from a de-duplicated random sample of the media catalog, and the
//! whole reel gets one randomly chosen music track.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    assets::catalog::{MediaCatalog, StaticFile},
    compose::config::ReelConfig,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{SpotreelError, SpotreelResult},
    records::model::{Headline, InfoRow, ReelRecord},
    select::unique::{pick_one, select_unique},
};

/// Which record type a reel features; decides how backgrounds are assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReelKind {
    /// Destination spots; the intro keeps `videos[0]` to itself.
    Spot,
    /// Job postings; the first profile shares `videos[0]` with the intro.
    Job,
}

impl ReelKind {
    /// Index into the sampled videos for profile `index`.
    pub fn profile_video_index(self, index: usize) -> usize {
        match self {
            Self::Spot => index + 1,
            Self::Job => index,
        }
    }
}

/// What a scene shows.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum SceneKind<R> {
    /// Opening title card listing the featured records.
    Intro {
        /// Title and rating line per listed record.
        headlines: Vec<Headline>,
    },
    /// One featured record.
    Profile {
        /// Position among the profile scenes.
        index: usize,
        /// The featured record.
        record: R,
        /// Detail rows shown under the title.
        rows: Vec<InfoRow>,
    },
    /// Closing call-to-action.
    Outro,
}

/// One scene placed on the reel timeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene<R> {
    /// Scene content.
    #[serde(flatten)]
    pub kind: SceneKind<R>,
    /// Frames the scene occupies.
    pub range: FrameRange,
    /// `None` only when the catalog holds no videos.
    pub background: Option<StaticFile>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Everything the renderer needs to produce one reel.
pub struct ReelPlan<R> {
    /// Record type featured.
    pub kind: ReelKind,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output frame size.
    pub canvas: Canvas,
    /// Total frames; equals the end of the last scene.
    pub duration: FrameIndex,
    /// Intro, profiles and outro in timeline order.
    pub scenes: Vec<Scene<R>>,
    /// Sampled background videos, in pick order.
    pub videos: Vec<StaticFile>,
    /// Background music, if the catalog holds any audio.
    pub music: Option<StaticFile>,
}

impl<R> ReelPlan<R> {
    /// Scene on screen at `frame`, if any.
    pub fn scene_at(&self, frame: FrameIndex) -> Option<&Scene<R>> {
        self.scenes.iter().find(|s| s.range.contains(frame))
    }

    /// Reel length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration.0)
    }

    /// Featured records in scene order.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.scenes.iter().filter_map(|s| match &s.kind {
            SceneKind::Profile { record, .. } => Some(record),
            _ => None,
        })
    }
}

/// Sample records and media and lay out a reel.
///
/// Fails only on an invalid `config` or when `records` is empty. Short
/// supplies degrade: fewer distinct records than `profile_count` shortens
/// the reel, and a catalog without videos or music leaves those slots empty.
#[tracing::instrument(skip_all)]
pub fn plan_reel<R, G>(
    records: &[R],
    catalog: &MediaCatalog,
    config: &ReelConfig,
    rng: &mut G,
) -> SpotreelResult<ReelPlan<R>>
where
    R: ReelRecord,
    G: Rng + ?Sized,
{
    config.validate()?;
    if records.is_empty() {
        return Err(SpotreelError::validation("no records to feature"));
    }

    let featured = select_unique(records, config.profile_count, rng);
    if featured.len() < config.profile_count {
        tracing::warn!(
            requested = config.profile_count,
            available = featured.len(),
            "fewer distinct records than profile scenes"
        );
    }

    let videos = select_unique(&catalog.videos(), config.video_count, rng);
    if videos.is_empty() {
        tracing::warn!("media catalog has no videos; scenes will have no background");
    }
    let music = pick_one(&catalog.audio(), rng).cloned();
    if music.is_none() {
        tracing::warn!("media catalog has no audio; reel will be silent");
    }

    let background = |index: usize| videos.get(index).or(videos.first()).cloned();

    let mut scenes = Vec::with_capacity(featured.len() + 2);
    let mut cursor = FrameIndex(0);

    let intro = FrameRange::starting_at(cursor, config.intro_frames);
    scenes.push(Scene {
        kind: SceneKind::Intro {
            headlines: featured
                .iter()
                .take(config.intro_headlines)
                .map(ReelRecord::headline)
                .collect(),
        },
        range: intro,
        background: background(0),
    });
    cursor = intro.end;

    for (index, record) in featured.into_iter().enumerate() {
        let range = FrameRange::starting_at(cursor, config.profile_frames);
        scenes.push(Scene {
            range,
            background: background(R::KIND.profile_video_index(index)),
            kind: SceneKind::Profile {
                index,
                rows: record.info_rows(),
                record,
            },
        });
        cursor = range.end;
    }

    let outro = FrameRange::starting_at(cursor, config.outro_frames);
    scenes.push(Scene {
        kind: SceneKind::Outro,
        range: outro,
        background: videos.last().cloned(),
    });

    tracing::info!(
        kind = ?R::KIND,
        scenes = scenes.len(),
        videos = videos.len(),
        music = music.as_ref().map(|m| m.name.as_str()).unwrap_or("-"),
        duration = outro.end.0,
        "planned reel"
    );

    Ok(ReelPlan {
        kind: R::KIND,
        fps: config.fps,
        canvas: config.canvas,
        duration: outro.end,
        scenes,
        videos,
        music,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/plan.rs"]
mod tests;
