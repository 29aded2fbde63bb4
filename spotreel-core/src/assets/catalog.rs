use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{SpotreelError, SpotreelResult},
    select::unique::Named,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A media file available to the renderer.
pub struct StaticFile {
    /// Path relative to the media root, `/`-separated. Unique within a catalog.
    pub name: String,
    /// Location the renderer loads the file from.
    pub src: String,
    /// Pixel width, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixel height, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl StaticFile {
    /// File with unknown dimensions.
    pub fn new(name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src: src.into(),
            width: None,
            height: None,
        }
    }

    /// Video or audio by extension; `None` for anything else.
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_name(&self.name)
    }

    /// Resolution tag parsed from the file name.
    pub fn resolution(&self) -> Resolution {
        Resolution::classify(&self.name)
    }
}

impl Named for StaticFile {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Media type of a catalog entry.
pub enum MediaKind {
    /// `.mp4` background footage.
    Video,
    /// `.mp3` background music.
    Audio,
}

impl MediaKind {
    /// Classify by extension, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("mp4") {
            Some(Self::Video)
        } else if ext.eq_ignore_ascii_case("mp3") {
            Some(Self::Audio)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Portrait resolution tag carried in stock footage file names.
pub enum Resolution {
    /// `hd_1080_1920` or `_1080_1920_`.
    Hd1080x1920,
    /// `uhd_2160_3840`.
    Uhd2160x3840,
    /// `uhd_2160_4096`.
    Uhd2160x4096,
    /// No recognized marker.
    Other,
}

impl Resolution {
    /// Match the first known marker found in `name`.
    pub fn classify(name: &str) -> Self {
        if name.contains("hd_1080_1920") || name.contains("_1080_1920_") {
            Self::Hd1080x1920
        } else if name.contains("uhd_2160_3840") {
            Self::Uhd2160x3840
        } else if name.contains("uhd_2160_4096") {
            Self::Uhd2160x4096
        } else {
            Self::Other
        }
    }
}

/// Number of videos per [`Resolution`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionCounts {
    /// [`Resolution::Hd1080x1920`] videos.
    pub hd_1080x1920: usize,
    /// [`Resolution::Uhd2160x3840`] videos.
    pub uhd_2160x3840: usize,
    /// [`Resolution::Uhd2160x4096`] videos.
    pub uhd_2160x4096: usize,
    /// Videos without a recognized marker.
    pub other: usize,
}

#[derive(Clone, Debug, Default)]
/// Flat list of media files, sorted by name.
pub struct MediaCatalog {
    files: Vec<StaticFile>,
}

impl MediaCatalog {
    /// Catalog `files`, sorted by name.
    pub fn new(mut files: Vec<StaticFile>) -> Self {
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Self { files }
    }

    /// Walk `root` recursively and catalog every regular, non-hidden file.
    ///
    /// `name` is the path relative to `root`; `src` is the full path on disk.
    #[tracing::instrument]
    pub fn scan_dir(root: &Path) -> SpotreelResult<Self> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            let entries = std::fs::read_dir(&dir).map_err(|e| SpotreelError::io(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| SpotreelError::io(&dir, e))?;
                let path = entry.path();
                if entry.file_name().to_string_lossy().starts_with('.') {
                    continue;
                }
                let file_type = entry.file_type().map_err(|e| SpotreelError::io(&path, e))?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    files.push(static_file_for(root, &path)?);
                }
            }
        }

        let catalog = Self::new(files);
        tracing::debug!(files = catalog.files.len(), "scanned media directory");
        Ok(catalog)
    }

    /// All files, sorted by name.
    pub fn files(&self) -> &[StaticFile] {
        &self.files
    }

    /// Whether the catalog holds no files at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files of one media kind, in name order.
    pub fn of_kind(&self, kind: MediaKind) -> Vec<StaticFile> {
        self.files
            .iter()
            .filter(|f| f.kind() == Some(kind))
            .cloned()
            .collect()
    }

    /// `.mp4` files.
    pub fn videos(&self) -> Vec<StaticFile> {
        self.of_kind(MediaKind::Video)
    }

    /// `.mp3` files.
    pub fn audio(&self) -> Vec<StaticFile> {
        self.of_kind(MediaKind::Audio)
    }

    /// Resolution breakdown of the video files.
    pub fn resolution_counts(&self) -> ResolutionCounts {
        let mut counts = ResolutionCounts::default();
        for f in self.files.iter().filter(|f| f.kind() == Some(MediaKind::Video)) {
            match f.resolution() {
                Resolution::Hd1080x1920 => counts.hd_1080x1920 += 1,
                Resolution::Uhd2160x3840 => counts.uhd_2160x3840 += 1,
                Resolution::Uhd2160x4096 => counts.uhd_2160x4096 += 1,
                Resolution::Other => counts.other += 1,
            }
        }
        counts
    }

    /// Log video/audio totals and the resolution breakdown at info level.
    pub fn log_summary(&self) {
        let counts = self.resolution_counts();
        tracing::info!(
            videos = self.videos().len(),
            audio = self.audio().len(),
            hd_1080x1920 = counts.hd_1080x1920,
            uhd_2160x3840 = counts.uhd_2160x3840,
            uhd_2160x4096 = counts.uhd_2160x4096,
            "media catalog"
        );
    }
}

fn static_file_for(root: &Path, path: &Path) -> SpotreelResult<StaticFile> {
    let rel = path.strip_prefix(root).map_err(|_| {
        SpotreelError::validation(format!(
            "'{}' is not under media root '{}'",
            path.display(),
            root.display()
        ))
    })?;
    let name = normalize_rel_path(&rel.to_string_lossy())?;
    Ok(StaticFile::new(name, path_to_src(path)))
}

fn path_to_src(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Normalize a media-relative path to `/`-separated form.
///
/// Rejects absolute paths, `..` segments and empty paths.
pub fn normalize_rel_path(source: &str) -> SpotreelResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(SpotreelError::validation("media paths must be relative"));
    }
    if s.is_empty() {
        return Err(SpotreelError::validation("media path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(SpotreelError::validation("media paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(SpotreelError::validation(
            "media path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;
