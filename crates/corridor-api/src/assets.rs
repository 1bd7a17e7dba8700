//! Filesystem-backed asset catalog.

use std::path::{Path, PathBuf};

use corridor_adventure::domain::assets::{AssetCatalog, Track};

/// Audio extensions tried for each track, in order.
pub const SOUND_EXTENSIONS: [&str; 4] = ["mp3", "wav", "aac", "m4a"];

/// Looks for images under `<root>/images` and tracks under `<root>/sounds`.
#[derive(Debug, Clone)]
pub struct FsAssetCatalog {
    images: PathBuf,
    sounds: PathBuf,
}

impl FsAssetCatalog {
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            images: root.join("images"),
            sounds: root.join("sounds"),
        }
    }
}

impl AssetCatalog for FsAssetCatalog {
    fn has_image(&self, name: &str) -> bool {
        self.images.join(name).is_file()
    }

    fn track_file(&self, track: Track) -> Option<String> {
        SOUND_EXTENSIONS
            .iter()
            .map(|ext| format!("{}.{ext}", track.file_stem()))
            .find(|file| self.sounds.join(file).is_file())
    }
}
