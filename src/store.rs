// src/store.rs
// On-disk avatar cache. One PNG per key, nothing else; presence of the file is the cache hit.

use std::{io::Write, path::PathBuf};

use tempfile::NamedTempFile;

use crate::config::AvatarOptions;
use crate::core::sanitize::sanitize_filename;
use crate::error::{Result, RosterError};
use crate::file::ensure_directory;

/// What an avatar file is named after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarKey {
    /// Leadership: the handle, sanitized.
    Handle(String),
    /// Everyone else: the numeric user id.
    Id(u64),
}

impl AvatarKey {
    pub fn stem(&self) -> String {
        match self {
            AvatarKey::Handle(h) => sanitize_filename(h),
            AvatarKey::Id(id) => id.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AvatarStore {
    dir: PathBuf,
    rel_prefix: String,
}

impl AvatarStore {
    pub fn new(dir: impl Into<PathBuf>, rel_prefix: impl Into<String>) -> Self {
        Self { dir: dir.into(), rel_prefix: rel_prefix.into() }
    }

    pub fn from_options(opts: &AvatarOptions) -> Self {
        Self::new(&opts.dir, &opts.rel_prefix)
    }

    pub fn path(&self, key: &AvatarKey) -> PathBuf {
        self.dir.join(join!(&key.stem(), ".png"))
    }

    /// Reference written into the page, e.g. `assets/avatars/99.png`.
    pub fn rel(&self, key: &AvatarKey) -> String {
        let prefix = self.rel_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            join!(&key.stem(), ".png")
        } else {
            format!("{prefix}/{}.png", key.stem())
        }
    }

    pub fn is_cached(&self, key: &AvatarKey) -> bool {
        self.path(key).is_file()
    }

    /// Write (or overwrite) the image for `key`.
    /// Bytes go to a temp file in the cache dir first and are renamed into
    /// place, so a cut-short write never shows up as a cache hit.
    pub fn save(&self, key: &AvatarKey, bytes: &[u8]) -> Result<PathBuf> {
        ensure_directory(&self.dir)?;
        let path = self.path(key);
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| RosterError::io(&self.dir, e))?;
        tmp.write_all(bytes).map_err(|e| RosterError::io(tmp.path(), e))?;
        tmp.persist(&path).map_err(|e| RosterError::io(&path, e.error))?;
        Ok(path)
    }
}
