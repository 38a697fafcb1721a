// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::file::relative_href;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterOptions {
    pub source: SourceOptions,
    pub avatars: AvatarOptions,
    pub render: RenderOptions,
    pub output: OutputOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOptions {
    /// Live spreadsheet CSV export.
    Sheet { sheet_id: String, gid: String },
    /// Previously downloaded CSV export.
    File(PathBuf),
}

impl Default for SourceOptions {
    fn default() -> Self {
        SourceOptions::Sheet { sheet_id: s!(SHEET_ID), gid: s!(SHEET_GID) }
    }
}

impl SourceOptions {
    pub fn export_url(sheet_id: &str, gid: &str) -> String {
        format!("https://docs.google.com/spreadsheets/d/{sheet_id}/gviz/tq?tqx=out:csv&gid={gid}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarOptions {
    /// Cache directory on disk.
    pub dir: PathBuf,
    /// Prefix used for the `src` written into the page.
    pub rel_prefix: String,
    /// Re-download every non-leadership avatar even if cached.
    pub reload_all: bool,
}

impl AvatarOptions {
    /// `src` prefix that reaches `dir` from a page written to `document`.
    pub fn href_from(&self, document: &Path) -> Option<String> {
        let page_dir = document.parent().unwrap_or(Path::new(""));
        relative_href(page_dir, &self.dir)
    }
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_AVATARS_DIR),
            rel_prefix: s!(AVATARS_REL_PREFIX),
            reload_all: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Callsign numbers rendered as leadership. Anything above the end is regular.
    pub leadership: RangeInclusive<u32>,
    /// `src` used when a record has no avatar.
    pub placeholder_avatar: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            leadership: LEADERSHIP_MIN..=LEADERSHIP_MAX,
            placeholder_avatar: s!(FALLBACK_AVATAR),
        }
    }
}

impl RenderOptions {
    pub fn is_leadership(&self, n: u32) -> bool {
        self.leadership.contains(&n)
    }

    pub fn is_regular(&self, n: u32) -> bool {
        n > *self.leadership.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub document: PathBuf,
    pub json_dump: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { document: PathBuf::from(DEFAULT_OUT_FILE), json_dump: None }
    }
}
