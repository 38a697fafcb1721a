// tests/pipeline_e2e.rs
//
// Whole pipeline without the network: rows → classify → avatars → page on disk.
//
use std::fs;
use std::path::Path;

use troopers_roster::config::RosterOptions;
use troopers_roster::config::consts::FALLBACK_AVATAR;
use troopers_roster::progress::{NullProgress, RecordingProgress};
use troopers_roster::runner;
use troopers_roster::specs::{AvatarSource, Identity, IdentityLookup};
use troopers_roster::{RosterError, Result};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

struct OneUser;
impl IdentityLookup for OneUser {
    fn lookup(&mut self, handle: &str) -> Option<Identity> {
        (handle == "alice").then(|| Identity { id: 99, handle: "alice".into(), display_name: "Alice".into() })
    }
}

struct Everyone;
impl IdentityLookup for Everyone {
    fn lookup(&mut self, handle: &str) -> Option<Identity> {
        let id = handle.bytes().map(u64::from).sum();
        Some(Identity { id, handle: handle.into(), display_name: handle.into() })
    }
}

#[derive(Default)]
struct StubAvatars {
    fail: bool,
    fetched: Vec<String>,
}

impl AvatarSource for StubAvatars {
    fn avatar_url(&mut self, id: u64) -> String {
        format!("https://img.example/{id}.png")
    }
    fn fetch_image(&mut self, url: &str) -> Result<Vec<u8>> {
        self.fetched.push(url.to_string());
        if self.fail {
            Err(RosterError::NotPng { url: url.to_string() })
        } else {
            Ok(PNG.to_vec())
        }
    }
}

fn row(cells: &[(usize, &str)]) -> Vec<String> {
    let mut r = vec![String::new(); 17];
    for (i, v) in cells {
        r[*i] = v.to_string();
    }
    r
}

fn options_in(dir: &Path) -> RosterOptions {
    let mut opts = RosterOptions::default();
    opts.avatars.dir = dir.join("assets").join("avatars");
    opts.output.document = dir.join("troopers.html");
    opts
}

#[test]
fn three_row_sheet_yields_one_high_rank_card() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options_in(dir.path());
    let rows = vec![
        row(&[(0, "HIGH RANK")]),
        row(&[(2, "21"), (3, "alice"), (15, "FALSE"), (16, "FALSE")]),
        row(&[(2, "22"), (3, "nobody")]),
    ];

    let summary = runner::run(&opts, &rows, &mut OneUser, &mut StubAvatars::default(), &mut NullProgress).unwrap();
    assert_eq!(summary.records, 1);

    let doc = fs::read_to_string(&opts.output.document).unwrap();
    assert_eq!(doc.matches("class=\"roster-card\"").count(), 1);
    assert_eq!(doc.matches("class=\"leadership-card\"").count(), 0);

    let tier = doc.find("<h3 class=\"rank-title\">High Rank</h3>").unwrap();
    let card = doc.find("<p class=\"name\">alice</p>").unwrap();
    assert!(tier < card);
    assert!(!doc.contains("<span class=\"specialty"));
    assert!(doc.contains("src=\"assets/avatars/99.png\""));
    assert!(opts.avatars.dir.join("99.png").is_file());
}

#[test]
fn regenerating_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options_in(dir.path());
    let rows = vec![
        row(&[(0, "HIGH COMMAND")]),
        row(&[(2, "1"), (3, "chief")]),
        row(&[(0, "LOW RANKS")]),
        row(&[(2, "80"), (3, "grunt")]),
    ];

    runner::run(&opts, &rows, &mut Everyone, &mut StubAvatars::default(), &mut NullProgress).unwrap();
    let first = fs::read(&opts.output.document).unwrap();
    runner::run(&opts, &rows, &mut Everyone, &mut StubAvatars::default(), &mut NullProgress).unwrap();
    let second = fs::read(&opts.output.document).unwrap();
    assert_eq!(first, second);
}

#[test]
fn cache_hits_skip_downloads_unless_reload_all() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options_in(dir.path());
    let rows = vec![
        row(&[(0, "HIGH COMMAND")]),
        row(&[(2, "2"), (3, "chief")]),
        row(&[(0, "HIGH RANK")]),
        row(&[(2, "25"), (3, "alice")]),
    ];

    let mut first = StubAvatars::default();
    runner::run(&opts, &rows, &mut Everyone, &mut first, &mut NullProgress).unwrap();
    assert_eq!(first.fetched.len(), 2);
    assert!(opts.avatars.dir.join("chief.png").is_file());

    let mut second = StubAvatars::default();
    runner::run(&opts, &rows, &mut Everyone, &mut second, &mut NullProgress).unwrap();
    assert!(second.fetched.is_empty());

    // Reload refreshes regular troopers only; leadership stays cached.
    opts.avatars.reload_all = true;
    let mut third = StubAvatars::default();
    let mut progress = RecordingProgress::default();
    runner::run(&opts, &rows, &mut Everyone, &mut third, &mut progress).unwrap();
    assert_eq!(third.fetched.len(), 1);
    assert_eq!(progress.total, Some(1));
    assert_eq!(progress.done, ["25"]);
    assert!(progress.lines.iter().any(|l| l.contains("Reloading 25 (alice)")));
    assert!(progress.finished);
}

#[test]
fn failed_download_falls_back_to_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options_in(dir.path());
    opts.output.json_dump = Some(dir.path().join("troopers.json"));
    let rows = vec![row(&[(0, "HIGH RANK")]), row(&[(2, "30"), (3, "alice")])];

    let mut avatars = StubAvatars { fail: true, ..StubAvatars::default() };
    let summary = runner::run(&opts, &rows, &mut OneUser, &mut avatars, &mut NullProgress).unwrap();
    assert_eq!(summary.files_written.len(), 2);

    let doc = fs::read_to_string(&opts.output.document).unwrap();
    assert!(doc.contains(&format!("src=\"{FALLBACK_AVATAR}\"")));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(dir.path().join("troopers.json")).unwrap()).unwrap();
    assert_eq!(json[0]["avatarPath"], FALLBACK_AVATAR);
    assert_eq!(json[0]["section"], "High Rank");
    assert_eq!(json[0]["externalId"], 99);
}

#[test]
fn gap_callsigns_get_no_avatar_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options_in(dir.path());
    let rows = vec![row(&[(0, "HIGH RANK")]), row(&[(2, "0"), (3, "zero")])];

    let mut avatars = StubAvatars::default();
    let summary = runner::run(&opts, &rows, &mut Everyone, &mut avatars, &mut NullProgress).unwrap();
    assert_eq!(summary.records, 1);
    assert!(avatars.fetched.is_empty());
}

#[test]
fn avatar_src_resolves_from_a_moved_page() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = RosterOptions::default();
    opts.output.document = dir.path().join("site").join("troopers.html");
    opts.avatars.dir = dir.path().join("cache").join("avatars");
    opts.avatars.rel_prefix = opts.avatars.href_from(&opts.output.document).unwrap();
    assert_eq!(opts.avatars.rel_prefix, "../cache/avatars");

    let rows = vec![row(&[(0, "HIGH RANK")]), row(&[(2, "21"), (3, "alice")])];
    runner::run(&opts, &rows, &mut OneUser, &mut StubAvatars::default(), &mut NullProgress).unwrap();

    let doc = fs::read_to_string(&opts.output.document).unwrap();
    let src = doc.split("src=\"").nth(1).and_then(|s| s.split('"').next()).unwrap();
    assert_eq!(src, "../cache/avatars/99.png");
    assert!(dir.path().join("site").join(src).is_file());
}
