// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::{RenderOptions, RosterOptions},
    csv::Row,
    error::Result,
    file::{write_document, write_json},
    progress::Progress,
    render::CardRenderer,
    roster::{PersonRecord, RowClassifier},
    specs::{AvatarSource, IdentityLookup},
    store::{AvatarKey, AvatarStore},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub files_written: Vec<PathBuf>,
}

/// Everything after the sheet fetch: classify, resolve avatars, render, write.
/// The sheet is the only fatal input, so callers fetch it first and hand the rows in.
pub fn run<A>(
    opts: &RosterOptions,
    rows: &[Row],
    lookup: &mut dyn IdentityLookup,
    avatars: &mut A,
    progress: &mut dyn Progress,
) -> Result<RunSummary>
where
    A: AvatarSource + ?Sized,
{
    logf!("Parsing roster...");
    let mut records = RowClassifier::default().classify(rows, lookup);
    logf!("Found {} troopers", records.len());

    let store = AvatarStore::from_options(&opts.avatars);
    resolve_avatars(&mut records, &store, avatars, &opts.render, opts.avatars.reload_all, progress);

    let renderer = CardRenderer::new(opts.render.clone());
    let doc = renderer.render_document(&records);

    let mut files_written = Vec::new();
    write_document(&opts.output.document, &doc)?;
    logf!("Wrote {}", opts.output.document.display());
    files_written.push(opts.output.document.clone());

    if let Some(json) = &opts.output.json_dump {
        write_json(json, &records)?;
        logf!("Wrote {}", json.display());
        files_written.push(json.clone());
    }

    Ok(RunSummary { records: records.len(), files_written })
}

/// Fill `avatar_path` for every leadership and regular record.
///
/// Leadership files are keyed by handle and always served from cache when
/// present. Regular files are keyed by user id and re-fetched when
/// `reload_all` is set. Records in neither group are left empty and render
/// with the placeholder.
pub fn resolve_avatars<A>(
    records: &mut [PersonRecord],
    store: &AvatarStore,
    source: &mut A,
    render: &RenderOptions,
    reload_all: bool,
    progress: &mut dyn Progress,
) where
    A: AvatarSource + ?Sized,
{
    for rec in records.iter_mut() {
        if !render.is_leadership(rec.callsign_num()) {
            continue;
        }
        let key = AvatarKey::Handle(rec.handle.clone());
        if store.is_cached(&key) {
            rec.avatar_path = store.rel(&key);
            continue;
        }
        progress.log(&format!("  [HICOM] {} ({})", rec.callsign, rec.handle));
        rec.avatar_path = fetch_into(store, &key, rec.external_id, source, &render.placeholder_avatar);
    }

    let total = records.iter().filter(|r| render.is_regular(r.callsign_num())).count();
    progress.begin(total);

    let regular = records.iter_mut().filter(|r| render.is_regular(r.callsign_num()));
    for (i, rec) in regular.enumerate() {
        let key = AvatarKey::Id(rec.external_id);
        let cached = store.is_cached(&key);
        if cached && !reload_all {
            rec.avatar_path = store.rel(&key);
            progress.item_done(&rec.callsign);
            continue;
        }

        let action = if cached { "Reloading" } else { "Downloading" };
        progress.log(&format!("  [{}/{}] {action} {} ({})", i + 1, total, rec.callsign, rec.handle));
        rec.avatar_path = fetch_into(store, &key, rec.external_id, source, &render.placeholder_avatar);
        progress.item_done(&rec.callsign);
    }

    progress.finish();
}

/// Look up, download and store one avatar. Any failure yields `fallback`.
fn fetch_into<A>(store: &AvatarStore, key: &AvatarKey, id: u64, source: &mut A, fallback: &str) -> String
where
    A: AvatarSource + ?Sized,
{
    let url = source.avatar_url(id);
    let saved = source.fetch_image(&url).and_then(|bytes| store.save(key, &bytes));
    match saved {
        Ok(_) => store.rel(key),
        Err(e) => {
            loge!("Download error {}: {e}", store.path(key).display());
            s!(fallback)
        }
    }
}
