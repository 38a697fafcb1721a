//! # Upstream "specs"
//!
//! Each spec here knows how to read one upstream endpoint and nothing else:
//!
//! - `sheet` — the spreadsheet CSV export (or a local copy of it), parsed into rows.
//! - `roblox` — the username lookup and avatar-headshot APIs.
//!
//! Higher layers (`roster`, `runner`) decide what to do with the results.
//! The two traits below are the seams the pipeline talks to; the live
//! implementation is [`roblox::RobloxApi`], tests plug in stubs.
//!
//! ## Failure policy
//! Lookup and avatar failures never abort a run. Implementations log and
//! answer with "not found" or the fallback avatar URL instead. Only the
//! sheet fetch is allowed to fail the whole run.

pub mod roblox;
pub mod sheet;

use crate::error::Result;

/// Resolved identity for a sheet handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: u64,
    /// Canonical spelling as the API returns it.
    pub handle: String,
    pub display_name: String,
}

pub trait IdentityLookup {
    /// `None` when the handle does not resolve (or the lookup failed).
    fn lookup(&mut self, handle: &str) -> Option<Identity>;
}

pub trait AvatarSource {
    /// Headshot image URL for `id`, or the fallback URL.
    fn avatar_url(&mut self, id: u64) -> String;

    /// Download the image behind `url`.
    fn fetch_image(&mut self, url: &str) -> Result<Vec<u8>>;
}
