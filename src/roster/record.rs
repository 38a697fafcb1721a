// src/roster/record.rs
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::{BOTH_LABEL, CALLSIGN_SENTINEL, HSPU_LABEL, SRT_LABEL};

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("static regex"));

/// Which of the two capability flags a trooper carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialtyKind {
    #[default]
    None,
    Hspu,
    Srt,
    Both,
}

impl SpecialtyKind {
    pub fn from_flags(hspu: bool, srt: bool) -> Self {
        match (hspu, srt) {
            (true, true) => SpecialtyKind::Both,
            (true, false) => SpecialtyKind::Hspu,
            (false, true) => SpecialtyKind::Srt,
            (false, false) => SpecialtyKind::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpecialtyKind::None => "",
            SpecialtyKind::Hspu => HSPU_LABEL,
            SpecialtyKind::Srt => SRT_LABEL,
            SpecialtyKind::Both => BOTH_LABEL,
        }
    }

    /// CSS class of the label block. `None` renders no block at all.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SpecialtyKind::None => None,
            SpecialtyKind::Hspu => Some("specialty specialty-hspu"),
            SpecialtyKind::Srt => Some("specialty specialty-srt"),
            SpecialtyKind::Both => Some("specialty specialty-both"),
        }
    }
}

/// One trooper, built from a sheet row plus a successful identity lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub callsign: String,
    pub handle: String,
    pub display_name: String,
    pub rank: String,
    pub section: String,
    pub external_id: u64,
    pub specialty_label: String,
    pub specialty_kind: SpecialtyKind,
    /// Relative cache path or a remote fallback URL. Empty until avatars are resolved.
    pub avatar_path: String,
}

impl PersonRecord {
    pub fn callsign_num(&self) -> u32 {
        callsign_num(&self.callsign)
    }
}

/// First run of digits in a callsign ("G-12" → 12). No digits → sentinel.
/// Runs too large for `u32` saturate.
pub fn callsign_num(callsign: &str) -> u32 {
    match DIGIT_RUN.find(callsign) {
        Some(m) => m.as_str().parse().unwrap_or(u32::MAX),
        None => CALLSIGN_SENTINEL,
    }
}

/// Stable sort by callsign number.
pub fn sort_by_callsign(records: &mut [PersonRecord]) {
    records.sort_by_key(PersonRecord::callsign_num);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(callsign: &str, handle: &str) -> PersonRecord {
        PersonRecord {
            callsign: s!(callsign),
            handle: s!(handle),
            display_name: s!(handle),
            rank: s!(),
            section: s!(),
            external_id: 0,
            specialty_label: s!(),
            specialty_kind: SpecialtyKind::None,
            avatar_path: s!(),
        }
    }

    #[test]
    fn callsign_digit_runs() {
        assert_eq!(callsign_num("G-12"), 12);
        assert_eq!(callsign_num("G-2"), 2);
        assert_eq!(callsign_num("21"), 21);
        assert_eq!(callsign_num("A7-40"), 7);
        assert_eq!(callsign_num("HQ"), CALLSIGN_SENTINEL);
        assert_eq!(callsign_num(""), CALLSIGN_SENTINEL);
        assert_eq!(callsign_num("99999999999999999999"), u32::MAX);
        assert_eq!(callsign_num("G-4294967296"), u32::MAX);
    }

    #[test]
    fn sort_is_numeric_with_sentinel_last() {
        let mut v = vec![rec("G-12", "a"), rec("G-2", "b"), rec("HQ", "c")];
        sort_by_callsign(&mut v);
        let order: Vec<_> = v.iter().map(|r| r.callsign.as_str()).collect();
        assert_eq!(order, ["G-2", "G-12", "HQ"]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut v = vec![rec("X-5", "first"), rec("HQ", "none1"), rec("5", "second"), rec("HQ2", "two"), rec("CMD", "none2")];
        sort_by_callsign(&mut v);
        let order: Vec<_> = v.iter().map(|r| r.handle.as_str()).collect();
        assert_eq!(order, ["two", "first", "second", "none1", "none2"]);
    }

    #[test]
    fn specialty_from_all_flag_pairs() {
        assert_eq!(SpecialtyKind::from_flags(true, true), SpecialtyKind::Both);
        assert_eq!(SpecialtyKind::from_flags(true, false), SpecialtyKind::Hspu);
        assert_eq!(SpecialtyKind::from_flags(false, true), SpecialtyKind::Srt);
        assert_eq!(SpecialtyKind::from_flags(false, false), SpecialtyKind::None);

        assert_eq!(SpecialtyKind::Both.label(), "HSPU • SRT");
        assert_eq!(SpecialtyKind::None.label(), "");
        assert!(SpecialtyKind::None.css_class().is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let mut r = rec("21", "alice");
        r.specialty_kind = SpecialtyKind::Both;
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["displayName"], "alice");
        assert_eq!(v["externalId"], 0);
        assert_eq!(v["specialtyKind"], "both");
    }
}
