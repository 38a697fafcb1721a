// src/roster/classify.rs
//
// Sheet rows → PersonRecords.
//
// The sheet is a hand-maintained roster: section divider rows ("HIGH RANK",
// "LOW RANKS", ...) interleaved with trooper rows, sometimes a repeated
// header row. Fields are read by fixed column position.
//
// `classify_row` is pure and looks at one row in isolation. The running
// section is threaded through `classify` as a fold accumulator, and the
// identity lookup is the only side effect.

use crate::config::consts::{
    COL_CALLSIGN, COL_HANDLE, COL_HSPU, COL_RANK, COL_SRT, DIVIDERS, HEADER_CALLSIGN,
};
use crate::core::sanitize::is_checked;
use crate::csv::{cell, is_blank};
use crate::specs::IdentityLookup;

use super::record::{PersonRecord, SpecialtyKind};

/// Fixed column positions in the sheet export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    pub callsign: usize,
    pub handle: usize,
    pub rank: [usize; 3],
    pub hspu: usize,
    pub srt: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            callsign: COL_CALLSIGN,
            handle: COL_HANDLE,
            rank: COL_RANK,
            hspu: COL_HSPU,
            srt: COL_SRT,
        }
    }
}

/// A divider pattern and the section name it maps to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divider {
    pub pattern: String,
    pub section: String,
}

/// Outcome of looking at one row on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowClass<'r> {
    Blank,
    /// Starts a new section (canonical name).
    Divider(&'r str),
    RepeatedHeader,
    /// Callsign or handle missing.
    Incomplete,
    Candidate(Candidate<'r>),
}

/// A data row that still needs its handle resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate<'r> {
    pub callsign: &'r str,
    pub handle: &'r str,
    pub rank: String,
    pub specialty: SpecialtyKind,
}

/// Fold accumulator.
#[derive(Debug, Default)]
struct Scan {
    section: String,
    records: Vec<PersonRecord>,
}

#[derive(Clone, Debug)]
pub struct RowClassifier {
    dividers: Vec<Divider>,
    columns: Columns,
}

impl Default for RowClassifier {
    fn default() -> Self {
        Self::new(
            DIVIDERS.iter().map(|(p, s)| Divider { pattern: s!(*p), section: s!(*s) }).collect(),
            Columns::default(),
        )
    }
}

impl RowClassifier {
    /// Patterns are matched uppercased; order is priority.
    pub fn new(dividers: Vec<Divider>, columns: Columns) -> Self {
        let dividers = dividers
            .into_iter()
            .map(|d| Divider { pattern: d.pattern.to_uppercase(), section: d.section })
            .collect();
        Self { dividers, columns }
    }

    /// First divider whose pattern appears in the row's joined, uppercased text.
    pub fn divider_for(&self, row: &[String]) -> Option<&str> {
        let text = row.join(" ").to_uppercase();
        self.dividers
            .iter()
            .find(|d| text.contains(&d.pattern))
            .map(|d| d.section.as_str())
    }

    pub fn classify_row<'r>(&'r self, row: &'r [String]) -> RowClass<'r> {
        if is_blank(row) {
            return RowClass::Blank;
        }
        if let Some(section) = self.divider_for(row) {
            return RowClass::Divider(section);
        }

        let cols = &self.columns;
        let callsign = cell(row, cols.callsign);
        if callsign.eq_ignore_ascii_case(HEADER_CALLSIGN) {
            return RowClass::RepeatedHeader;
        }

        let handle = cell(row, cols.handle);
        if callsign.is_empty() || handle.is_empty() {
            return RowClass::Incomplete;
        }

        let rank = cols
            .rank
            .iter()
            .map(|&i| cell(row, i))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let specialty = SpecialtyKind::from_flags(
            is_checked(cell(row, cols.hspu)),
            is_checked(cell(row, cols.srt)),
        );

        RowClass::Candidate(Candidate { callsign, handle, rank, specialty })
    }

    /// Classify every row in order. Rows that don't resolve are dropped.
    pub fn classify<L>(&self, rows: &[Vec<String>], lookup: &mut L) -> Vec<PersonRecord>
    where
        L: IdentityLookup + ?Sized,
    {
        let scan = rows.iter().fold(Scan::default(), |mut scan, row| {
            match self.classify_row(row) {
                RowClass::Blank | RowClass::RepeatedHeader => {}
                RowClass::Divider(section) => {
                    if scan.section != section {
                        logd!("Section → {section}");
                        scan.section = s!(section);
                    }
                }
                RowClass::Incomplete => {
                    logd!("Skipping incomplete row: {:?}", row);
                }
                RowClass::Candidate(c) => match lookup.lookup(c.handle) {
                    Some(id) => scan.records.push(PersonRecord {
                        callsign: s!(c.callsign),
                        handle: id.handle,
                        display_name: id.display_name,
                        rank: c.rank,
                        section: scan.section.clone(),
                        external_id: id.id,
                        specialty_label: s!(c.specialty.label()),
                        specialty_kind: c.specialty,
                        avatar_path: s!(),
                    }),
                    None => {
                        logw!("Dropping {} ({}): handle did not resolve", c.callsign, c.handle);
                    }
                },
            }
            scan
        });
        scan.records
    }
}
