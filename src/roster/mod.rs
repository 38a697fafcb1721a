// src/roster/mod.rs
pub mod classify;
pub mod record;
pub mod tier;

pub use classify::{Columns, Divider, RowClass, RowClassifier};
pub use record::{PersonRecord, SpecialtyKind, callsign_num, sort_by_callsign};
pub use tier::{TIERS, Tier, tier_for_callsign, tier_for_section};
