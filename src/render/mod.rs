// src/render/mod.rs
//
// PersonRecords → one static HTML document.
//
// Leadership (callsign band, default 1..=6) always comes first. The regular
// roster (callsign above the band) is bucketed by section into the canonical
// tiers; records whose section is not a tier label are left out. Output is a
// pure function of the inputs: same records, same bytes.

pub mod card;

use std::fmt::Write;

use crate::config::RenderOptions;
use crate::core::html::{escape, fill_markers};
use crate::roster::{PersonRecord, TIERS, Tier, sort_by_callsign, tier_for_callsign, tier_for_section};

pub use card::{CardStyle, render_card};

/// Page shell. Generated markup lands on the `{{LEADERSHIP}}` and `{{TIERS}}` markers.
pub const PAGE_SHELL: &str = include_str!("../../assets/troopers_shell.html");

pub const LEADERSHIP_TITLE: &str = "High Command";

/// Records split for display. Both groups are sorted by callsign number.
#[derive(Debug, Default)]
pub struct Groups {
    pub leadership: Vec<PersonRecord>,
    /// Non-empty tiers only, canonical order.
    pub tiers: Vec<(&'static Tier, Vec<PersonRecord>)>,
}

#[derive(Clone, Debug)]
pub struct CardRenderer {
    opts: RenderOptions,
    shell: String,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl CardRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shell: s!(PAGE_SHELL) }
    }

    /// Swap in another page shell (must carry both markers).
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn group(&self, records: &[PersonRecord]) -> Groups {
        let mut leadership = Vec::new();
        let mut buckets: Vec<Vec<PersonRecord>> = vec![Vec::new(); TIERS.len()];

        for rec in records {
            let n = rec.callsign_num();
            if self.opts.is_leadership(n) {
                leadership.push(rec.clone());
            } else if self.opts.is_regular(n) {
                match tier_for_section(&rec.section) {
                    Some(tier) => {
                        if tier_for_callsign(n).is_some_and(|t| t != tier) {
                            logd!("{} sits in {} but its callsign says otherwise", rec.callsign, tier.label);
                        }
                        if let Some(i) = TIERS.iter().position(|t| t == tier) {
                            buckets[i].push(rec.clone());
                        }
                    }
                    None => logd!("{} ({}) has no tier section {:?}; not listed", rec.callsign, rec.handle, rec.section),
                }
            } else {
                logd!("{} ({}) is outside both groups", rec.callsign, rec.handle);
            }
        }

        sort_by_callsign(&mut leadership);
        let tiers = TIERS
            .iter()
            .zip(buckets)
            .filter(|(_, recs)| !recs.is_empty())
            .map(|(tier, mut recs)| {
                sort_by_callsign(&mut recs);
                (tier, recs)
            })
            .collect();

        Groups { leadership, tiers }
    }

    pub fn render_leadership(&self, recs: &[PersonRecord]) -> String {
        let mut out = s!("<section class=\"hicom-section\">\n");
        let _ = writeln!(out, "<h3 class=\"hicom-title\">{}</h3>", escape(LEADERSHIP_TITLE));
        out.push_str("<div class=\"leadership-row\">\n");
        for rec in recs {
            out.push_str(&render_card(rec, CardStyle::Leadership, &self.opts.placeholder_avatar));
        }
        out.push_str("</div>\n</section>\n");
        out
    }

    pub fn render_tier(&self, tier: &Tier, recs: &[PersonRecord]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<section class=\"rank-section tier-{0}\" id=\"tier-{0}\">",
            tier.suffix
        );
        let _ = writeln!(out, "<h3 class=\"rank-title\">{}</h3>", escape(tier.label));
        out.push_str("<div class=\"roster-grid\">\n");
        for rec in recs {
            out.push_str(&render_card(rec, CardStyle::Roster, &self.opts.placeholder_avatar));
        }
        out.push_str("</div>\n</section>\n");
        out
    }

    /// Full document for `records`.
    pub fn render_document(&self, records: &[PersonRecord]) -> String {
        let groups = self.group(records);

        let leadership = self.render_leadership(&groups.leadership);
        let tiers: String = groups
            .tiers
            .iter()
            .map(|(tier, recs)| self.render_tier(tier, recs))
            .collect();

        fill_markers(&self.shell, &[("LEADERSHIP", leadership.as_str()), ("TIERS", tiers.as_str())])
    }
}
