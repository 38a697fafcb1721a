// src/render/card.rs
use std::fmt::Write;

use crate::core::html::{escape, text_el};
use crate::roster::PersonRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStyle {
    Leadership,
    Roster,
}

impl CardStyle {
    fn class(self) -> &'static str {
        match self {
            CardStyle::Leadership => "leadership-card",
            CardStyle::Roster => "roster-card",
        }
    }
}

/// One self-contained card. Every field is optional in practice; empty
/// strings render as empty elements and a missing avatar uses `placeholder`.
pub fn render_card(rec: &PersonRecord, style: CardStyle, placeholder: &str) -> String {
    let src = if rec.avatar_path.is_empty() { placeholder } else { rec.avatar_path.as_str() };

    let mut out = String::with_capacity(320);
    let _ = writeln!(out, r#"<div class="{}">"#, style.class());
    let _ = writeln!(
        out,
        r#"  <img src="{}" alt="{}" class="avatar" loading="lazy" />"#,
        escape(src),
        escape(&rec.handle)
    );
    let _ = writeln!(out, "  {}", text_el("p", "name", &rec.handle));
    let _ = writeln!(out, "  {}", text_el("p", "rank", &rec.rank));
    let _ = writeln!(out, "  {}", text_el("p", "callsign", &rec.callsign));
    if !rec.specialty_label.is_empty() {
        if let Some(class) = rec.specialty_kind.css_class() {
            let _ = writeln!(out, "  {}", text_el("span", class, &rec.specialty_label));
        }
    }
    out.push_str("</div>\n");
    out
}
