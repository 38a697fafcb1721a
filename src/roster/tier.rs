// src/roster/tier.rs
use std::ops::RangeInclusive;

/// Display bucket for the regular roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tier {
    pub label: &'static str,
    pub suffix: &'static str,
    pub callsigns: RangeInclusive<u32>,
}

/// Canonical tiers, in render order.
pub static TIERS: [Tier; 4] = [
    Tier { label: "Senior High Rank", suffix: "shr", callsigns: 10..=19 },
    Tier { label: "High Rank", suffix: "hr", callsigns: 20..=35 },
    Tier { label: "Sergeants Program", suffix: "sp", callsigns: 36..=60 },
    Tier { label: "Low Rank", suffix: "lr", callsigns: 61..=250 },
];

/// Tier whose label is exactly `section`.
pub fn tier_for_section(section: &str) -> Option<&'static Tier> {
    TIERS.iter().find(|t| t.label == section)
}

/// Tier whose callsign range holds `n`.
pub fn tier_for_callsign(n: u32) -> Option<&'static Tier> {
    TIERS.iter().find(|t| t.callsigns.contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_match_exactly() {
        assert_eq!(tier_for_section("High Rank").map(|t| t.suffix), Some("hr"));
        assert!(tier_for_section("HIGH RANK").is_none());
        assert!(tier_for_section("High Command").is_none());
        assert!(tier_for_section("").is_none());
    }

    #[test]
    fn callsign_ranges() {
        assert!(tier_for_callsign(9).is_none());
        assert_eq!(tier_for_callsign(10).map(|t| t.suffix), Some("shr"));
        assert_eq!(tier_for_callsign(35).map(|t| t.suffix), Some("hr"));
        assert_eq!(tier_for_callsign(36).map(|t| t.suffix), Some("sp"));
        assert_eq!(tier_for_callsign(250).map(|t| t.suffix), Some("lr"));
        assert!(tier_for_callsign(251).is_none());
    }
}
