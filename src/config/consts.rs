// src/config/consts.rs

// Sheet export
pub const SHEET_ID: &str = "1HYp1vsJ-rqrTRlvJHibFPnjrPZEcuoFLW-IXRIvdKwg";
pub const SHEET_GID: &str = "0";
pub const SHEET_TIMEOUT_SECS: u64 = 15;

// Identity + avatar APIs
pub const USERS_LOOKUP_URL: &str = "https://users.roblox.com/v1/usernames/users";
pub const HEADSHOT_URL: &str = "https://thumbnails.roblox.com/v1/users/avatar-headshot";
pub const HEADSHOT_SIZE: u32 = 420;
pub const API_TIMEOUT_SECS: u64 = 10;
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("troopers_roster/", env!("CARGO_PKG_VERSION"));

pub const FALLBACK_AVATAR: &str =
    "https://tr.rbxcdn.com/6c6b8e6b7b7e7b7b7b7b7b7b7b7b7b/420/420/AvatarHeadshot/Png";

// Local output
pub const DEFAULT_OUT_FILE: &str = "troopers.html";
pub const DEFAULT_AVATARS_DIR: &str = "assets/avatars";
pub const AVATARS_REL_PREFIX: &str = "assets/avatars";

// Sheet columns (0-based, positional; header names are ignored)
pub const COL_CALLSIGN: usize = 2;
pub const COL_HANDLE: usize = 3;
pub const COL_RANK: [usize; 3] = [12, 13, 14];
pub const COL_HSPU: usize = 15;
pub const COL_SRT: usize = 16;

/// Literal token of a repeated header row in the callsign column.
pub const HEADER_CALLSIGN: &str = "callsign";

/// Flag cell values that count as checked (compared uppercased).
pub const CHECKED_VALUES: [&str; 5] = ["TRUE", "YES", "1", "✓", "X"];

/// Callsign number used when no digit run is present. Sorts last.
pub const CALLSIGN_SENTINEL: u32 = 999;

/// Divider pattern → canonical section. Tried in order, first hit wins,
/// so longer patterns must precede their substrings.
pub const DIVIDERS: &[(&str, &str)] = &[
    ("HIGH COMMAND", "High Command"),
    ("SENIOR HIGH RANK", "Senior High Rank"),
    ("HIGH RANK", "High Rank"),
    ("SERGEANTS PROGRAMME", "Sergeants Program"),
    ("SERGEANTS PROGRAM", "Sergeants Program"),
    ("LOW RANKS", "Low Rank"),
    ("LOW RANK", "Low Rank"),
];

// Leadership band (inclusive)
pub const LEADERSHIP_MIN: u32 = 1;
pub const LEADERSHIP_MAX: u32 = 6;

// Specialty labels
pub const HSPU_LABEL: &str = "HSPU";
pub const SRT_LABEL: &str = "SRT";
pub const BOTH_LABEL: &str = "HSPU • SRT";
