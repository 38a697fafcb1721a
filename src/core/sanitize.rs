// src/core/sanitize.rs
use crate::config::consts::CHECKED_VALUES;

/// Filesystem-safe stem for an avatar file.
/// Keeps `[A-Za-z0-9_.-]`, everything else becomes `_`.
pub fn sanitize_filename(name: &str) -> String {
    let out: String = name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || ch == '.' { ch } else { '_' })
        .collect();
    if out.is_empty() { s!("unknown") } else { out }
}

/// Checkbox-ish cell from the sheet: TRUE / YES / 1 / ✓ / X.
pub fn is_checked(cell: &str) -> bool {
    let v = cell.trim().to_uppercase();
    !v.is_empty() && CHECKED_VALUES.contains(&v.as_str())
}
