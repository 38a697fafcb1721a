// src/specs/sheet.rs

use std::fs;

use reqwest::blocking::Client;

use crate::config::SourceOptions;
use crate::config::consts::SHEET_TIMEOUT_SECS;
use crate::core::net;
use crate::csv::{self, Row};
use crate::error::{Result, RosterError};

/// Raw CSV text of the roster, from wherever the options point.
pub fn fetch_csv(client: &Client, source: &SourceOptions) -> Result<String> {
    match source {
        SourceOptions::Sheet { sheet_id, gid } => {
            let url = SourceOptions::export_url(sheet_id, gid);
            net::get_text(client, &url, SHEET_TIMEOUT_SECS)
        }
        SourceOptions::File(path) => {
            fs::read_to_string(path).map_err(|e| RosterError::io(path, e))
        }
    }
}

/// Parse an export into body rows (header line dropped).
pub fn rows_from_csv(text: &str) -> Vec<Row> {
    csv::body_rows(csv::parse_rows(text))
}

pub fn load_rows(client: &Client, source: &SourceOptions) -> Result<Vec<Row>> {
    let text = fetch_csv(client, source)?;
    let rows = rows_from_csv(&text);
    logf!("Sheet: {} rows after header", rows.len());
    Ok(rows)
}
