//! Display formatting shared by the web views and the CLI.

use chrono::{DateTime, NaiveDateTime};

/// Turn a modal identifier such as `carro_gasolina` into `Carro Gasolina`.
///
/// Underscores become spaces and the first letter of every word is
/// upper-cased; the rest of each word is left as is, so labels the backend
/// already formatted come back unchanged.
pub fn modal_label(modal: &str) -> String {
    modal
        .replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Two-decimal rendering used for distances and footprints.
pub fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

/// Render a backend timestamp as `DD/MM/YYYY HH:MM`.
///
/// Accepts RFC 3339 and offset-less ISO timestamps (with or without
/// fractional seconds). Anything else is returned verbatim.
pub fn timestamp_label(created_at: &str) -> String {
    const DISPLAY: &str = "%d/%m/%Y %H:%M";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(created_at) {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(created_at, "%Y-%m-%d %H:%M:%S%.f") {
        return parsed.format(DISPLAY).to_string();
    }
    created_at.to_string()
}
