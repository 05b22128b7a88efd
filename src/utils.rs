use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::NaiveDate;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::catalog::OriginalPolicy;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Parses a Spotify album release date.
///
/// Spotify reports dates with `day`, `month` or `year` precision (`1965-08-06`,
/// `1965-08`, `1965`). Coarser dates map to the first day of their period so
/// every album can be compared by date.
pub fn parse_release_date(date: &str, precision: &str) -> Result<NaiveDate, String> {
    let date = date.trim();
    let padded = match precision {
        "year" => format!("{date}-01-01"),
        "month" => format!("{date}-01"),
        _ => date.to_string(),
    };

    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01-01"), "%Y-%m-%d"))
        .map_err(|e| format!("invalid release date '{date}' ({precision}): {e}"))
}

/// Formats a duration in milliseconds as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let seconds = duration_ms / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Parses the `--policy` flag: `first` (one original per song) or `all`
/// (every recording released on the earliest date).
pub fn parse_original_policy(value: &str) -> Result<OriginalPolicy, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "first" | "first-encountered" => Ok(OriginalPolicy::FirstEncountered),
        "all" | "all-tied" => Ok(OriginalPolicy::AllTied),
        other => Err(format!(
            "invalid original policy '{other}'. Allowed: first, all"
        )),
    }
}
