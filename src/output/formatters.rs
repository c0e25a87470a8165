//! Reusable formatting utilities for offer display
//!
//! Shared by the HTML renderers in `frontend` and the terminal output of
//! the CLI so both show durations and times the same way.

use chrono::NaiveDateTime;

/// Split an ISO-8601 duration into whole hours and minutes.
///
/// Days and weeks are folded into hours; seconds are dropped. Returns `None`
/// for anything that is not a `P…` duration or that overflows.
pub fn parse_iso_duration(iso: &str) -> Option<(u64, u64)> {
    let rest = iso.strip_prefix('P')?;
    let (date_part, time_part) = rest.split_once('T').unwrap_or((rest, ""));
    if date_part.is_empty() && time_part.is_empty() {
        return None;
    }

    let mut hours = 0u64;
    let mut minutes = 0u64;

    for (value, unit) in components(date_part)? {
        let per_unit = match unit {
            'W' => 24 * 7,
            'D' => 24,
            _ => return None,
        };
        hours = hours.checked_add(value.checked_mul(per_unit)?)?;
    }
    for (value, unit) in components(time_part)? {
        match unit {
            'H' => hours = hours.checked_add(value)?,
            'M' => minutes = minutes.checked_add(value)?,
            'S' => {}
            _ => return None,
        }
    }

    Some((hours, minutes))
}

fn components(part: &str) -> Option<Vec<(u64, char)>> {
    let mut out = Vec::new();
    let mut digits = String::new();

    for c in part.chars() {
        if c.is_ascii_digit() || c == '.' {
            digits.push(c);
        } else {
            if digits.is_empty() {
                return None;
            }
            let whole = digits.split('.').next()?.parse().ok()?;
            out.push((whole, c));
            digits.clear();
        }
    }

    if !digits.is_empty() {
        return None;
    }
    Some(out)
}

/// Format an ISO-8601 duration as `13h 35m`.
///
/// Unparseable input is returned unchanged.
///
/// # Example output
/// - `PT13H35M` → `13h 35m`
/// - `PT45M` → `0h 45m`
/// - `P1DT2H` → `26h 0m`
pub fn format_iso_duration(iso: &str) -> String {
    match parse_iso_duration(iso) {
        Some((hours, minutes)) => format!("{}h {}m", hours, minutes),
        None => iso.to_string(),
    }
}

/// Format an upstream local timestamp (`2025-03-10T22:15:00`) as `22:15`.
///
/// Upstream times carry no offset and are shown as-is in airport local time.
pub fn format_clock_time(timestamp: &str) -> String {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Format a price with its currency code, e.g. `USD 812.40`
pub fn format_price(currency: &str, price: &str) -> String {
    format!("{} {}", currency, price)
}

/// Human label for a stop count
pub fn format_stops(stops: usize) -> String {
    match stops {
        0 => "Direct".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{} stops", n),
    }
}
