//! Resolution of zone identifiers to time zone rules.
//!
//! Identifiers are opaque strings: both IANA names (`"Asia/Tehran"`) and
//! Windows registry names (`"Pacific Standard Time"`) are accepted. IANA
//! names are tried first via chrono-tz; Windows names are mapped to their
//! CLDR canonical IANA zone and resolved the same way. All offset and
//! daylight-saving rules come from the chrono-tz database; nothing is
//! normalized or cached here, and every call re-resolves.

use std::cmp::Ordering;

use chrono_tz::Tz;

use crate::error::{Result, ZoneShiftError};
use crate::windows_zones::WINDOWS_TO_IANA;

/// Resolve a zone identifier to its chrono-tz rule set.
///
/// # Arguments
///
/// * `id` — An IANA name (`"America/Los_Angeles"`) or a Windows registry
///   name (`"Pacific Standard Time"`). Windows names match
///   case-insensitively.
///
/// # Errors
///
/// Returns [`ZoneShiftError::UnknownTimeZone`] if `id` is neither a known
/// IANA name nor a known Windows name.
///
/// # Examples
///
/// ```
/// use zoneshift::resolve_zone;
///
/// let tz = resolve_zone("Pacific Standard Time").unwrap();
/// assert_eq!(tz.name(), "America/Los_Angeles");
/// ```
pub fn resolve_zone(id: &str) -> Result<Tz> {
    if let Ok(tz) = id.parse::<Tz>() {
        return Ok(tz);
    }
    windows_to_iana(id)
        .and_then(|iana| iana.parse::<Tz>().ok())
        .ok_or_else(|| ZoneShiftError::UnknownTimeZone(id.to_string()))
}

/// The CLDR canonical IANA name for a Windows zone name, if any.
fn windows_to_iana(windows: &str) -> Option<&'static str> {
    WINDOWS_TO_IANA
        .binary_search_by(|&(name, _)| cmp_ignore_ascii_case(name, windows))
        .ok()
        .map(|i| WINDOWS_TO_IANA[i].1)
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|b| b.to_ascii_lowercase());
    let b = b.bytes().map(|b| b.to_ascii_lowercase());
    a.cmp(b)
}
