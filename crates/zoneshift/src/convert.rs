//! Wall-clock conversion between dates, offsets, and named time zones.
//!
//! Provides pure functions for replacing the time-of-day of a date,
//! attaching a fixed UTC offset to a naive value, converting a wall-clock
//! value into a named time zone, and computing a zone's UTC offset (or the
//! difference between two zones) at a given instant. Core functions take
//! the probe instant as an explicit argument, with no hidden system clock
//! access, so callers and tests stay deterministic; the `*_now` variants
//! read the clock once and delegate.
//!
//! Zone rules, including every daylight-saving transition, are answered by
//! the chrono-tz database via [`resolve_zone`](crate::resolve::resolve_zone).
//! Nothing in this module reimplements them.
//!
//! # Functions
//!
//! - [`set_time`] — Replace the time-of-day component, keeping the date part
//! - [`attach_offset`] — Tag a naive value with a fixed UTC offset
//! - [`convert_to_zone`] — Re-express a wall-clock value in a named zone
//! - [`zone_offset`] — A zone's UTC offset at an instant, with or without daylight saving
//! - [`zone_offset_difference`] — Signed offset difference between two zones
//! - [`is_daylight_saving`] — Whether a daylight adjustment is in effect

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc,
};
use chrono_tz::{OffsetComponents, Tz};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolve::resolve_zone;

// ── WallDateTime ────────────────────────────────────────────────────────────

/// A wall-clock date+time that may or may not carry a fixed UTC offset.
///
/// `Naive` is ambiguous as an absolute instant until an offset or zone is
/// attached; `Fixed` pins an unambiguous point in time. Both chrono types
/// convert in via `From`, so functions taking `impl Into<WallDateTime>`
/// accept either directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WallDateTime {
    /// A date+time with no associated UTC offset.
    Naive(NaiveDateTime),
    /// A date+time paired with a fixed UTC offset.
    Fixed(DateTime<FixedOffset>),
}

impl WallDateTime {
    /// The date part of the wall-clock value.
    pub fn date(&self) -> NaiveDate {
        match self {
            WallDateTime::Naive(dt) => dt.date(),
            WallDateTime::Fixed(dt) => dt.date_naive(),
        }
    }

    /// The time-of-day part of the wall-clock value.
    pub fn time(&self) -> NaiveTime {
        match self {
            WallDateTime::Naive(dt) => dt.time(),
            WallDateTime::Fixed(dt) => dt.time(),
        }
    }

    /// The attached UTC offset, if this value carries one.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            WallDateTime::Naive(_) => None,
            WallDateTime::Fixed(dt) => Some(*dt.offset()),
        }
    }
}

impl From<NaiveDateTime> for WallDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        WallDateTime::Naive(dt)
    }
}

impl From<DateTime<FixedOffset>> for WallDateTime {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        WallDateTime::Fixed(dt)
    }
}

// ── set_time ────────────────────────────────────────────────────────────────

/// Replace the time-of-day of a wall-clock value, keeping its date part.
///
/// The previous time-of-day is discarded. A `Fixed` input keeps its stored
/// offset; the returned value is always the same variant as the input.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use zoneshift::set_time;
///
/// let date = NaiveDate::from_ymd_opt(2022, 11, 6).unwrap().and_hms_opt(14, 45, 9).unwrap();
/// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
///
/// let combined = set_time(date, eight);
/// assert_eq!(combined.date(), date.date());
/// assert_eq!(combined.time(), eight);
/// ```
pub fn set_time(stamp: impl Into<WallDateTime>, time: NaiveTime) -> WallDateTime {
    match stamp.into() {
        WallDateTime::Naive(dt) => WallDateTime::Naive(dt.date().and_time(time)),
        WallDateTime::Fixed(dt) => {
            WallDateTime::Fixed(attach_offset(dt.date_naive().and_time(time), *dt.offset()))
        }
    }
}

// ── attach_offset ───────────────────────────────────────────────────────────

/// Tag a naive date+time with a fixed UTC offset.
///
/// The wall-clock fields are unchanged; only the interpretation as an
/// absolute instant is added.
pub fn attach_offset(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let utc = naive - Duration::seconds(offset.local_minus_utc() as i64);
    DateTime::from_naive_utc_and_offset(utc, offset)
}

// ── convert_to_zone ─────────────────────────────────────────────────────────

/// Re-express a wall-clock value in a named time zone.
///
/// Equivalent to [`convert_to_zone_with`] with a zero extra duration.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use zoneshift::convert_to_zone;
///
/// let naive = NaiveDate::from_ymd_opt(2022, 11, 6).unwrap().and_hms_opt(3, 0, 0).unwrap();
/// let shifted = convert_to_zone(naive, "Pacific Standard Time").unwrap();
/// // November 6 2022 03:00 is PST (UTC-8), so the wall clock moves back 8 hours
/// assert_eq!(shifted.to_rfc3339(), "2022-11-05T19:00:00-08:00");
/// ```
pub fn convert_to_zone(
    stamp: impl Into<WallDateTime>,
    zone: &str,
) -> Result<DateTime<FixedOffset>> {
    convert_to_zone_with(stamp, zone, Duration::zero())
}

/// Re-express a wall-clock value in a named time zone, then add an extra
/// duration to the result.
///
/// The zone's UTC offset is resolved *at the wall-clock value of the input*:
/// the rule set that applies, daylight saving included, is the one in effect
/// when the zone's local clock reads that value. The resolved offset plus
/// `extra` is added to the wall-clock value and the result is tagged with
/// the resolved offset.
///
/// A `Fixed` input is first reduced to its UTC-equivalent naive value, so
/// converting it is a pure change of representation: the returned value
/// denotes the same absolute instant.
///
/// # Arguments
///
/// * `stamp` — A naive or offset-carrying wall-clock value
/// * `zone` — An IANA or Windows zone identifier
/// * `extra` — A signed duration added on top of the zone shift
///
/// # Errors
///
/// Returns [`ZoneShiftError::UnknownTimeZone`](crate::ZoneShiftError) if
/// `zone` cannot be resolved.
pub fn convert_to_zone_with(
    stamp: impl Into<WallDateTime>,
    zone: &str,
    extra: Duration,
) -> Result<DateTime<FixedOffset>> {
    let tz = resolve_zone(zone)?;
    let basis = match stamp.into() {
        WallDateTime::Naive(dt) => dt,
        WallDateTime::Fixed(dt) => dt.naive_utc(),
    };
    let offset = offset_at_wall_clock(&tz, basis);
    let shifted = basis + Duration::seconds(offset.local_minus_utc() as i64) + extra;
    Ok(attach_offset(shifted, offset))
}

// ── zone_offset ─────────────────────────────────────────────────────────────

/// A zone's UTC offset at a given instant.
///
/// With `respect_daylight_saving`, returns the offset observed when the
/// zone's local clock reads `at`, daylight saving included. Without it,
/// returns the zone's base (standard) offset with any daylight adjustment
/// ignored; `at` then only selects the historical rule set in effect.
///
/// # Errors
///
/// Returns [`ZoneShiftError::UnknownTimeZone`](crate::ZoneShiftError) if
/// `zone` cannot be resolved.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use zoneshift::zone_offset;
///
/// let at = NaiveDate::from_ymd_opt(2022, 3, 13).unwrap().and_hms_opt(3, 0, 0).unwrap();
/// // March 13 2022 03:00 local is just past the spring-forward jump: PDT
/// assert_eq!(zone_offset("Pacific Standard Time", true, at).unwrap(), Duration::hours(-7));
/// // ...but the base offset ignores daylight saving entirely
/// assert_eq!(zone_offset("Pacific Standard Time", false, at).unwrap(), Duration::hours(-8));
/// ```
pub fn zone_offset(
    zone: &str,
    respect_daylight_saving: bool,
    at: NaiveDateTime,
) -> Result<Duration> {
    let tz = resolve_zone(zone)?;
    if respect_daylight_saving {
        let offset = offset_at_wall_clock(&tz, at);
        Ok(Duration::seconds(offset.local_minus_utc() as i64))
    } else {
        Ok(tz.offset_from_utc_datetime(&at).base_utc_offset())
    }
}

/// [`zone_offset`] evaluated at the current system time.
///
/// Kept so repeated calls without a pinned date stay correct as real time
/// advances; tests use [`zone_offset`] with an explicit instant instead.
pub fn zone_offset_now(zone: &str, respect_daylight_saving: bool) -> Result<Duration> {
    zone_offset(zone, respect_daylight_saving, Utc::now().naive_utc())
}

// ── zone_offset_difference ──────────────────────────────────────────────────

/// The signed offset difference between two zones at a given instant.
///
/// Both offsets are evaluated with daylight saving respected. Positive
/// means `source` is ahead of `destination`; the operation is
/// anti-symmetric in its zone arguments.
///
/// # Errors
///
/// Returns [`ZoneShiftError::UnknownTimeZone`](crate::ZoneShiftError) if
/// either zone cannot be resolved.
pub fn zone_offset_difference(
    source: &str,
    destination: &str,
    at: NaiveDateTime,
) -> Result<Duration> {
    Ok(zone_offset(source, true, at)? - zone_offset(destination, true, at)?)
}

/// [`zone_offset_difference`] evaluated at the current system time.
pub fn zone_offset_difference_now(source: &str, destination: &str) -> Result<Duration> {
    zone_offset_difference(source, destination, Utc::now().naive_utc())
}

// ── is_daylight_saving ──────────────────────────────────────────────────────

/// Whether a daylight-saving adjustment is in effect when the zone's local
/// clock reads `at`.
///
/// # Errors
///
/// Returns [`ZoneShiftError::UnknownTimeZone`](crate::ZoneShiftError) if
/// `zone` cannot be resolved.
pub fn is_daylight_saving(zone: &str, at: NaiveDateTime) -> Result<bool> {
    let tz = resolve_zone(zone)?;
    let offset = match tz.offset_from_local_datetime(&at) {
        LocalResult::Single(offset) | LocalResult::Ambiguous(_, offset) => offset,
        LocalResult::None => tz.offset_from_utc_datetime(&at),
    };
    Ok(!offset.dst_offset().is_zero())
}

// ── Formatting ──────────────────────────────────────────────────────────────

/// Format an offset as a signed `HH:MM` string (e.g., `"-08:00"`, `"+03:30"`).
pub fn format_offset(offset: Duration) -> String {
    let total = offset.num_seconds();
    let sign = if total < 0 { "-" } else { "+" };
    let abs = total.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// The zone's offset when its local clock reads `wall`.
fn offset_at_wall_clock(tz: &Tz, wall: NaiveDateTime) -> FixedOffset {
    match tz.offset_from_local_datetime(&wall) {
        LocalResult::Single(offset) => offset.fix(),
        // Repeated hour after a fall-back transition: take the
        // standard-time side, the later of the two candidates.
        LocalResult::Ambiguous(_, standard) => standard.fix(),
        // Spring-forward gap: no local mapping exists. Probe the zone
        // with the same fields read as UTC.
        LocalResult::None => tz.offset_from_utc_datetime(&wall).fix(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    // ── set_time tests ──────────────────────────────────────────────────

    #[test]
    fn test_set_time_on_naive_value() {
        let base = naive(2022, 11, 6, 14, 45);
        let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();

        let combined = set_time(base, eight);

        assert_eq!(combined.date(), base.date());
        assert_eq!(combined.time(), eight);
        assert_eq!(combined.offset(), None);
    }

    #[test]
    fn test_set_time_on_fixed_value_keeps_offset() {
        let offset = FixedOffset::east_opt(3 * 3600 + 1800).unwrap();
        let base = attach_offset(naive(2022, 11, 6, 23, 15), offset);
        let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();

        let combined = set_time(base, eight);

        assert_eq!(combined.date(), base.date_naive());
        assert_eq!(combined.time(), eight);
        assert_eq!(combined.offset(), Some(offset));
    }

    // ── attach_offset tests ─────────────────────────────────────────────

    #[test]
    fn test_attach_offset_keeps_wall_clock_fields() {
        let base = naive(2022, 3, 10, 22, 0);
        let offset = FixedOffset::west_opt(8 * 3600).unwrap();

        let tagged = attach_offset(base, offset);

        assert_eq!(tagged.naive_local(), base);
        assert_eq!(*tagged.offset(), offset);
        // 22:00 at -08:00 is 06:00 the next day in UTC
        assert_eq!(tagged.naive_utc(), naive(2022, 3, 11, 6, 0));
    }

    // ── convert_to_zone tests ───────────────────────────────────────────

    #[test]
    fn test_convert_naive_shifts_wall_clock_by_zone_offset() {
        let base = naive(2022, 11, 6, 3, 0);

        let shifted = convert_to_zone(base, "Pacific Standard Time").unwrap();

        // November 6 2022 03:00 is past the fall-back transition: PST (-08:00)
        assert_eq!(shifted.naive_local() - base, Duration::hours(-8));
        assert_eq!(*shifted.offset(), FixedOffset::west_opt(8 * 3600).unwrap());
    }

    #[test]
    fn test_convert_naive_during_daylight_saving() {
        let base = naive(2022, 3, 13, 3, 0);

        let shifted = convert_to_zone(base, "Pacific Standard Time").unwrap();

        // March 13 2022 03:00 is past the spring-forward jump: PDT (-07:00)
        assert_eq!(shifted.naive_local(), naive(2022, 3, 12, 20, 0));
        assert_eq!(*shifted.offset(), FixedOffset::west_opt(7 * 3600).unwrap());
    }

    #[test]
    fn test_convert_with_extra_duration() {
        let base = naive(2022, 11, 6, 3, 0);

        let plain = convert_to_zone(base, "Pacific Standard Time").unwrap();
        let padded =
            convert_to_zone_with(base, "Pacific Standard Time", Duration::minutes(30)).unwrap();

        assert_eq!(padded.naive_local() - plain.naive_local(), Duration::minutes(30));
        assert_eq!(padded.offset(), plain.offset());
    }

    #[test]
    fn test_convert_fixed_preserves_instant() {
        // 14:00 EST = 19:00 UTC = 11:00 PST on January 15
        let base =
            attach_offset(naive(2026, 1, 15, 14, 0), FixedOffset::west_opt(5 * 3600).unwrap());

        let converted = convert_to_zone(base, "America/Los_Angeles").unwrap();

        assert_eq!(converted, base);
        assert_eq!(converted.naive_local(), naive(2026, 1, 15, 11, 0));
        assert_eq!(*converted.offset(), FixedOffset::west_opt(8 * 3600).unwrap());
    }

    #[test]
    fn test_convert_readback_matches_zone_offset() {
        let base = naive(2022, 11, 6, 3, 0);
        let zone = "Pacific Standard Time";

        let converted = convert_to_zone(base, zone).unwrap();
        let attached = Duration::seconds(converted.offset().local_minus_utc() as i64);

        assert_eq!(attached, zone_offset(zone, true, base).unwrap());
    }

    #[test]
    fn test_convert_unknown_zone_returns_error() {
        let result = convert_to_zone(naive(2022, 11, 6, 3, 0), "Moon/Tranquility");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unknown time zone"), "got: {err}");
    }

    // ── zone_offset tests ───────────────────────────────────────────────

    #[test]
    fn test_zone_offset_respects_daylight_saving() {
        // November 6 2022 03:00 local: back on standard time
        let winter = zone_offset("Pacific Standard Time", true, naive(2022, 11, 6, 3, 0)).unwrap();
        assert_eq!(format_offset(winter), "-08:00");

        // March 13 2022 03:00 local: daylight saving in effect
        let summer = zone_offset("Pacific Standard Time", true, naive(2022, 3, 13, 3, 0)).unwrap();
        assert_eq!(format_offset(summer), "-07:00");
    }

    #[test]
    fn test_zone_offset_base_ignores_daylight_saving() {
        let at = naive(2023, 7, 1, 12, 0);

        assert_eq!(
            zone_offset("Asia/Tehran", false, at).unwrap(),
            Duration::hours(3) + Duration::minutes(30)
        );
        assert_eq!(zone_offset("UTC", false, at).unwrap(), Duration::zero());
        assert_eq!(
            zone_offset("Pacific Standard Time", false, at).unwrap(),
            Duration::hours(-8)
        );
        assert_eq!(
            zone_offset("Central Standard Time", false, at).unwrap(),
            Duration::hours(-6)
        );
    }

    #[test]
    fn test_zone_offset_base_is_stable_across_seasons() {
        let winter = zone_offset("America/Los_Angeles", false, naive(2023, 1, 15, 12, 0)).unwrap();
        let summer = zone_offset("America/Los_Angeles", false, naive(2023, 7, 15, 12, 0)).unwrap();
        assert_eq!(winter, summer);
    }

    #[test]
    fn test_zone_offset_repeated_hour_takes_standard_side() {
        // November 6 2022 01:30 local happens twice in Los Angeles; the
        // standard-time reading (-08:00) wins.
        let offset = zone_offset("America/Los_Angeles", true, naive(2022, 11, 6, 1, 30)).unwrap();
        assert_eq!(offset, Duration::hours(-8));
    }

    #[test]
    fn test_zone_offset_gap_hour_resolves() {
        // March 13 2022 02:30 local does not exist in Los Angeles; the
        // lookup still answers rather than failing.
        let offset = zone_offset("America/Los_Angeles", true, naive(2022, 3, 13, 2, 30)).unwrap();
        assert_eq!(offset, Duration::hours(-8));
    }

    // ── zone_offset_difference tests ────────────────────────────────────

    #[test]
    fn test_zone_offset_difference_between_zones() {
        // Pinned to a mid-2023 instant: US zones on daylight saving, Iran
        // no longer observing it.
        let at = naive(2023, 7, 1, 12, 0);

        let cases = [
            ("Iran Standard Time", "UTC", "+03:30"),
            ("UTC", "Iran Standard Time", "-03:30"),
            ("Central Standard Time", "UTC", "-05:00"),
            ("Central Standard Time", "Pacific Standard Time", "+02:00"),
        ];
        for (source, destination, expected) in cases {
            let diff = zone_offset_difference(source, destination, at).unwrap();
            assert_eq!(
                format_offset(diff),
                expected,
                "{source} vs {destination}"
            );
        }
    }

    #[test]
    fn test_zone_offset_difference_is_zero_for_same_zone() {
        let at = naive(2023, 7, 1, 12, 0);
        let diff = zone_offset_difference("Asia/Tehran", "Asia/Tehran", at).unwrap();
        assert_eq!(diff, Duration::zero());
    }

    // ── is_daylight_saving tests ────────────────────────────────────────

    #[test]
    fn test_is_daylight_saving_flag() {
        assert!(is_daylight_saving("America/Los_Angeles", naive(2023, 7, 15, 12, 0)).unwrap());
        assert!(!is_daylight_saving("America/Los_Angeles", naive(2023, 1, 15, 12, 0)).unwrap());
        // Iran stopped observing daylight saving after 2022
        assert!(!is_daylight_saving("Asia/Tehran", naive(2023, 7, 15, 12, 0)).unwrap());
    }

    // ── format_offset tests ─────────────────────────────────────────────

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(Duration::zero()), "+00:00");
        assert_eq!(format_offset(Duration::hours(-8)), "-08:00");
        assert_eq!(
            format_offset(Duration::hours(3) + Duration::minutes(30)),
            "+03:30"
        );
    }

    // ── Property tests ──────────────────────────────────────────────────

    fn any_naive_datetime() -> impl Strategy<Value = NaiveDateTime> {
        (2000i32..2030, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60)
            .prop_map(|(y, mo, d, h, mi)| naive(y, mo, d, h, mi))
    }

    fn any_zone() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "UTC",
            "Asia/Tehran",
            "Europe/Berlin",
            "Australia/Sydney",
            "Pacific Standard Time",
            "Central Standard Time",
        ])
    }

    proptest! {
        #[test]
        fn prop_set_time_splits_date_and_time(
            dt in any_naive_datetime(),
            (h, mi, s) in (0u32..24, 0u32..60, 0u32..60),
        ) {
            let time = NaiveTime::from_hms_opt(h, mi, s).unwrap();
            let combined = set_time(dt, time);
            prop_assert_eq!(combined.date(), dt.date());
            prop_assert_eq!(combined.time(), time);
        }

        #[test]
        fn prop_difference_is_antisymmetric(
            a in any_zone(),
            b in any_zone(),
            at in any_naive_datetime(),
        ) {
            let ab = zone_offset_difference(a, b, at).unwrap();
            let ba = zone_offset_difference(b, a, at).unwrap();
            prop_assert_eq!(ab, -ba);
        }

        #[test]
        fn prop_converting_fixed_preserves_instant(
            zone in any_zone(),
            dt in any_naive_datetime(),
            offset_hours in -12i32..=12,
        ) {
            let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
            let fixed = attach_offset(dt, offset);
            let converted = convert_to_zone(fixed, zone).unwrap();
            prop_assert_eq!(converted, fixed);
        }
    }
}
