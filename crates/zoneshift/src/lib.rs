//! # zoneshift
//!
//! Pure wall-clock time zone conversion helpers.
//!
//! zoneshift replaces ad-hoc offset arithmetic with a small set of pure
//! functions over chrono's calendar types: set the time-of-day on a date,
//! attach a fixed UTC offset to a naive value, convert a wall-clock value
//! into a named time zone, and compute a zone's UTC offset (or the signed
//! difference between two zones) at an explicit instant. Zone identifiers
//! accept both IANA names (`"Asia/Tehran"`) and Windows registry names
//! (`"Pacific Standard Time"`); every offset and daylight-saving rule is
//! answered by the chrono-tz database, and nothing here reimplements them.
//!
//! Core functions take the probe instant as an explicit argument, with no
//! hidden system clock access, so callers and tests stay deterministic.
//! The `*_now` variants read the clock once and delegate.
//!
//! ## Modules
//!
//! - [`convert`] — time-of-day setting, offset attachment, zone conversion, offset computation
//! - [`resolve`] — zone-identifier resolution (IANA and Windows names)
//! - [`error`] — error types

pub mod convert;
pub mod error;
pub mod resolve;

mod windows_zones;

pub use convert::{
    attach_offset, convert_to_zone, convert_to_zone_with, format_offset, is_daylight_saving,
    set_time, zone_offset, zone_offset_difference, zone_offset_difference_now, zone_offset_now,
    WallDateTime,
};
pub use error::ZoneShiftError;
pub use resolve::resolve_zone;
