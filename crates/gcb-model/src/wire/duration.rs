//! `google.protobuf.Duration` fields: `"<seconds>[.<fraction>]s"`.
//!
//! Fractions are written with 0, 3, 6 or 9 digits, matching the proto3
//! JSON printer. Negative durations are rejected since every Cloud Build
//! duration (timeouts, TTLs) is non-negative.

use std::time::Duration;

use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;

use super::WireError;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Formats `duration` the way the API prints it.
///
/// ```
/// use std::time::Duration;
/// use gcb_model::wire::format_duration;
///
/// assert_eq!(format_duration(&Duration::from_secs(600)), "600s");
/// assert_eq!(format_duration(&Duration::from_millis(3500)), "3.500s");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let secs = duration.as_secs();
    let nanos = duration.subsec_nanos();
    if nanos == 0 {
        format!("{secs}s")
    } else if nanos % 1_000_000 == 0 {
        format!("{secs}.{:03}s", nanos / 1_000_000)
    } else if nanos % 1_000 == 0 {
        format!("{secs}.{:06}s", nanos / 1_000)
    } else {
        format!("{secs}.{nanos:09}s")
    }
}

/// Parses the API's duration text.
pub fn parse_duration(text: &str) -> Result<Duration, WireError> {
    let body = text
        .strip_suffix('s')
        .ok_or_else(|| WireError::MissingDurationSuffix(text.to_owned()))?;
    if body.starts_with('-') {
        return Err(WireError::NegativeDuration(text.to_owned()));
    }
    let invalid = || WireError::InvalidDuration(text.to_owned());
    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (body, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let secs: u64 = whole.parse().map_err(|_| invalid())?;
    let mut nanos: u32 = 0;
    if !fraction.is_empty() {
        let digits: u32 = fraction.parse().map_err(|_| invalid())?;
        nanos = digits * 10u32.pow(9 - fraction.len() as u32);
    }
    debug_assert!(nanos < NANOS_PER_SEC);
    Ok(Duration::new(secs, nanos))
}

pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_duration(&text).map_err(de::Error::custom)
}

/// Same encoding for `Option<Duration>`; pair with `#[serde(default)]`.
pub mod option {
    use std::time::Duration;

    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => super::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| super::parse_duration(&text).map_err(de::Error::custom))
            .transpose()
    }
}
