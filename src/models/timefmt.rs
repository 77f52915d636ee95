//! Wall-clock time parsing and formatting.
//!
//! Shift times cross the system boundary as `HH:MM` strings (local
//! wall-clock, timezone-naive). This module provides the single parse
//! routine plus serde adapters so that malformed input fails fast with a
//! validation error before any classification runs.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

/// The wall-clock format used throughout the system.
pub const HHMM_FORMAT: &str = "%H:%M";

/// Parses an `HH:MM` wall-clock string into a [`NaiveTime`].
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] if the input is not a valid
/// `HH:MM` time. The engine never treats malformed input as zero.
///
/// # Example
///
/// ```
/// use dienstplan_engine::models::parse_hhmm;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_hhmm("23:00").unwrap(),
///     NaiveTime::from_hms_opt(23, 0, 0).unwrap()
/// );
/// assert!(parse_hhmm("24:01").is_err());
/// assert!(parse_hhmm("8am").is_err());
/// ```
pub fn parse_hhmm(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, HHMM_FORMAT).map_err(|e| EngineError::InvalidTime {
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Formats a [`NaiveTime`] as an `HH:MM` string.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format(HHMM_FORMAT).to_string()
}

/// Serde adapter for mandatory `HH:MM` fields.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::HHMM_FORMAT;

    /// Serializes a time as `HH:MM`.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(HHMM_FORMAT).to_string())
    }

    /// Deserializes a time from `HH:MM`, rejecting anything else.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, HHMM_FORMAT)
            .map_err(|e| Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}

/// Serde adapter for optional `HH:MM` fields (`null` until confirmed).
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::HHMM_FORMAT;

    /// Serializes an optional time as `HH:MM` or `null`.
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_some(&t.format(HHMM_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional time from `HH:MM` or `null`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => NaiveTime::parse_from_str(&s, HHMM_FORMAT)
                .map(Some)
                .map_err(|e| Error::custom(format!("invalid time '{}': {}", s, e))),
        }
    }
}
