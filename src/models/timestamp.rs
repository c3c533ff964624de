//! Timestamp coercion at the system boundary.
//!
//! Upstream layers hand the engine timestamps in several shapes: ISO-8601
//! strings (with or without an offset), epoch seconds as integers or floats,
//! and document-store maps carrying `seconds`/`nanoseconds` pairs. Everything
//! is normalized here into a single [`NaiveDateTime`] (UTC) before any
//! comparison; business logic never branches on timestamp shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// Converts epoch seconds (plus optional nanoseconds) to a UTC datetime.
fn from_epoch(seconds: i64, nanoseconds: u32) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(seconds, nanoseconds).map(|dt| dt.naive_utc())
}

/// Parses the string representations tolerated at the boundary.
///
/// Accepted forms, tried in order: RFC 3339 (offset normalized to UTC),
/// `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`, and a bare
/// `YYYY-MM-DD` (interpreted as midnight).
fn parse_str(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Coerces an untyped JSON value into a [`NaiveDateTime`].
///
/// This is the programmatic entry point for callers that receive raw
/// document-store payloads rather than going through serde.
///
/// # Example
///
/// ```
/// use roster_engine::models::timestamp::coerce;
/// use serde_json::json;
///
/// let a = coerce(&json!("2026-03-15T08:00:00")).unwrap();
/// let b = coerce(&json!(1773561600)).unwrap();
/// let c = coerce(&json!({ "seconds": 1773561600, "nanoseconds": 0 })).unwrap();
/// assert_eq!(b, c);
/// assert_eq!(a.to_string(), "2026-03-15 08:00:00");
/// ```
pub fn coerce(value: &Value) -> EngineResult<NaiveDateTime> {
    let invalid = || EngineError::InvalidTimestamp {
        message: format!("unsupported timestamp value: {value}"),
    };
    match value {
        Value::String(s) => parse_str(s).ok_or_else(invalid),
        Value::Number(n) => {
            if let Some(secs) = n.as_i64() {
                from_epoch(secs, 0).ok_or_else(invalid)
            } else if let Some(secs) = n.as_f64() {
                let whole = secs.trunc() as i64;
                let nanos = ((secs - secs.trunc()) * 1_000_000_000.0).abs() as u32;
                from_epoch(whole, nanos).ok_or_else(invalid)
            } else {
                Err(invalid())
            }
        }
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)
                .ok_or_else(invalid)?;
            let nanoseconds = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_i64)
                .unwrap_or(0) as u32;
            from_epoch(seconds, nanoseconds).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}

struct FlexibleVisitor;

impl<'de> Visitor<'de> for FlexibleVisitor {
    type Value = NaiveDateTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ISO-8601 string, epoch seconds, or a seconds/nanoseconds map")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_str(v).ok_or_else(|| E::custom(format!("unparseable timestamp string: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        from_epoch(v, 0).ok_or_else(|| E::custom(format!("epoch seconds out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v)
            .map_err(|_| E::custom(format!("epoch seconds out of range: {v}")))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let whole = v.trunc() as i64;
        let nanos = ((v - v.trunc()) * 1_000_000_000.0).abs() as u32;
        from_epoch(whole, nanos)
            .ok_or_else(|| E::custom(format!("epoch seconds out of range: {v}")))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut seconds: Option<i64> = None;
        let mut nanoseconds: u32 = 0;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "seconds" | "_seconds" => seconds = Some(map.next_value()?),
                "nanoseconds" | "_nanoseconds" => nanoseconds = map.next_value::<i64>()? as u32,
                _ => {
                    let _: de::IgnoredAny = map.next_value()?;
                }
            }
        }
        let seconds = seconds.ok_or_else(|| de::Error::missing_field("seconds"))?;
        from_epoch(seconds, nanoseconds)
            .ok_or_else(|| de::Error::custom(format!("epoch seconds out of range: {seconds}")))
    }
}

/// Deserializes any of the tolerated timestamp shapes into a [`NaiveDateTime`].
///
/// Intended for `#[serde(deserialize_with = "...")]` on model fields fed by
/// upstream layers.
pub fn deserialize_flexible<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlexibleVisitor)
}

/// Deserializes an optional flexible timestamp, treating `null` as `None`.
pub fn deserialize_flexible_opt<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptVisitor;

    impl<'de> Visitor<'de> for OptVisitor {
        type Value = Option<NaiveDateTime>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an optional timestamp")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            deserialize_flexible(d).map(Some)
        }
    }

    deserializer.deserialize_option(OptVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expect(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_coerce_iso_string_without_offset() {
        let dt = coerce(&json!("2026-03-15T08:00:00")).unwrap();
        assert_eq!(dt, expect("2026-03-15", "08:00:00"));
    }

    #[test]
    fn test_coerce_rfc3339_normalizes_to_utc() {
        let dt = coerce(&json!("2026-03-15T08:00:00-03:00")).unwrap();
        assert_eq!(dt, expect("2026-03-15", "11:00:00"));
    }

    #[test]
    fn test_coerce_space_separated_string() {
        let dt = coerce(&json!("2026-03-15 08:00:00")).unwrap();
        assert_eq!(dt, expect("2026-03-15", "08:00:00"));
    }

    #[test]
    fn test_coerce_bare_date_is_midnight() {
        let dt = coerce(&json!("2026-03-15")).unwrap();
        assert_eq!(dt, expect("2026-03-15", "00:00:00"));
    }

    #[test]
    fn test_coerce_epoch_seconds() {
        // 2026-03-15 08:00:00 UTC
        let dt = coerce(&json!(1773561600)).unwrap();
        assert_eq!(dt, expect("2026-03-15", "08:00:00"));
    }

    #[test]
    fn test_coerce_epoch_float_keeps_subseconds() {
        let dt = coerce(&json!(1773561600.5)).unwrap();
        assert_eq!(dt.and_utc().timestamp(), 1773561600);
        assert_eq!(dt.and_utc().timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_coerce_document_store_map() {
        let dt = coerce(&json!({ "seconds": 1773561600, "nanoseconds": 0 })).unwrap();
        assert_eq!(dt, expect("2026-03-15", "08:00:00"));
    }

    #[test]
    fn test_coerce_underscored_map_keys() {
        let dt = coerce(&json!({ "_seconds": 1773561600, "_nanoseconds": 500000000 })).unwrap();
        assert_eq!(dt.and_utc().timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_coerce_rejects_garbage() {
        assert!(coerce(&json!("not a timestamp")).is_err());
        assert!(coerce(&json!(true)).is_err());
        assert!(coerce(&json!({ "when": 1 })).is_err());
    }

    #[derive(serde::Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_flexible")]
        at: NaiveDateTime,
    }

    #[test]
    fn test_deserialize_flexible_accepts_all_shapes() {
        let shapes = [
            json!({ "at": "2026-03-15T08:00:00" }),
            json!({ "at": 1773561600 }),
            json!({ "at": { "seconds": 1773561600, "nanoseconds": 0 } }),
        ];
        for shape in shapes {
            let w: Wrapper = serde_json::from_value(shape).unwrap();
            assert_eq!(w.at, expect("2026-03-15", "08:00:00"));
        }
    }

    #[derive(serde::Deserialize)]
    struct OptWrapper {
        #[serde(default, deserialize_with = "deserialize_flexible_opt")]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn test_deserialize_flexible_opt_handles_null_and_value() {
        let none: OptWrapper = serde_json::from_value(json!({ "at": null })).unwrap();
        assert!(none.at.is_none());

        let some: OptWrapper = serde_json::from_value(json!({ "at": 1773561600 })).unwrap();
        assert_eq!(some.at.unwrap(), expect("2026-03-15", "08:00:00"));
    }
}
