use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp as the backend encodes it: a protobuf `Timestamp` serialized
/// field by field, with zero values omitted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProtoTimestamp {
    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub seconds: i64,
    /// Sub-second nanoseconds, `0..1_000_000_000`.
    #[serde(default)]
    pub nanos: i32,
}

impl ProtoTimestamp {
    /// Convert to a UTC date-time, `None` when out of chrono's range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(self.nanos).ok()?;
        DateTime::from_timestamp(self.seconds, nanos)
    }

    /// Calendar date in `YYYY-MM-DD` form.
    #[must_use]
    pub fn format_date(self) -> Option<String> {
        self.to_datetime()
            .map(|datetime| datetime.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<Utc>> for ProtoTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            seconds: value.timestamp(),
            nanos: i32::try_from(value.timestamp_subsec_nanos()).unwrap_or_default(),
        }
    }
}

/// Format an optional timestamp for display, `-` when missing.
#[must_use]
pub fn display_date(timestamp: Option<ProtoTimestamp>) -> String {
    timestamp
        .and_then(ProtoTimestamp::format_date)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_calendar_date() {
        let timestamp = ProtoTimestamp {
            seconds: 1_718_323_200,
            nanos: 0,
        };
        assert_eq!(timestamp.format_date().as_deref(), Some("2024-06-14"));
    }

    #[test]
    fn negative_nanos_are_rejected() {
        let timestamp = ProtoTimestamp {
            seconds: 10,
            nanos: -1,
        };
        assert!(timestamp.to_datetime().is_none());
    }

    #[test]
    fn converts_from_chrono() {
        let datetime = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        let timestamp = ProtoTimestamp::from(datetime);
        assert_eq!(timestamp.to_datetime(), Some(datetime));
    }

    #[test]
    fn missing_fields_default_to_epoch() {
        let timestamp: ProtoTimestamp = serde_json::from_str(r#"{"seconds":60}"#).unwrap();
        assert_eq!(timestamp.nanos, 0);
        assert_eq!(timestamp.format_date().as_deref(), Some("1970-01-01"));
    }

    #[test]
    fn display_date_falls_back_to_dash() {
        assert_eq!(display_date(None), "-");
        assert_eq!(
            display_date(Some(ProtoTimestamp {
                seconds: 0,
                nanos: 0
            })),
            "1970-01-01"
        );
    }
}
