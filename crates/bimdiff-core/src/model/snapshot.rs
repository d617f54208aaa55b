use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Metadata of one stored model snapshot (one uploaded model version).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    pub id: i64,
    pub name: String,
    /// Upload time. Accepts RFC 3339 or a bare `YYYY-MM-DD` date (midnight UTC).
    #[serde(alias = "createdAt", deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "elementCount", default)]
    pub element_count: u64,
}

impl VersionSnapshot {
    pub fn new(id: i64, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
            element_count: 0,
        }
    }

    pub fn with_element_count(mut self, element_count: u64) -> Self {
        self.element_count = element_count;
        self
    }
}

/// Parse a snapshot timestamp from RFC 3339 or `YYYY-MM-DD`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid created_at `{}`: expected RFC 3339 or YYYY-MM-DD",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parses_bare_date_as_midnight_utc() {
        let ts = parse_timestamp("2024-01-02").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parses_rfc3339_with_offset() {
        let ts = parse_timestamp("2024-01-02T10:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        assert!(parse_timestamp("yesterday").is_none());
        let err = serde_json::from_str::<VersionSnapshot>(
            r#"{"id": 1, "name": "A", "created_at": "yesterday"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid created_at"));
    }

    #[test]
    fn test_deserializes_camel_case_snapshot() {
        let snapshot: VersionSnapshot = serde_json::from_str(
            r#"{"id": 2, "name": "B_v1", "createdAt": "2024-01-01", "elementCount": 120}"#,
        )
        .unwrap();
        assert_eq!(snapshot.id, 2);
        assert_eq!(snapshot.element_count, 120);
    }
}
