use crate::Snowflake;
use serde::Serialize;

/// Machine-readable summary of a decoded Snowflake, as shown by ID lookup.
///
/// Serializes with camelCase keys:
///
/// ```json
/// {
///   "id": "175928847299117063",
///   "createdAtISO": "2016-04-30T11:18:25.796Z",
///   "createdAtUnix": 1462015105,
///   "createdAtMs": 1462015105796,
///   "ageYears": 10,
///   "snowflake": { "workerId": 1, "processId": 0, "increment": 7 }
/// }
/// ```
///
/// `createdAtISO` is only present with the `chrono` feature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowflakeReport {
    pub id: Snowflake,
    #[cfg(feature = "chrono")]
    #[serde(rename = "createdAtISO", skip_serializing_if = "Option::is_none")]
    pub created_at_iso: Option<String>,
    pub created_at_unix: u64,
    pub created_at_ms: u64,
    pub age_years: u64,
    pub snowflake: SnowflakeFields,
}

/// The allocator metadata packed into the low 22 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowflakeFields {
    pub worker_id: u64,
    pub process_id: u64,
    pub increment: u64,
}

impl SnowflakeReport {
    /// Builds the report for `id`, computing its age against `now_millis`.
    pub fn new(id: Snowflake, now_millis: u64) -> Self {
        Self {
            id,
            #[cfg(feature = "chrono")]
            created_at_iso: id
                .created_at()
                .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            created_at_unix: id.unix_seconds(),
            created_at_ms: id.timestamp_millis(),
            age_years: id.age_in_years(now_millis),
            snowflake: SnowflakeFields {
                worker_id: id.worker_id(),
                process_id: id.process_id(),
                increment: id.increment(),
            },
        }
    }
}
