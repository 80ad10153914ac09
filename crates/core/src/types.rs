use chrono::SubsecRound;

/// Todo identifiers are random UUIDs (v4).
pub type TodoId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current time truncated to microseconds, the precision PostgreSQL keeps
/// for `TIMESTAMPTZ`. Both stores see identical values this way.
pub fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(6)
}
