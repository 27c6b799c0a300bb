use chrono::{DateTime, SubsecRound, Utc};

/// Drops the sub-second part of a timestamp.
///
/// Timestamps are stored and returned with whole-second precision.
pub fn truncate_to_seconds(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.trunc_subsecs(0)
}

/// Current time with whole-second precision.
pub fn now() -> DateTime<Utc> {
    truncate_to_seconds(Utc::now())
}
