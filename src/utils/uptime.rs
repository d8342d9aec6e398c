use chrono::{DateTime, Utc};
use std::sync::OnceLock;

static STARTED_AT: OnceLock<DateTime<Utc>> = OnceLock::new();

/// Records the process start time. Later calls keep the first value.
pub fn mark_started() -> DateTime<Utc> {
    *STARTED_AT.get_or_init(Utc::now)
}

/// Whole seconds since [`mark_started`], or 0 if the clock was never started.
pub fn uptime_secs() -> i64 {
    secs_since(STARTED_AT.get().copied(), Utc::now())
}

fn secs_since(started: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    started.map_or(0, |s| (now - s).num_seconds().max(0))
}
