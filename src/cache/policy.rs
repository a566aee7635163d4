use chrono::{DateTime, Duration, Utc};

/// How long a cached feed may be served.
pub struct FeedCachePolicy;

impl FeedCachePolicy {
    const MAX_AGE_IN_DAYS: i64 = 7;

    pub fn max_age() -> Duration {
        Duration::days(Self::MAX_AGE_IN_DAYS)
    }

    /// A snapshot taken at `timestamp` is valid at `now` iff
    /// `now - timestamp < 7 days`.
    pub fn validate(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(timestamp) < Self::max_age()
    }
}
