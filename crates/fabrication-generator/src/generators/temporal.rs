//! Temporal value sources.
//!
//! Temporal fields are not seed-derived. They are read from replaceable
//! clock sources, which default to the system clock in UTC. Tests pin them to
//! fixed values.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Zero-argument provider of a temporal value.
pub type Source<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// The clock sources consulted by the temporal built-in generators.
///
/// Cloning shares the underlying providers.
#[derive(Clone)]
pub struct TemporalSources {
    /// Provider for [`FieldType::Date`](fabrication_core::FieldType::Date)
    pub current_date: Source<NaiveDate>,
    /// Provider for [`FieldType::Instant`](fabrication_core::FieldType::Instant)
    pub current_instant: Source<DateTime<Utc>>,
    /// Provider for [`FieldType::ZonedDateTime`](fabrication_core::FieldType::ZonedDateTime)
    pub current_zoned_date_time: Source<DateTime<FixedOffset>>,
    /// Provider for [`FieldType::LocalDateTime`](fabrication_core::FieldType::LocalDateTime)
    pub current_local_date_time: Source<NaiveDateTime>,
}

impl Default for TemporalSources {
    fn default() -> Self {
        Self {
            current_date: Arc::new(|| Utc::now().date_naive()),
            current_instant: Arc::new(Utc::now),
            current_zoned_date_time: Arc::new(|| Utc::now().fixed_offset()),
            current_local_date_time: Arc::new(|| Utc::now().naive_utc()),
        }
    }
}

impl TemporalSources {
    /// Sources that all report the same fixed instant.
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self {
            current_date: Arc::new(move || at.date_naive()),
            current_instant: Arc::new(move || at),
            current_zoned_date_time: Arc::new(move || at.fixed_offset()),
            current_local_date_time: Arc::new(move || at.naive_utc()),
        }
    }
}

impl fmt::Debug for TemporalSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalSources").finish_non_exhaustive()
    }
}
