//! "Days ago" arithmetic for the six month activity window.
//!
//! Every commit timestamp is turned into a bucket: the number of days between
//! the commit and the start of today, shifted by a weekday dependent offset so
//! that the last column of the grid always ends on the current week.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveTime, TimeDelta, TimeZone, Utc, Weekday,
};

pub const DAYS_IN_LAST_SIX_MONTHS: u32 = 183;
pub const WEEKS_IN_LAST_SIX_MONTHS: u32 = 26;

/// Legacy sentinel for commits that fall outside the window. The Rust API
/// reports these as `None` instead.
pub const OUT_OF_RANGE: u32 = 99_999;

const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

/// The instant the report is produced, captured once per run.
#[derive(Debug, Clone, Copy)]
pub struct Today {
    now: DateTime<FixedOffset>,
    start: DateTime<FixedOffset>,
}

impl Today {
    pub fn now() -> Self {
        Self::in_zone(Local::now())
    }

    /// Use the zone's own midnight, which may carry a different UTC offset
    /// than `now` on days the clocks change.
    pub fn in_zone<Tz: TimeZone>(now: DateTime<Tz>) -> Self {
        let midnight = now
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_local_timezone(now.timezone())
            .earliest();
        match midnight {
            Some(start) => Self {
                now: now.fixed_offset(),
                start: start.fixed_offset(),
            },
            None => Self::at(now.fixed_offset()),
        }
    }

    /// Midnight is taken in the fixed offset of `now`.
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        let since_midnight = now.time().signed_duration_since(NaiveTime::MIN);
        Self {
            now,
            start: now - since_midnight,
        }
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.now
    }

    /// Local midnight of the current day.
    pub fn start_of_day(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn weekday(&self) -> Weekday {
        self.now.weekday()
    }

    pub fn offset(&self) -> u32 {
        weekday_offset(self.weekday())
    }

    /// Count 24h steps from `timestamp` until it is no longer before the start
    /// of today. Returns `None` once the count passes the window.
    pub fn count_days_since_beginning_of_day(&self, timestamp: &DateTime<Utc>) -> Option<u32> {
        let behind = self.start.signed_duration_since(timestamp);
        if behind <= TimeDelta::zero() {
            return Some(0);
        }
        if behind > TimeDelta::days(i64::from(DAYS_IN_LAST_SIX_MONTHS)) {
            return None;
        }
        let nanos = behind.num_nanoseconds()?;
        u32::try_from((nanos + NANOS_PER_DAY - 1) / NANOS_PER_DAY).ok()
    }

    /// Bucket index for a commit, or `None` if it is too old to display.
    pub fn days_ago(&self, timestamp: &DateTime<Utc>) -> Option<u32> {
        self.count_days_since_beginning_of_day(timestamp)
            .map(|days| days + self.offset())
    }
}

/// Days left until the week boundary, counting today.
pub fn weekday_offset(weekday: Weekday) -> u32 {
    match weekday {
        Weekday::Sun => 7,
        Weekday::Mon => 6,
        Weekday::Tue => 5,
        Weekday::Wed => 4,
        Weekday::Thu => 3,
        Weekday::Fri => 2,
        Weekday::Sat => 1,
    }
}
