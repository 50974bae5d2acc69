use std::thread;
use std::time::Duration as StdDuration;

use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};

/// How often a recurring maintenance job fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// Fire at every local midnight.
    #[default]
    Daily,
    /// Fire at midnight on the first of every month.
    Monthly,
}

impl Cadence {
    /// The next calendar boundary strictly after `after`, in the same offset.
    pub fn next_boundary(self, after: OffsetDateTime) -> OffsetDateTime {
        let date = after.date();
        let next = match self {
            Cadence::Daily => date.next_day(),
            Cadence::Monthly => first_of_next_month(date),
        };
        match next {
            Some(day) => day.midnight().assume_offset(after.offset()),
            // Only reachable at the end of the supported date range.
            None => after + time::Duration::days(1),
        }
    }
}

fn first_of_next_month(date: Date) -> Option<Date> {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        m => (date.year(), m.next()),
    };
    Date::from_calendar_date(year, month, 1).ok()
}

/// Local wall-clock time, falling back to UTC when the offset is unknown.
pub(crate) fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Run `job` at every boundary of `cadence`, on a detached named thread.
///
/// The thread lives for the rest of the process; there is no shutdown hook.
pub(crate) fn spawn<F>(name: &str, cadence: Cadence, job: F)
where
    F: Fn() + Send + 'static,
{
    let spawned = thread::Builder::new().name(name.to_string()).spawn(move || {
        loop {
            let now = local_now();
            let pause = cadence.next_boundary(now) - now;
            if let Ok(pause) = StdDuration::try_from(pause) {
                thread::sleep(pause);
            }
            job();
        }
    });
    if let Err(e) = spawned {
        tracing::error!(error = %e, thread = name, "failed to start schedule thread");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::offset;

    fn at(year: i32, month: Month, day: u8, hour: u8) -> OffsetDateTime {
        Date::from_calendar_date(year, month, day)
            .unwrap()
            .with_hms(hour, 30, 15)
            .unwrap()
            .assume_utc()
    }

    #[test]
    fn test_daily_boundary_is_next_midnight() {
        let next = Cadence::Daily.next_boundary(at(2026, Month::August, 21, 15));
        assert_eq!(next.date(), Date::from_calendar_date(2026, Month::August, 22).unwrap());
        assert_eq!(next.time(), time::Time::MIDNIGHT);
    }

    #[test]
    fn test_daily_boundary_is_strictly_after_midnight_input() {
        let midnight = Date::from_calendar_date(2026, Month::August, 22)
            .unwrap()
            .midnight()
            .assume_utc();
        let next = Cadence::Daily.next_boundary(midnight);
        assert!(next > midnight);
        assert_eq!(next.date(), Date::from_calendar_date(2026, Month::August, 23).unwrap());
    }

    #[test]
    fn test_daily_boundary_crosses_month_end() {
        let next = Cadence::Daily.next_boundary(at(2026, Month::August, 31, 23));
        assert_eq!(next.date(), Date::from_calendar_date(2026, Month::September, 1).unwrap());
    }

    #[test]
    fn test_monthly_boundary_is_first_of_next_month() {
        let next = Cadence::Monthly.next_boundary(at(2026, Month::August, 21, 15));
        assert_eq!(next.date(), Date::from_calendar_date(2026, Month::September, 1).unwrap());
        assert_eq!(next.time(), time::Time::MIDNIGHT);
    }

    #[test]
    fn test_monthly_boundary_crosses_year_end() {
        let next = Cadence::Monthly.next_boundary(at(2026, Month::December, 15, 8));
        assert_eq!(next.date(), Date::from_calendar_date(2027, Month::January, 1).unwrap());
    }

    #[test]
    fn test_boundary_keeps_input_offset() {
        let after = Date::from_calendar_date(2026, Month::August, 21)
            .unwrap()
            .with_hms(23, 0, 0)
            .unwrap()
            .assume_offset(offset!(+9));
        let next = Cadence::Daily.next_boundary(after);
        assert_eq!(next.offset(), offset!(+9));
    }

    #[test]
    fn test_cadence_serde_round_trip() {
        assert_eq!(serde_yaml::to_string(&Cadence::Daily).unwrap().trim(), "daily");
        let parsed: Cadence = serde_yaml::from_str("monthly").unwrap();
        assert_eq!(parsed, Cadence::Monthly);
    }

    #[test]
    fn test_cadence_defaults_to_daily() {
        assert_eq!(Cadence::default(), Cadence::Daily);
    }
}
