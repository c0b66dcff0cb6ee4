//! Pickup-day availability

use std::fmt;

use jiff::civil::Date;

use crate::schedule::{Weekday, WeeklySchedule};

/// Resolution of a candidate pickup date against the effective schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickupDayStatus {
    /// No candidate date chosen yet.
    AwaitingDate,

    /// No schedule has resolved yet. Informational rather than an error:
    /// the business-hours fetch may still be in flight.
    HoursUnavailable,

    /// The farmer takes no pickups on this weekday.
    Closed {
        /// Weekday the candidate date falls on.
        weekday: Weekday,
    },

    /// Pickups run between the bounds on this weekday.
    Open {
        /// Weekday the candidate date falls on.
        weekday: Weekday,

        /// Opening time, `"HH:MM"`.
        open: String,

        /// Closing time, `"HH:MM"`.
        close: String,
    },
}

impl PickupDayStatus {
    /// Whether the date resolved to an open day.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Open and close bounds for constraining a time picker, when open.
    #[must_use]
    pub fn bounds(&self) -> Option<(&str, &str)> {
        match self {
            Self::Open { open, close, .. } => Some((open, close)),
            _ => None,
        }
    }
}

impl fmt::Display for PickupDayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingDate => f.write_str("select a pickup date"),
            Self::HoursUnavailable => f.write_str("business hours are not configured yet"),
            Self::Closed { weekday } => {
                write!(f, "no pickups on {weekday}s; select another date")
            }
            Self::Open { open, close, .. } => {
                write!(f, "pickups available from {open} to {close}")
            }
        }
    }
}

/// Resolve a candidate pickup date against the effective schedule.
///
/// A missing date asks for one; a missing schedule reports the
/// informational [`PickupDayStatus::HoursUnavailable`] state. Otherwise the
/// date's weekday is derived from the civil calendar, with no locale
/// dependence, and looked up in the schedule: days marked closed or missing
/// a bound resolve to [`PickupDayStatus::Closed`].
#[must_use]
pub fn resolve_pickup_day(
    date: Option<Date>,
    schedule: Option<&WeeklySchedule>,
) -> PickupDayStatus {
    let Some(date) = date else {
        return PickupDayStatus::AwaitingDate;
    };

    let Some(schedule) = schedule else {
        return PickupDayStatus::HoursUnavailable;
    };

    let weekday = Weekday::from(date.weekday());
    let day = schedule.day(weekday);

    if day.is_schedulable() {
        PickupDayStatus::Open {
            weekday,
            open: day.open.clone(),
            close: day.close.clone(),
        }
    } else {
        PickupDayStatus::Closed { weekday }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::schedule::DayHours;

    use super::*;

    fn stand_hours() -> WeeklySchedule {
        WeeklySchedule {
            saturday: DayHours::between("08:00", "12:00"),
            sunday: DayHours::closed(),
            ..WeeklySchedule::default()
        }
    }

    #[test]
    fn no_date_awaits_selection() {
        let status = resolve_pickup_day(None, Some(&stand_hours()));

        assert_eq!(status, PickupDayStatus::AwaitingDate);
    }

    #[test]
    fn no_schedule_reports_hours_unavailable() {
        let status = resolve_pickup_day(Some(date(2025, 6, 7)), None);

        assert_eq!(status, PickupDayStatus::HoursUnavailable);
        assert!(!status.is_open(), "unresolved hours are not open");
    }

    #[test]
    fn explicitly_closed_sunday_resolves_closed() {
        // 2025-06-08 is a Sunday.
        let status = resolve_pickup_day(Some(date(2025, 6, 8)), Some(&stand_hours()));

        assert_eq!(
            status,
            PickupDayStatus::Closed {
                weekday: Weekday::Sunday
            }
        );
    }

    #[test]
    fn day_without_bounds_resolves_closed() {
        // Monday has no bounds in the fixture schedule.
        let status = resolve_pickup_day(Some(date(2025, 6, 9)), Some(&stand_hours()));

        assert_eq!(
            status,
            PickupDayStatus::Closed {
                weekday: Weekday::Monday
            }
        );
    }

    #[test]
    fn open_day_exposes_its_bounds() -> TestResult {
        let status = resolve_pickup_day(Some(date(2025, 6, 7)), Some(&stand_hours()));

        assert!(status.is_open(), "saturday is open");
        assert_eq!(status.bounds(), Some(("08:00", "12:00")));

        Ok(())
    }

    #[test]
    fn closed_status_names_the_weekday() {
        let status = PickupDayStatus::Closed {
            weekday: Weekday::Sunday,
        };

        assert_eq!(status.to_string(), "no pickups on sundays; select another date");
    }
}
