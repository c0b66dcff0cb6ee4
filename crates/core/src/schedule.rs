//! Business hours

use std::fmt;

use serde::{Deserialize, Serialize};

/// Day of the week, Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Lowercase English day name, matching the serialised form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(weekday: jiff::civil::Weekday) -> Self {
        match weekday {
            jiff::civil::Weekday::Monday => Self::Monday,
            jiff::civil::Weekday::Tuesday => Self::Tuesday,
            jiff::civil::Weekday::Wednesday => Self::Wednesday,
            jiff::civil::Weekday::Thursday => Self::Thursday,
            jiff::civil::Weekday::Friday => Self::Friday,
            jiff::civil::Weekday::Saturday => Self::Saturday,
            jiff::civil::Weekday::Sunday => Self::Sunday,
        }
    }
}

/// Open and close bounds for a single day.
///
/// Times are zero-padded 24-hour `"HH:MM"` wall-clock strings as entered by
/// the farmer, or empty when unset. A day marked `closed` ignores its bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Opening time, `"HH:MM"` or empty.
    #[serde(default)]
    pub open: String,

    /// Closing time, `"HH:MM"` or empty.
    #[serde(default)]
    pub close: String,

    /// Whether the day is marked closed.
    #[serde(default)]
    pub closed: bool,
}

impl DayHours {
    /// Hours spanning the given open and close bounds.
    #[must_use]
    pub fn between(open: &str, close: &str) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            closed: false,
        }
    }

    /// A day marked closed.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }

    /// Whether the day can host a pickup at all: not marked closed, and both
    /// bounds set.
    #[must_use]
    pub fn is_schedulable(&self) -> bool {
        !self.closed && !self.open.is_empty() && !self.close.is_empty()
    }
}

/// A week of open/close intervals.
///
/// The seven weekday fields are the only keys a schedule carries; days a
/// source omits deserialise to unset bounds and count as closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeeklySchedule {
    /// Monday hours
    pub monday: DayHours,
    /// Tuesday hours
    pub tuesday: DayHours,
    /// Wednesday hours
    pub wednesday: DayHours,
    /// Thursday hours
    pub thursday: DayHours,
    /// Friday hours
    pub friday: DayHours,
    /// Saturday hours
    pub saturday: DayHours,
    /// Sunday hours
    pub sunday: DayHours,
}

impl WeeklySchedule {
    /// The hours for the given weekday.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &DayHours {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }
}

/// Whether `time` falls within the given day's hours, bounds inclusive.
///
/// Zero-padded `"HH:MM"` strings sort identically to their numeric time
/// order, so containment is plain lexicographic comparison. Absent and
/// closed days, and days missing either bound, never admit a time. No
/// timezone handling: all values are local wall-clock strings.
#[must_use]
pub fn is_within_hours(time: &str, day: Option<&DayHours>) -> bool {
    let Some(day) = day else {
        return false;
    };

    if !day.is_schedulable() {
        return false;
    }

    day.open.as_str() <= time && time <= day.close.as_str()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn monday_nine_to_five() -> DayHours {
        DayHours::between("09:00", "17:00")
    }

    #[test]
    fn within_hours_is_inclusive_of_both_bounds() {
        let day = monday_nine_to_five();

        assert!(is_within_hours("09:00", Some(&day)), "opening minute admits");
        assert!(is_within_hours("17:00", Some(&day)), "closing minute admits");
        assert!(is_within_hours("12:30", Some(&day)), "midday admits");
    }

    #[test]
    fn within_hours_rejects_outside_bounds() {
        let day = monday_nine_to_five();

        assert!(!is_within_hours("08:59", Some(&day)), "before open rejects");
        assert!(!is_within_hours("17:01", Some(&day)), "after close rejects");
    }

    #[test]
    fn closed_day_rejects_regardless_of_bounds() {
        let day = DayHours {
            open: "09:00".into(),
            close: "17:00".into(),
            closed: true,
        };

        assert!(!is_within_hours("12:00", Some(&day)), "closed day rejects");
    }

    #[test]
    fn absent_day_rejects() {
        assert!(!is_within_hours("12:00", None), "absent day rejects");
    }

    #[test]
    fn missing_bounds_reject() {
        let open_only = DayHours {
            open: "09:00".into(),
            ..DayHours::default()
        };

        assert!(
            !is_within_hours("09:30", Some(&open_only)),
            "missing close rejects"
        );
        assert!(
            !is_within_hours("12:00", Some(&DayHours::default())),
            "unset day rejects"
        );
    }

    #[test]
    fn weekday_derives_from_civil_date() {
        // 2025-06-08 is a Sunday in the proleptic Gregorian calendar,
        // independent of any runtime locale.
        let date = jiff::civil::date(2025, 6, 8);

        assert_eq!(Weekday::from(date.weekday()), Weekday::Sunday);
        assert_eq!(
            Weekday::from(date.tomorrow().expect("valid date").weekday()),
            Weekday::Monday
        );
    }

    #[test]
    fn schedule_rejects_unknown_day_keys() {
        let raw = "monday: { open: \"09:00\", close: \"17:00\" }\nfunday: { closed: true }\n";

        let result: Result<WeeklySchedule, _> = serde_norway::from_str(raw);

        assert!(result.is_err(), "unknown day keys must be rejected");
    }

    #[test]
    fn omitted_days_deserialise_as_unschedulable() -> TestResult {
        let raw = "saturday: { open: \"08:00\", close: \"12:00\" }\n";

        let schedule: WeeklySchedule = serde_norway::from_str(raw)?;

        assert!(schedule.saturday.is_schedulable(), "saturday has bounds");
        assert!(!schedule.sunday.is_schedulable(), "omitted day is closed");

        Ok(())
    }

    #[test]
    fn closed_constructor_marks_the_day() {
        let day = DayHours::closed();

        assert!(day.closed, "constructor sets the flag");
        assert!(!day.is_schedulable(), "closed day is not schedulable");
    }
}
