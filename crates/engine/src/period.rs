//! Budget period resolution.
//!
//! A budget stores only a start date and a period type; the engine turns that
//! into a concrete, inclusive `[start, end]` date interval.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Budget, PeriodType};

/// First day of the week used to close weekly budget periods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Sunday to Saturday weeks.
    #[default]
    Sunday,
    /// ISO weeks, Monday to Sunday.
    Monday,
}

impl WeekStart {
    fn days_until_week_end(self, date: NaiveDate) -> u64 {
        let offset = match self {
            Self::Sunday => date.weekday().num_days_from_sunday(),
            Self::Monday => date.weekday().num_days_from_monday(),
        };
        u64::from(6 - offset)
    }
}

/// Inclusive date interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// `start <= date <= end`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The full calendar month containing `date`.
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        Self {
            start: date.with_day(1).unwrap_or(date),
            end: last_day_of_month(date),
        }
    }

    /// The full calendar month before the one containing `date`.
    #[must_use]
    pub fn previous_month_of(date: NaiveDate) -> Self {
        let this_month = Self::month_of(date);
        match this_month.start.pred_opt() {
            Some(last_of_previous) => Self::month_of(last_of_previous),
            None => this_month,
        }
    }

    /// Resolve the interval a budget is measured against.
    ///
    /// - monthly: from the start date to the last day of that month.
    /// - weekly: from the start date to the last day of its week.
    #[must_use]
    pub fn for_budget(budget: &Budget, week_start: WeekStart) -> Self {
        let start = budget.start_date;
        let end = match budget.period {
            PeriodType::Monthly => last_day_of_month(start),
            PeriodType::Weekly => start
                .checked_add_days(Days::new(week_start.days_until_week_end(start)))
                .unwrap_or(NaiveDate::MAX),
        };
        Self { start, end }
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::MoneyCents;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn budget(period: PeriodType, start: NaiveDate) -> Budget {
        Budget::new(period, MoneyCents::new(100_00), start, None)
    }

    #[test]
    fn monthly_period_ends_on_last_day_of_start_month() {
        let period = Period::for_budget(
            &budget(PeriodType::Monthly, day(2024, 3, 10)),
            WeekStart::Sunday,
        );
        assert_eq!(period.start, day(2024, 3, 10));
        assert_eq!(period.end, day(2024, 3, 31));
    }

    #[test]
    fn monthly_period_honours_leap_years() {
        let leap = Period::for_budget(
            &budget(PeriodType::Monthly, day(2024, 2, 1)),
            WeekStart::Sunday,
        );
        assert_eq!(leap.end, day(2024, 2, 29));

        let common = Period::for_budget(
            &budget(PeriodType::Monthly, day(2023, 2, 1)),
            WeekStart::Sunday,
        );
        assert_eq!(common.end, day(2023, 2, 28));
    }

    #[test]
    fn monthly_period_in_december_rolls_year() {
        let period = Period::for_budget(
            &budget(PeriodType::Monthly, day(2024, 12, 5)),
            WeekStart::Sunday,
        );
        assert_eq!(period.end, day(2024, 12, 31));
    }

    #[test]
    fn weekly_period_sunday_start_ends_saturday() {
        // 2024-03-06 is a Wednesday.
        let period = Period::for_budget(
            &budget(PeriodType::Weekly, day(2024, 3, 6)),
            WeekStart::Sunday,
        );
        assert_eq!(period.end, day(2024, 3, 9));
        assert_eq!(period.end.weekday(), Weekday::Sat);
    }

    #[test]
    fn weekly_period_monday_start_ends_sunday() {
        let period = Period::for_budget(
            &budget(PeriodType::Weekly, day(2024, 3, 6)),
            WeekStart::Monday,
        );
        assert_eq!(period.end, day(2024, 3, 10));
        assert_eq!(period.end.weekday(), Weekday::Sun);
    }

    #[test]
    fn weekly_period_starting_on_week_end_is_one_day() {
        // 2024-03-09 is a Saturday.
        let period = Period::for_budget(
            &budget(PeriodType::Weekly, day(2024, 3, 9)),
            WeekStart::Sunday,
        );
        assert_eq!(period.start, period.end);
    }

    #[test]
    fn weekly_period_crosses_year_boundary() {
        // 2024-12-29 is a Sunday.
        let period = Period::for_budget(
            &budget(PeriodType::Weekly, day(2024, 12, 29)),
            WeekStart::Sunday,
        );
        assert_eq!(period.end, day(2025, 1, 4));
        assert!(period.contains(day(2025, 1, 1)));
        assert!(!period.contains(day(2025, 1, 5)));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let period = Period {
            start: day(2024, 3, 1),
            end: day(2024, 3, 31),
        };
        assert!(period.contains(day(2024, 3, 1)));
        assert!(period.contains(day(2024, 3, 31)));
        assert!(!period.contains(day(2024, 2, 29)));
        assert!(!period.contains(day(2024, 4, 1)));
    }

    #[test]
    fn previous_month_crosses_year_boundary() {
        let period = Period::previous_month_of(day(2024, 1, 15));
        assert_eq!(period.start, day(2023, 12, 1));
        assert_eq!(period.end, day(2023, 12, 31));
    }
}
