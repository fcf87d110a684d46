use chrono::{Datelike, Duration, Month, NaiveDate, Weekday};
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::geometry::DAYS_PER_WEEK;

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1);
    let next = if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    };

    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// The seven weekdays of a row, beginning with `week_start`.
pub fn weekday_headers(week_start: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    let mut days = [week_start; DAYS_PER_WEEK];
    let week = std::iter::successors(Some(week_start), |day| Some(day.succ()));
    for (slot, day) in days.iter_mut().zip(week) {
        *slot = day;
    }
    days
}

/// Dates shown for one month: the tail of the previous month, the month
/// itself and the head of the next month, each in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDates {
    pub leading: Vec<NaiveDate>,
    pub main: Vec<NaiveDate>,
    pub trailing: Vec<NaiveDate>,
}

impl MonthDates {
    pub fn len(&self) -> usize {
        self.leading.len() + self.main.len() + self.trailing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_weeks(&self) -> usize {
        self.len() / DAYS_PER_WEEK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthIndex {
    month: Month,
    year: i32,
}

impl MonthIndex {
    pub fn new(month: Month, year: i32) -> Self {
        MonthIndex { month, year }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn next(&self) -> Self {
        let next_month = self.month.succ();

        MonthIndex {
            month: next_month,
            year: if next_month == Month::January {
                self.year + 1
            } else {
                self.year
            },
        }
    }

    pub fn prev(&self) -> Self {
        let prev_month = self.month.pred();

        MonthIndex {
            month: prev_month,
            year: if prev_month == Month::December {
                self.year - 1
            } else {
                self.year
            },
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
    }

    pub fn num_days(&self) -> u32 {
        days_of_month(&self.month, self.year)
    }

    pub fn contains<T: Datelike>(&self, date: &T) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }

    /// Splits the weeks covering this month into leading, main and
    /// trailing dates. Rows begin on `week_start`.
    pub fn dates(&self, week_start: Weekday) -> Option<MonthDates> {
        let first = self.first_day()?;
        let num_days = self.num_days() as usize;

        let num_leading = (DAYS_PER_WEEK + first.weekday().num_days_from_monday() as usize
            - week_start.num_days_from_monday() as usize)
            % DAYS_PER_WEEK;
        let num_trailing =
            (DAYS_PER_WEEK - (num_leading + num_days) % DAYS_PER_WEEK) % DAYS_PER_WEEK;

        let leading = (1..=num_leading)
            .rev()
            .map(|n| first - Duration::days(n as i64))
            .collect();
        let main = first.iter_days().take(num_days).collect();
        let trailing = (first + Duration::days(num_days as i64))
            .iter_days()
            .take(num_trailing)
            .collect();

        Some(MonthDates {
            leading,
            main,
            trailing,
        })
    }
}

impl From<NaiveDate> for MonthIndex {
    fn from(date: NaiveDate) -> Self {
        MonthIndex::new(
            Month::from_u32(date.month()).unwrap_or(Month::January),
            date.year(),
        )
    }
}

impl Add<u32> for MonthIndex {
    type Output = MonthIndex;
    fn add(self, rhs: u32) -> Self::Output {
        let month0 = self.month.number_from_month() - 1 + rhs;

        MonthIndex {
            month: Month::from_u32(month0 % 12 + 1).unwrap_or(Month::January),
            year: self.year + (month0 / 12) as i32,
        }
    }
}

impl Sub<u32> for MonthIndex {
    type Output = MonthIndex;
    fn sub(self, rhs: u32) -> Self::Output {
        let month0 = self.month.number_from_month() as i64 - 1 - rhs as i64;

        MonthIndex {
            month: Month::from_i64(month0.rem_euclid(12) + 1).unwrap_or(Month::January),
            year: self.year + month0.div_euclid(12) as i32,
        }
    }
}

impl PartialOrd for MonthIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year.cmp(&other.year).then(
            self.month
                .number_from_month()
                .cmp(&other.month.number_from_month()),
        )
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}
