// src/week.rs
//
// ISO week navigation for the weekly reports page.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekRef {
    pub year: i32,
    pub week: u32,
}

impl WeekRef {
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self { year: iso.year(), week: iso.week() }
    }

    fn monday(&self) -> NaiveDate {
        // Valid (year, week) pairs always resolve; fall back to today if not.
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// One week back; year boundary handled by the calendar, not by
    /// hardcoding 52 weeks (some ISO years have 53).
    pub fn prev(&self) -> Self {
        Self::of(self.monday() - Duration::days(7))
    }

    /// One week forward, clamped so we never navigate past `current`.
    pub fn next_clamped(&self, current: WeekRef) -> Self {
        if *self == current {
            return *self;
        }
        let next = Self::of(self.monday() + Duration::days(7));
        if next.is_after(current) { current } else { next }
    }

    pub fn is_after(&self, other: WeekRef) -> bool {
        (self.year, self.week) > (other.year, other.week)
    }

    pub fn label(&self) -> String {
        format!("{}년 {}주차", self.year, self.week)
    }
}
