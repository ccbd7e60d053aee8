use chrono::{Datelike, NaiveDate};

use crate::model::attendance::{AttendanceStatus, DayRecord};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The month a calendar view is currently showing. Month is 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is validated")
    }

    pub fn days_in_month(&self) -> u32 {
        self.succ()
            .first_day()
            .pred_opt()
            .expect("date has a predecessor")
            .day()
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Forward navigation is clamped: once the first day of the next month
    /// is beyond `today` the button is disabled.
    pub fn can_go_next(&self, today: NaiveDate) -> bool {
        self.succ().first_day() <= today
    }

    /// Advance one month, refusing to move into a fully future month.
    pub fn next(&self, today: NaiveDate) -> Option<Self> {
        self.can_go_next(today).then(|| self.succ())
    }

    /// Heading label, e.g. "June 2024".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// Derived visual state of one day cell; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// Strictly after today: no status, not clickable.
    Future,
    Present,
    Absent,
    /// On or before today but nothing was marked.
    NoRecord,
}

#[derive(Debug, Clone, Copy)]
pub struct DayCell {
    pub day: u32,
    pub state: DayState,
}

pub struct MonthGrid {
    pub cursor: MonthCursor,
    /// Empty cells before day 1, with weeks starting on Sunday.
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

pub fn month_grid(cursor: MonthCursor, records: &[DayRecord], today: NaiveDate) -> MonthGrid {
    let first = cursor.first_day();
    let cells = (1..=cursor.days_in_month())
        .map(|day| {
            let date = NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), day)
                .expect("day is within the month");
            let state = if date > today {
                DayState::Future
            } else {
                match records.iter().find(|r| r.date == date) {
                    Some(r) if r.status == AttendanceStatus::Present => DayState::Present,
                    Some(_) => DayState::Absent,
                    None => DayState::NoRecord,
                }
            };
            DayCell { day, state }
        })
        .collect();

    MonthGrid {
        cursor,
        leading_blanks: first.weekday().num_days_from_sunday(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_is_disabled_for_the_present_month() {
        let today = day(2024, 6, 15);
        let cursor = MonthCursor::from_date(today);
        assert!(!cursor.can_go_next(today));
        assert!(cursor.next(today).is_none());
    }

    #[test]
    fn next_from_a_past_month_moves_forward_one_month() {
        let today = day(2024, 6, 15);
        let cursor = MonthCursor::new(2024, 4).unwrap();
        assert!(cursor.can_go_next(today));
        let next = cursor.next(today).unwrap();
        assert_eq!((next.year(), next.month()), (2024, 5));
    }

    #[test]
    fn december_rolls_over_to_january() {
        let today = day(2024, 6, 15);
        let cursor = MonthCursor::new(2023, 12).unwrap();
        assert_eq!(
            cursor.next(today).map(|c| (c.year(), c.month())),
            Some((2024, 1))
        );
        let jan = MonthCursor::new(2024, 1).unwrap();
        assert_eq!((jan.previous().year(), jan.previous().month()), (2023, 12));
    }

    #[test]
    fn grid_layout_matches_the_month() {
        let cursor = MonthCursor::new(2024, 6).unwrap();
        // June 1st 2024 is a Saturday.
        let grid = month_grid(cursor, &[], day(2024, 6, 30));
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.cells.len(), 30);
    }

    #[test]
    fn cell_states_derive_from_records_and_today() {
        let cursor = MonthCursor::new(2024, 6).unwrap();
        let today = day(2024, 6, 15);
        let records = vec![
            DayRecord {
                date: day(2024, 6, 3),
                status: AttendanceStatus::Present,
            },
            DayRecord {
                date: day(2024, 6, 4),
                status: AttendanceStatus::Absent,
            },
        ];
        let grid = month_grid(cursor, &records, today);
        assert_eq!(grid.cells[2].state, DayState::Present);
        assert_eq!(grid.cells[3].state, DayState::Absent);
        assert_eq!(grid.cells[4].state, DayState::NoRecord);
        // same-day cell is not future
        assert_eq!(grid.cells[14].state, DayState::NoRecord);
        assert_eq!(grid.cells[15].state, DayState::Future);
        assert_eq!(grid.cells[29].state, DayState::Future);
    }

    #[test]
    fn month_label() {
        assert_eq!(MonthCursor::new(2024, 6).unwrap().label(), "June 2024");
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(MonthCursor::new(2024, 0).is_none());
        assert!(MonthCursor::new(2024, 13).is_none());
    }
}
