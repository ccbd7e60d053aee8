pub mod summary;

use chrono::{Local, NaiveDate};

use crate::api::ApiClient;
use crate::model::attendance::{AttendanceStatus, DayRecord};

/// Inclusive calendar-date window. Compared as dates, never as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Counts derived from one record set. `present + absent == total` always.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceTotals {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub rate: f64,
}

/// Attendance rate as a percentage rounded to one decimal; 0.0 when there
/// are no records rather than NaN.
pub fn attendance_rate(present: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (present as f64 / total as f64 * 100.0 * 10.0).round() / 10.0
}

pub fn summarize(records: &[DayRecord]) -> AttendanceTotals {
    let total = records.len();
    let present = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count();
    AttendanceTotals {
        total,
        present,
        absent: total - present,
        rate: attendance_rate(present, total),
    }
}

/// Range filtering happens client-side, after the server has applied any
/// single-date filter of its own.
pub fn filter_records(records: &[DayRecord], range: Option<&DateRange>) -> Vec<DayRecord> {
    match range {
        None => records.to_vec(),
        Some(range) => records
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect(),
    }
}

/// A record may be edited iff its day is on or before `today`. `NaiveDate`
/// already carries no time component, so same-day records stay editable
/// for the whole day.
pub fn is_editable_on(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

pub fn is_editable(date: NaiveDate) -> bool {
    is_editable_on(date, Local::now().date_naive())
}

/// Arguments of the last fetch, kept so an update can re-run the exact same
/// query afterwards.
#[derive(Debug, Clone)]
pub struct AttendanceQuery {
    pub employee_id: String,
    pub date: Option<NaiveDate>,
    pub range: Option<DateRange>,
}

/// Filtered records plus their derived counts.
#[derive(Debug, Clone)]
pub struct AttendanceReport {
    pub records: Vec<DayRecord>,
    pub totals: AttendanceTotals,
}

/// One employee's attendance view: fetch, filter, aggregate, edit.
///
/// Counts are always re-derived from a full refetch after an update; there
/// is no incremental recount. A failed fetch clears the previous report, a
/// failed update keeps it so the user can retry.
pub struct AttendanceView {
    client: ApiClient,
    query: Option<AttendanceQuery>,
    pub report: Option<AttendanceReport>,
    pub error: Option<String>,
}

impl AttendanceView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            query: None,
            report: None,
            error: None,
        }
    }

    pub async fn fetch(&mut self, query: AttendanceQuery) {
        self.query = Some(query.clone());
        match self
            .client
            .get_attendance(&query.employee_id, query.date)
            .await
        {
            Ok(history) => {
                let records = filter_records(&history.records, query.range.as_ref());
                let totals = summarize(&records);
                self.report = Some(AttendanceReport { records, totals });
                self.error = None;
            }
            Err(e) => {
                self.report = None;
                self.error = Some(e.user_message());
            }
        }
    }

    /// Push a status change for an editable day, then refetch with the last
    /// query so the report reflects server state. Returns whether the
    /// update was accepted.
    pub async fn update(&mut self, date: NaiveDate, status: AttendanceStatus) -> bool {
        self.update_on(date, status, Local::now().date_naive()).await
    }

    pub async fn update_on(
        &mut self,
        date: NaiveDate,
        status: AttendanceStatus,
        today: NaiveDate,
    ) -> bool {
        let Some(query) = self.query.clone() else {
            self.error = Some("No attendance loaded".to_string());
            return false;
        };
        if !is_editable_on(date, today) {
            self.error = Some("Cannot edit attendance for future dates".to_string());
            return false;
        }
        match self
            .client
            .update_attendance(&query.employee_id, date, status)
            .await
        {
            Ok(_) => {
                self.fetch(query).await;
                true
            }
            Err(e) => {
                // report intentionally left as-is
                self.error = Some(e.user_message());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, status: AttendanceStatus) -> DayRecord {
        DayRecord { date, status }
    }

    #[test]
    fn totals_are_consistent() {
        let records = vec![
            record(day(2024, 1, 1), AttendanceStatus::Present),
            record(day(2024, 1, 2), AttendanceStatus::Absent),
            record(day(2024, 1, 3), AttendanceStatus::Present),
        ];
        let totals = summarize(&records);
        assert_eq!(totals.total, 3);
        assert_eq!(totals.present + totals.absent, totals.total);
        assert_eq!(totals.rate, 66.7);
    }

    #[test]
    fn empty_record_set_yields_zero_rate() {
        let totals = summarize(&[]);
        assert_eq!(totals.total, 0);
        assert_eq!(totals.rate, 0.0);
    }

    #[test]
    fn rate_rounds_to_one_decimal() {
        assert_eq!(attendance_rate(1, 3), 33.3);
        assert_eq!(attendance_rate(2, 3), 66.7);
        assert_eq!(attendance_rate(1, 1), 100.0);
        assert_eq!(attendance_rate(0, 4), 0.0);
    }

    #[test]
    fn range_filter_is_inclusive_on_both_bounds() {
        let records: Vec<DayRecord> = (1..=15)
            .map(|d| record(day(2024, 1, d), AttendanceStatus::Present))
            .collect();
        let range = DateRange {
            start: day(2024, 1, 5),
            end: day(2024, 1, 10),
        };
        let filtered = filter_records(&records, Some(&range));
        assert_eq!(filtered.len(), 6);
        assert_eq!(filtered.first().unwrap().date, day(2024, 1, 5));
        assert_eq!(filtered.last().unwrap().date, day(2024, 1, 10));
    }

    #[test]
    fn no_range_passes_everything_through() {
        let records = vec![record(day(2024, 1, 1), AttendanceStatus::Absent)];
        assert_eq!(filter_records(&records, None).len(), 1);
    }

    #[test]
    fn editable_today_and_past_but_not_future() {
        let today = day(2024, 6, 15);
        assert!(is_editable_on(today, today));
        assert!(is_editable_on(day(2024, 6, 14), today));
        assert!(is_editable_on(day(2020, 1, 1), today));
        assert!(!is_editable_on(day(2024, 6, 16), today));
    }
}
