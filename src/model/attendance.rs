use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Attendance outcome for one employee on one calendar day.
/// Serialized exactly as the server spells it: "Present" / "Absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One day of a single employee's history as returned by
/// `GET /attendance/{id}`; the owning employee is implied by the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Consumed part of the history response. The server also sends a
/// `total_present_days` count, but all counts are re-derived client-side
/// after filtering, so it is ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceHistory {
    pub records: Vec<DayRecord>,
}

/// Body for `POST /attendance`. The server rejects future dates and
/// duplicates per employee+date.
#[derive(Debug, Serialize)]
pub struct MarkAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Body for `PUT /attendance/{id}/{date}`.
#[derive(Debug, Serialize)]
pub struct UpdateAttendance {
    pub status: AttendanceStatus,
}
