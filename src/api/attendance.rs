use chrono::NaiveDate;
use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::attendance::{
    AttendanceHistory, AttendanceStatus, MarkAttendance, UpdateAttendance,
};

impl ApiClient {
    /// `POST /attendance`. The server owns the duplicate-per-date check and
    /// answers 409 when the day is already marked.
    pub async fn mark_attendance(&self, mark: &MarkAttendance) -> Result<String, ApiError> {
        let resp = self
            .http()
            .post(self.url("/attendance"))
            .json(mark)
            .send()
            .await?;
        let message = Self::expect_message(resp, "Failed to mark attendance").await?;
        info!(employee_id = %mark.employee_id, date = %mark.date, status = %mark.status, "attendance marked");
        Ok(message)
    }

    /// `PUT /attendance/{id}/{date}` — replace the status of an existing
    /// record. The server rejects future dates.
    pub async fn update_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<String, ApiError> {
        let resp = self
            .http()
            .put(self.url(&format!("/attendance/{employee_id}/{date}")))
            .json(&UpdateAttendance { status })
            .send()
            .await?;
        let message = Self::expect_message(resp, "Failed to update attendance").await?;
        info!(employee_id, date = %date, status = %status, "attendance updated");
        Ok(message)
    }

    /// `GET /attendance/{id}?date=` — one employee's history, optionally
    /// narrowed to a single day server-side.
    pub async fn get_attendance(
        &self,
        employee_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<AttendanceHistory, ApiError> {
        let mut req = self.http().get(self.url(&format!("/attendance/{employee_id}")));
        if let Some(d) = date {
            req = req.query(&[("date", d.to_string())]);
        }
        let resp = req.send().await?;
        Self::expect_json(resp, "Failed to fetch attendance").await
    }
}
