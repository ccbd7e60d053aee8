use futures::future::join_all;
use tracing::warn;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::report::{AttendanceTotals, summarize};

/// Client-side counterpart of the dashboard summary: one row per employee,
/// aggregated from that employee's full history.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeAttendanceRow {
    pub employee_id: String,
    pub full_name: String,
    pub department: String,
    pub total_records: usize,
    pub present_count: usize,
    pub absent_count: usize,
    pub attendance_rate: f64,
}

impl EmployeeAttendanceRow {
    fn from_totals(emp: &Employee, totals: AttendanceTotals) -> Self {
        Self {
            employee_id: emp.employee_id.clone(),
            full_name: emp.full_name.clone(),
            department: emp.department.clone(),
            total_records: totals.total,
            present_count: totals.present,
            absent_count: totals.absent,
            attendance_rate: totals.rate,
        }
    }

    fn zeroed(emp: &Employee) -> Self {
        Self {
            employee_id: emp.employee_id.clone(),
            full_name: emp.full_name.clone(),
            department: emp.department.clone(),
            total_records: 0,
            present_count: 0,
            absent_count: 0,
            attendance_rate: 0.0,
        }
    }
}

/// Fetch every employee's history concurrently and wait for all of them to
/// settle. An employee whose fetch fails degrades to an all-zero row; only
/// the initial employee-list fetch can fail the whole batch.
pub async fn employee_attendance_summary(
    client: &ApiClient,
) -> Result<Vec<EmployeeAttendanceRow>, ApiError> {
    let employees = client.list_employees().await?;
    let fetches = employees
        .iter()
        .map(|emp| client.get_attendance(&emp.employee_id, None));
    let results = join_all(fetches).await;

    let rows = employees
        .iter()
        .zip(results)
        .map(|(emp, result)| match result {
            Ok(history) => EmployeeAttendanceRow::from_totals(emp, summarize(&history.records)),
            Err(e) => {
                warn!(employee_id = %emp.employee_id, error = %e, "attendance fetch failed, using zero row");
                EmployeeAttendanceRow::zeroed(emp)
            }
        })
        .collect();
    Ok(rows)
}
