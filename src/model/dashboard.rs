use serde::Deserialize;

/// Snapshot from `GET /dashboard/stats`. When the backing store is down the
/// server answers with a flat demo payload that omits `today` and
/// `department_stats`, so those stay optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub total_attendance_records: u64,
    pub total_present: u64,
    pub total_absent: u64,
    pub attendance_rate: f64,
    pub today: Option<TodayStats>,
    #[serde(default)]
    pub department_stats: Vec<DepartmentCount>,
    /// Set by the server only on demo fallback payloads.
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodayStats {
    pub date: String,
    pub present: u64,
    pub absent: u64,
    pub total: u64,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: u64,
}

/// Response of `GET /dashboard/employees`: server-computed per-employee
/// summaries.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeDashboard {
    pub total_employees: u64,
    pub employees: Vec<EmployeeSummaryDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeSummaryDto {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub total_records: u64,
    pub present_count: u64,
    pub absent_count: u64,
    pub attendance_rate: f64,
    /// "Present", "Absent", or "Not Marked".
    pub today_status: String,
}

impl EmployeeDashboard {
    /// Department names present in the summaries, deduplicated, in first-seen
    /// order. Feeds the department filter dropdown.
    pub fn departments(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for emp in &self.employees {
            if !seen.contains(&emp.department.as_str()) {
                seen.push(emp.department.as_str());
            }
        }
        seen
    }

    pub fn filtered_by_department(&self, department: Option<&str>) -> Vec<&EmployeeSummaryDto> {
        match department {
            None => self.employees.iter().collect(),
            Some(dept) => self
                .employees
                .iter()
                .filter(|e| e.department == dept)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fallback_stats_deserialize_without_today() {
        let body = serde_json::json!({
            "total_employees": 2,
            "total_attendance_records": 10,
            "total_present": 8,
            "total_absent": 2,
            "present_today": 2,
            "absent_today": 0,
            "attendance_rate": 80.0,
            "message": "Demo data - Database not connected"
        });
        let stats: DashboardStats = serde_json::from_value(body).unwrap();
        assert!(stats.today.is_none());
        assert!(stats.department_stats.is_empty());
        assert_eq!(stats.message.as_deref(), Some("Demo data - Database not connected"));
    }

    fn summary(id: &str, dept: &str) -> EmployeeSummaryDto {
        EmployeeSummaryDto {
            employee_id: id.into(),
            full_name: id.into(),
            email: String::new(),
            phone: String::new(),
            department: dept.into(),
            total_records: 0,
            present_count: 0,
            absent_count: 0,
            attendance_rate: 0.0,
            today_status: "Not Marked".into(),
        }
    }

    #[test]
    fn department_filter_and_listing() {
        let dashboard = EmployeeDashboard {
            total_employees: 3,
            employees: vec![
                summary("E1", "Engineering"),
                summary("E2", "Sales"),
                summary("E3", "Engineering"),
            ],
        };

        assert_eq!(dashboard.departments(), vec!["Engineering", "Sales"]);
        assert_eq!(dashboard.filtered_by_department(None).len(), 3);
        let eng = dashboard.filtered_by_department(Some("Engineering"));
        assert_eq!(eng.len(), 2);
        assert!(eng.iter().all(|e| e.department == "Engineering"));
    }
}
