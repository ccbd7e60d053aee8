use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::dashboard::{DashboardStats, EmployeeDashboard};

impl ApiClient {
    /// `GET /dashboard/stats`.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let resp = self.http().get(self.url("/dashboard/stats")).send().await?;
        Self::expect_json(resp, "Failed to load dashboard data").await
    }

    /// `GET /dashboard/employees` — server-computed per-employee summaries.
    pub async fn employee_dashboard(&self) -> Result<EmployeeDashboard, ApiError> {
        let resp = self.http().get(self.url("/dashboard/employees")).send().await?;
        Self::expect_json(resp, "Failed to load dashboard data").await
    }
}
