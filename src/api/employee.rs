use tracing::info;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::department::DepartmentList;
use crate::model::employee::{Employee, GenerateIdRequest, GeneratedId, NewEmployee};

impl ApiClient {
    /// `GET /employees/departments` — the server-defined department set.
    pub async fn list_departments(&self) -> Result<Vec<String>, ApiError> {
        let resp = self.http().get(self.url("/employees/departments")).send().await?;
        let list: DepartmentList = Self::expect_json(resp, "Failed to load departments").await?;
        Ok(list.departments)
    }

    /// `POST /employees/generate-id` — suggested id for the given name.
    /// A convenience only; the server re-checks uniqueness on insert.
    pub async fn generate_employee_id(&self, full_name: &str) -> Result<GeneratedId, ApiError> {
        let resp = self
            .http()
            .post(self.url("/employees/generate-id"))
            .json(&GenerateIdRequest {
                full_name: full_name.to_string(),
            })
            .send()
            .await?;
        Self::expect_json(resp, "Failed to generate employee ID").await
    }

    /// `GET /employees` — every employee record.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let resp = self.http().get(self.url("/employees")).send().await?;
        Self::expect_json(resp, "Failed to fetch employees").await
    }

    /// `POST /employees`. Duplicate id/email/phone come back as 409 with a
    /// server detail message.
    pub async fn add_employee(&self, employee: &NewEmployee) -> Result<String, ApiError> {
        let resp = self
            .http()
            .post(self.url("/employees"))
            .json(employee)
            .send()
            .await?;
        let message = Self::expect_message(resp, "Failed to add employee").await?;
        info!(employee_id = %employee.employee_id, "employee added");
        Ok(message)
    }

    /// `DELETE /employees/{id}`.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<String, ApiError> {
        let resp = self
            .http()
            .delete(self.url(&format!("/employees/{employee_id}")))
            .send()
            .await?;
        let message = Self::expect_message(resp, "Failed to delete employee").await?;
        info!(employee_id, "employee deleted");
        Ok(message)
    }
}
