use serde::Deserialize;

/// Response shape of `GET /employees/departments`. The list is
/// server-defined; the client never hardcodes department names.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentList {
    pub departments: Vec<String>,
}
