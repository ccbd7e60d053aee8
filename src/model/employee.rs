use serde::{Deserialize, Serialize};

/// Sentinel id the server uses for fixture rows when its backing store is
/// unavailable. Seeing it in a list response means demo mode.
pub const DEMO_SENTINEL_ID: &str = "DEMO0001";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

/// Body for `POST /employees`.
#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

/// Body for `POST /employees/generate-id`.
#[derive(Debug, Serialize)]
pub struct GenerateIdRequest {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedId {
    pub employee_id: String,
}

impl Employee {
    /// Case-insensitive substring match across every listed field, used by
    /// the employee list search box.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.full_name.to_lowercase().contains(&term)
            || self.employee_id.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.department.to_lowercase().contains(&term)
            || self.phone.contains(&term)
    }
}

pub fn is_demo_data(employees: &[Employee]) -> bool {
    employees.iter().any(|e| e.employee_id == DEMO_SENTINEL_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            employee_id: "JODO1234".into(),
            full_name: "John Doe".into(),
            email: "john.doe@company.com".into(),
            phone: "0123456789".into(),
            department: "Engineering".into(),
        }
    }

    #[test]
    fn search_matches_each_field_case_insensitively() {
        let emp = sample();
        assert!(emp.matches_search("john"));
        assert!(emp.matches_search("jodo"));
        assert!(emp.matches_search("COMPANY.COM"));
        assert!(emp.matches_search("engineer"));
        assert!(emp.matches_search("3456"));
        assert!(!emp.matches_search("marketing"));
    }

    #[test]
    fn demo_sentinel_flags_fixture_data() {
        let mut employees = vec![sample()];
        assert!(!is_demo_data(&employees));

        employees.push(Employee {
            employee_id: DEMO_SENTINEL_ID.into(),
            ..sample()
        });
        assert!(is_demo_data(&employees));
    }
}
