//! Employee intake: form validation and the debounced employee-id
//! suggestion flow.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::ApiClient;
use crate::model::employee::NewEmployee;

/// How long the name input must be idle before a suggestion request fires.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(500);
/// Names shorter than this (trimmed) never trigger a suggestion.
pub const MIN_NAME_LEN: usize = 2;

/// Debounced requester for `POST /employees/generate-id`.
///
/// Every name change cancels the previously scheduled request; only after
/// the input has been idle for the debounce window does a request go out.
/// Suggestions are a convenience, so failures are logged and swallowed
/// rather than surfaced.
pub struct IdSuggester {
    client: ApiClient,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<String>,
    rx: mpsc::UnboundedReceiver<String>,
}

impl IdSuggester {
    pub fn new(client: ApiClient) -> Self {
        Self::with_delay(client, SUGGESTION_DEBOUNCE)
    }

    pub fn with_delay(client: ApiClient, delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            delay,
            pending: None,
            tx,
            rx,
        }
    }

    /// Called on every keystroke in the name field. Returns false when the
    /// name is too short to suggest for, in which case any shown suggestion
    /// should be cleared.
    pub fn on_name_change(&mut self, name: &str) -> bool {
        self.cancel_pending();
        let trimmed = name.trim();
        if trimmed.chars().count() < MIN_NAME_LEN {
            return false;
        }
        let client = self.client.clone();
        let tx = self.tx.clone();
        let delay = self.delay;
        let full_name = trimmed.to_string();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match client.generate_employee_id(&full_name).await {
                Ok(generated) => {
                    let _ = tx.send(generated.employee_id);
                }
                Err(e) => warn!(error = %e, "employee id suggestion failed"),
            }
        }));
        true
    }

    /// Wait out any scheduled request and return the latest suggestion, or
    /// `None` when nothing is pending or the request failed.
    pub async fn next_suggestion(&mut self) -> Option<String> {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
        let mut latest = None;
        while let Ok(id) = self.rx.try_recv() {
            latest = Some(id);
        }
        latest
    }

    /// Switching to manual mode drops any scheduled request; the user must
    /// then type an id themselves.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for IdSuggester {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Client-side convenience checks before submitting a new employee. The
/// server remains authoritative (uniqueness of id/email/phone in
/// particular) and its detail messages are shown verbatim.
pub fn validate_new_employee(
    employee: &NewEmployee,
    departments: &[String],
) -> Result<(), String> {
    if employee.employee_id.trim().is_empty() {
        return Err("Employee ID cannot be empty".to_string());
    }
    if employee.full_name.trim().chars().count() < MIN_NAME_LEN {
        return Err("Full name must be at least 2 characters".to_string());
    }
    if !is_valid_phone(&employee.phone) {
        return Err("Phone number must be exactly 10 digits".to_string());
    }
    if !departments.iter().any(|d| d == &employee.department) {
        return Err(format!(
            "Invalid department. Must be one of: {}",
            departments.join(", ")
        ));
    }
    Ok(())
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> NewEmployee {
        NewEmployee {
            employee_id: "JODO1234".into(),
            full_name: "John Doe".into(),
            email: "john@company.com".into(),
            phone: "0123456789".into(),
            department: "Engineering".into(),
        }
    }

    fn departments() -> Vec<String> {
        vec!["Engineering".into(), "Sales".into()]
    }

    #[test]
    fn valid_employee_passes() {
        assert!(validate_new_employee(&employee(), &departments()).is_ok());
    }

    #[test]
    fn phone_must_be_ten_digits() {
        assert!(is_valid_phone("0123456789"));
        assert!(!is_valid_phone("012345678"));
        assert!(!is_valid_phone("01234567890"));
        assert!(!is_valid_phone("01234o6789"));

        let mut emp = employee();
        emp.phone = "12-3456789".into();
        assert_eq!(
            validate_new_employee(&emp, &departments()),
            Err("Phone number must be exactly 10 digits".to_string())
        );
    }

    #[test]
    fn short_names_and_unknown_departments_are_rejected() {
        let mut emp = employee();
        emp.full_name = " J ".into();
        assert!(validate_new_employee(&emp, &departments()).is_err());

        let mut emp = employee();
        emp.department = "Astrology".into();
        let err = validate_new_employee(&emp, &departments()).unwrap_err();
        assert!(err.contains("Engineering, Sales"));
    }

    #[test]
    fn empty_id_is_rejected_in_manual_mode() {
        let mut emp = employee();
        emp.employee_id = "  ".into();
        assert!(validate_new_employee(&emp, &departments()).is_err());
    }
}
