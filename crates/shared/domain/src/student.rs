use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student profile.
///
/// `id`, `registration_number` and `enrollment_date` are fixed at admission.
/// Courses are only added through the enrollment ledger, never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    id: String,
    registration_number: String,
    full_name: String,
    email: String,
    enrollment_date: NaiveDate,
    enrolled_course_codes: Vec<String>,
    active: bool,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        registration_number: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        enrollment_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            registration_number: registration_number.into(),
            full_name: full_name.into(),
            email: email.into(),
            enrollment_date,
            enrolled_course_codes: Vec::new(),
            active: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    #[must_use]
    pub fn enrolled_course_codes(&self) -> &[String] {
        &self.enrolled_course_codes
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Appends `code` unless it is already listed. Returns `true` when appended.
    pub fn add_course_code(&mut self, code: &str) -> bool {
        if self.enrolled_course_codes.iter().any(|c| c == code) {
            return false;
        }
        self.enrolled_course_codes.push(code.to_owned());
        true
    }
}
