use crate::error::StudentError;
use ccrm_enrollments::{CourseListing, CourseRoster, RosterGrant};
use ccrm_kernel::directory::StudentDirectory;
use ccrm_kernel::domain::Student;
use chrono::{Local, NaiveDate};
use fxhash::FxHashMap;
use tracing::{debug, info, instrument, warn};

/// Owns every [`Student`] record.
///
/// Records live in admission order in a `Vec`; the id index maps each id to its slot.
/// Slots are never freed (deactivation is a flag), so indices stay valid.
#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: Vec<Student>,
    index: FxHashMap<String, usize>,
}

impl StudentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a new, active student dated today.
    ///
    /// Ids are taken verbatim and compared exactly.
    ///
    /// # Errors
    /// - [`StudentError::InvalidField`] for a blank id.
    /// - [`StudentError::DuplicateId`] if `id` is already registered.
    ///
    /// The registry is left unchanged on error.
    pub fn add_student(
        &mut self,
        id: &str,
        registration_number: &str,
        full_name: &str,
        email: &str,
    ) -> Result<&Student, StudentError> {
        self.admit(id, registration_number, full_name, email, Local::now().date_naive())
    }

    #[instrument(skip(self, registration_number, full_name, email))]
    fn admit(
        &mut self,
        id: &str,
        registration_number: &str,
        full_name: &str,
        email: &str,
        enrollment_date: NaiveDate,
    ) -> Result<&Student, StudentError> {
        if id.trim().is_empty() {
            return Err(StudentError::InvalidField {
                field: "id",
                message: "student id cannot be blank".into(),
                context: None,
            });
        }
        if self.index.contains_key(id) {
            warn!("Rejected duplicate student id");
            return Err(StudentError::DuplicateId { id: id.to_owned(), context: None });
        }

        let slot = self.students.len();
        self.students.push(Student::new(id, registration_number, full_name, email, enrollment_date));
        self.index.insert(id.to_owned(), slot);
        info!(total = self.students.len(), "Student admitted");

        Ok(&self.students[slot])
    }

    /// Looks up a student by id, active or not.
    ///
    /// # Errors
    /// Returns [`StudentError::NotFound`] if no student has this id.
    pub fn find_by_id(&self, id: &str) -> Result<&Student, StudentError> {
        self.slot(id).map(|slot| &self.students[slot])
    }

    /// Active students in admission order. Call again to restart.
    pub fn list_active(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter().filter(|s| s.is_active())
    }

    /// Every student in admission order, inactive ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Partially updates name and email. `None` or blank input keeps the current value.
    ///
    /// # Errors
    /// Returns [`StudentError::NotFound`] if no student has this id.
    #[instrument(skip(self, full_name, email))]
    pub fn update_profile(
        &mut self,
        id: &str,
        full_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<&Student, StudentError> {
        let slot = self.slot(id)?;
        let student = &mut self.students[slot];

        if let Some(name) = non_blank(full_name) {
            student.set_full_name(name);
        }
        if let Some(email) = non_blank(email) {
            student.set_email(email);
        }
        info!("Student profile updated");

        Ok(&self.students[slot])
    }

    /// Flips the soft-delete flag. The record stays addressable by id.
    ///
    /// # Errors
    /// Returns [`StudentError::NotFound`] if no student has this id.
    #[instrument(skip(self))]
    pub fn set_active(&mut self, id: &str, active: bool) -> Result<(), StudentError> {
        let slot = self.slot(id)?;
        self.students[slot].set_active(active);
        info!("Student status changed");
        Ok(())
    }

    /// Lists `course_code` on the student's profile. Reachable from outside only through
    /// [`CourseRoster`], i.e. from the enrollment ledger.
    ///
    /// Listing a course twice is not an error; it reports [`CourseListing::AlreadyEnrolled`].
    pub(crate) fn record_enrollment(
        &mut self,
        id: &str,
        course_code: &str,
    ) -> Result<CourseListing, StudentError> {
        let slot = self.slot(id)?;
        if self.students[slot].add_course_code(course_code) {
            debug!(id, course_code, "Course listed on student profile");
            Ok(CourseListing::Added)
        } else {
            debug!(id, course_code, "Student already lists course");
            Ok(CourseListing::AlreadyEnrolled)
        }
    }

    fn slot(&self, id: &str) -> Result<usize, StudentError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| StudentError::NotFound { id: id.to_owned(), context: None })
    }
}

impl StudentDirectory for StudentRegistry {
    fn student(&self, id: &str) -> Option<&Student> {
        self.find_by_id(id).ok()
    }
}

impl CourseRoster for StudentRegistry {
    fn list_course(
        &mut self,
        _grant: RosterGrant,
        id: &str,
        course_code: &str,
    ) -> Option<CourseListing> {
        self.record_enrollment(id, course_code).ok()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
