use crate::error::{RecordsError, RecordsErrorExt};
use ccrm_courses::{CourseCatalog, CourseDraft, CourseError, Semester};
use ccrm_domain::Student;
use ccrm_domain::config::{AppConfig, RecordsConfig};
use ccrm_enrollments::{Enrollment, EnrollmentError, EnrollmentLedger, EnrollmentPolicy};
use ccrm_reporting::Reporting;
use ccrm_students::{StudentError, StudentRegistry};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// One student registry, one course catalog and one enrollment ledger, owned together.
///
/// The ledger never holds references into the other two; [`Records::enroll`] lends them
/// for the duration of the call. Students are mutated only through `Records`, so a
/// student's course list always matches the ledger.
#[derive(Debug)]
pub struct Records {
    students: StudentRegistry,
    courses: CourseCatalog,
    enrollments: EnrollmentLedger,
    data_dir: PathBuf,
}

impl Default for Records {
    fn default() -> Self {
        Self {
            students: StudentRegistry::default(),
            courses: CourseCatalog::default(),
            enrollments: EnrollmentLedger::default(),
            data_dir: RecordsConfig::default().data_dir,
        }
    }
}

impl Records {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(policy: EnrollmentPolicy) -> Self {
        Self { enrollments: EnrollmentLedger::with_policy(policy), ..Self::default() }
    }

    #[must_use]
    pub const fn students(&self) -> &StudentRegistry {
        &self.students
    }

    /// See [`StudentRegistry::add_student`].
    ///
    /// # Errors
    /// Any [`StudentError`] the registry reports.
    pub fn add_student(
        &mut self,
        id: &str,
        registration_number: &str,
        full_name: &str,
        email: &str,
    ) -> Result<&Student, StudentError> {
        self.students.add_student(id, registration_number, full_name, email)
    }

    /// See [`StudentRegistry::update_profile`].
    ///
    /// # Errors
    /// Returns [`StudentError::NotFound`] if no student has this id.
    pub fn update_profile(
        &mut self,
        id: &str,
        full_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<&Student, StudentError> {
        self.students.update_profile(id, full_name, email)
    }

    /// # Errors
    /// Returns [`StudentError::NotFound`] if no student has this id.
    pub fn set_student_active(&mut self, id: &str, active: bool) -> Result<(), StudentError> {
        self.students.set_active(id, active)
    }

    #[must_use]
    pub const fn courses(&self) -> &CourseCatalog {
        &self.courses
    }

    pub const fn courses_mut(&mut self) -> &mut CourseCatalog {
        &mut self.courses
    }

    #[must_use]
    pub const fn enrollments(&self) -> &EnrollmentLedger {
        &self.enrollments
    }

    /// Base directory for exports, taken from `records.data_dir`. Nothing is written yet.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Enrolls `student_id` in `course_code`; see [`EnrollmentLedger::enroll`].
    ///
    /// # Errors
    /// Any [`EnrollmentError`] the ledger reports.
    pub fn enroll(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<&Enrollment, EnrollmentError> {
        self.enrollments.enroll(&mut self.students, &self.courses, student_id, course_code)
    }

    /// # Errors
    /// Any [`EnrollmentError`] the ledger reports.
    pub fn record_marks(
        &mut self,
        student_id: &str,
        course_code: &str,
        marks: f64,
    ) -> Result<&Enrollment, EnrollmentError> {
        self.enrollments.record_marks(student_id, course_code, marks)
    }

    #[must_use]
    pub const fn reporting(&self) -> Reporting<'_> {
        Reporting::new(&self.students, &self.courses, &self.enrollments)
    }

    /// Catalogues the three demonstration courses.
    ///
    /// # Errors
    /// Returns [`CourseError::DuplicateCode`] if one of the codes is already taken; courses
    /// added before the clash stay in the catalog.
    #[instrument(skip(self))]
    pub fn seed_sample_catalog(&mut self) -> Result<(), CourseError> {
        for draft in sample_catalog() {
            self.courses.add_course(draft)?;
        }
        info!(total = self.courses.len(), "Sample catalog loaded");
        Ok(())
    }
}

fn sample_catalog() -> [CourseDraft; 3] {
    [
        CourseDraft::builder()
            .code("CS101")
            .title("Introduction to Programming")
            .credits(3)
            .instructor("Dr. Smith")
            .semester(Semester::Fall)
            .department("Computer Science")
            .build(),
        CourseDraft::builder()
            .code("MATH201")
            .title("Calculus I")
            .credits(4)
            .instructor("Prof. Johnson")
            .semester(Semester::Fall)
            .department("Mathematics")
            .build(),
        CourseDraft::builder()
            .code("PHY101")
            .title("Physics Fundamentals")
            .credits(3)
            .instructor("Dr. Brown")
            .semester(Semester::Spring)
            .department("Physics")
            .build(),
    ]
}

/// Builds a [`Records`] from configuration.
///
/// # Errors
/// Returns [`RecordsError::Course`] if the sample catalog cannot be loaded.
pub fn init(config: &AppConfig) -> Result<Records, RecordsError> {
    let policy = EnrollmentPolicy { max_credits: config.records.max_credits_per_student };
    let mut records = Records::with_policy(policy);
    records.data_dir.clone_from(&config.records.data_dir);

    if config.records.seed_sample_data {
        records.seed_sample_catalog().context("Seeding sample catalog")?;
    }

    info!(
        courses = records.courses.len(),
        data_dir = %records.data_dir.display(),
        max_credits = ?policy.max_credits,
        "Records initialized"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_twice_reports_the_clash() {
        let mut records = Records::new();
        records.seed_sample_catalog().unwrap();

        assert!(matches!(records.seed_sample_catalog(), Err(CourseError::DuplicateCode { .. })));
        assert_eq!(records.courses().len(), 3);
    }

    #[test]
    fn init_honours_seed_flag_and_credit_cap() {
        let mut config = AppConfig::default();
        config.records.seed_sample_data = false;
        config.records.max_credits_per_student = Some(6);
        config.records.data_dir = PathBuf::from("/srv/ccrm");

        let records = init(&config).unwrap();
        assert!(records.courses().is_empty());
        assert_eq!(records.data_dir(), Path::new("/srv/ccrm"));
        assert_eq!(Records::new().data_dir(), Path::new("./data/"));
        assert_eq!(records.enrollments().policy().max_credits, Some(6));
    }
}
