use crate::grade::{Grade, GradeScale};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student's seat in a course, keyed by `(student_id, course_code)`.
///
/// Holds identifiers only; the registries resolve them when needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    student_id: String,
    course_code: String,
    enrollment_date: NaiveDate,
    marks: Option<f64>,
    grade: Grade,
}

impl Enrollment {
    pub fn new(
        student_id: impl Into<String>,
        course_code: impl Into<String>,
        enrollment_date: NaiveDate,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_code: course_code.into(),
            enrollment_date,
            marks: None,
            grade: Grade::default(),
        }
    }

    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    #[must_use]
    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    #[must_use]
    pub const fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    /// Recorded marks, `None` until graded.
    #[must_use]
    pub const fn marks(&self) -> Option<f64> {
        self.marks
    }

    #[must_use]
    pub const fn grade(&self) -> Grade {
        self.grade
    }

    #[must_use]
    pub const fn points(&self) -> f64 {
        self.grade.points()
    }

    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.marks.is_some()
    }

    /// Stores `marks` and regrades. The caller has already checked the range.
    pub fn apply_marks(&mut self, marks: f64, scale: &GradeScale) {
        self.marks = Some(marks);
        self.grade = scale.grade_for(marks);
    }
}
