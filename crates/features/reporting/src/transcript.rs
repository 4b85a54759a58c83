use crate::Reporting;
use crate::error::ReportingError;
use ccrm_kernel::domain::{Enrollment, Grade, Student};
use serde::Serialize;
use tracing::{instrument, warn};

/// One graded (or not yet graded) course on a transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRow {
    pub course_code: String,
    pub title: String,
    pub credits: u32,
    /// `None` until marks are recorded; the row then carries grade `F`.
    pub marks: Option<f64>,
    pub grade: Grade,
    pub points: f64,
}

/// A student's profile with every enrollment and the resulting GPA.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub student: Student,
    pub rows: Vec<TranscriptRow>,
    /// Unweighted mean of row points; `0.0` without enrollments.
    pub gpa: f64,
    /// Saturates at `u32::MAX`.
    pub total_credits: u32,
}

impl Reporting<'_> {
    /// Builds the transcript of one student.
    ///
    /// # Errors
    /// Returns [`ReportingError::StudentNotFound`] if the id is not registered.
    #[instrument(skip(self))]
    pub fn transcript_for(&self, student_id: &str) -> Result<Transcript, ReportingError> {
        let student = self.students.find_by_id(student_id).map_err(|_| {
            warn!("Transcript requested for unknown student");
            ReportingError::StudentNotFound { student_id: student_id.to_owned(), context: None }
        })?;

        let rows: Vec<_> = self.enrollments.enrollments_for(student_id).map(|e| self.row(e)).collect();
        let total_credits = rows.iter().map(|r| r.credits).fold(0, u32::saturating_add);

        Ok(Transcript { student: student.clone(), gpa: gpa(&rows), total_credits, rows })
    }

    fn row(&self, enrollment: &Enrollment) -> TranscriptRow {
        let (title, credits) = self
            .courses
            .find_by_code(enrollment.course_code())
            .map_or_else(|_| (String::new(), 0), |c| (c.title().to_owned(), c.credits()));

        TranscriptRow {
            course_code: enrollment.course_code().to_owned(),
            title,
            credits,
            marks: enrollment.marks(),
            grade: enrollment.grade(),
            points: enrollment.points(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn gpa(rows: &[TranscriptRow]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|r| r.points).sum::<f64>() / rows.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(points: f64) -> TranscriptRow {
        TranscriptRow {
            course_code: "X".to_owned(),
            title: String::new(),
            credits: 3,
            marks: None,
            grade: Grade::F,
            points,
        }
    }

    #[test]
    fn gpa_of_nothing_is_zero() {
        assert!(gpa(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn gpa_is_unweighted_mean() {
        assert!((gpa(&[row(4.0), row(2.0)]) - 3.0).abs() < f64::EPSILON);
        assert!((gpa(&[row(4.0), row(3.0), row(3.0)]) - 10.0 / 3.0).abs() < 1e-12);
    }
}
