use crate::error::EnrollmentError;
use crate::roster::{CourseListing, CourseRoster, RosterGrant};
use ccrm_kernel::directory::CourseDirectory;
use ccrm_kernel::domain::{Enrollment, GradeScale};
use ccrm_kernel::key::CourseKey;
use chrono::{Local, NaiveDate};
use fxhash::FxHashMap;
use tracing::{debug, info, instrument, warn};

type PairKey = (String, CourseKey);

/// Admission rules applied by [`EnrollmentLedger::enroll`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentPolicy {
    /// Most credits a single student may carry. `None` means unlimited.
    pub max_credits: Option<u32>,
}

/// Owns every [`Enrollment`], at most one per `(student id, course code)` pair.
///
/// Student ids compare exactly; course codes compare case-insensitively and are stored
/// in the catalog's spelling.
#[derive(Debug, Default)]
pub struct EnrollmentLedger {
    enrollments: Vec<Enrollment>,
    index: FxHashMap<PairKey, usize>,
    scale: GradeScale,
    policy: EnrollmentPolicy,
}

impl EnrollmentLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(policy: EnrollmentPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    #[must_use]
    pub const fn policy(&self) -> EnrollmentPolicy {
        self.policy
    }

    #[must_use]
    pub const fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// Enrolls a student in a course, dated today.
    ///
    /// Both identifiers are resolved read-only; on success the course is listed on the
    /// student's profile and the new enrollment starts ungraded at `F`.
    ///
    /// # Errors
    /// - [`EnrollmentError::StudentNotFound`] / [`EnrollmentError::CourseNotFound`] when an
    ///   identifier does not resolve.
    /// - [`EnrollmentError::DuplicateEnrollment`] when the pair already exists.
    /// - [`EnrollmentError::CreditLimitExceeded`] when a credit cap is configured and the
    ///   course would push the student past it.
    pub fn enroll<S, C>(
        &mut self,
        students: &mut S,
        courses: &C,
        student_id: &str,
        course_code: &str,
    ) -> Result<&Enrollment, EnrollmentError>
    where
        S: CourseRoster + ?Sized,
        C: CourseDirectory + ?Sized,
    {
        self.enroll_on(students, courses, student_id, course_code, Local::now().date_naive())
    }

    #[instrument(skip(self, students, courses))]
    fn enroll_on<S, C>(
        &mut self,
        students: &mut S,
        courses: &C,
        student_id: &str,
        course_code: &str,
        date: NaiveDate,
    ) -> Result<&Enrollment, EnrollmentError>
    where
        S: CourseRoster + ?Sized,
        C: CourseDirectory + ?Sized,
    {
        if students.student(student_id).is_none() {
            warn!("Enrollment rejected: unknown student");
            return Err(EnrollmentError::StudentNotFound {
                student_id: student_id.to_owned(),
                context: None,
            });
        }

        let Some(course) = courses.course(course_code) else {
            warn!("Enrollment rejected: unknown course");
            return Err(EnrollmentError::CourseNotFound {
                course_code: course_code.to_owned(),
                context: None,
            });
        };
        let canonical = course.code().to_owned();
        let credits = course.credits();

        let key = pair_key(student_id, &canonical);
        if self.index.contains_key(&key) {
            warn!("Enrollment rejected: duplicate pair");
            return Err(EnrollmentError::DuplicateEnrollment {
                student_id: student_id.to_owned(),
                course_code: canonical,
                context: None,
            });
        }

        if let Some(limit) = self.policy.max_credits {
            let requested = self.credits_for(courses, student_id).checked_add(credits);
            if requested.is_none_or(|r| r > limit) {
                let requested = requested.unwrap_or(u32::MAX);
                warn!(requested, limit, "Enrollment rejected: credit limit");
                return Err(EnrollmentError::CreditLimitExceeded {
                    student_id: student_id.to_owned(),
                    requested,
                    limit,
                    context: None,
                });
            }
        }

        match students.list_course(RosterGrant::issue(), student_id, &canonical) {
            Some(CourseListing::Added) => {}
            Some(CourseListing::AlreadyEnrolled) => {
                debug!("Student profile already listed the course");
            }
            None => {
                return Err(EnrollmentError::StudentNotFound {
                    student_id: student_id.to_owned(),
                    context: Some("Student vanished while listing the course".into()),
                });
            }
        }

        let slot = self.enrollments.len();
        self.enrollments.push(Enrollment::new(student_id, canonical, date));
        self.index.insert(key, slot);
        info!(total = self.enrollments.len(), "Enrollment created");

        Ok(&self.enrollments[slot])
    }

    /// Records marks and regrades the enrollment.
    ///
    /// # Errors
    /// - [`EnrollmentError::NotFound`] when the pair is not enrolled.
    /// - [`EnrollmentError::MarksOutOfRange`] when `marks` is outside `[0, 100]` or `NaN`;
    ///   previous marks and grade are kept.
    #[instrument(skip(self))]
    pub fn record_marks(
        &mut self,
        student_id: &str,
        course_code: &str,
        marks: f64,
    ) -> Result<&Enrollment, EnrollmentError> {
        let slot = self.slot(student_id, course_code)?;

        if !self.scale.accepts(marks) {
            warn!("Marks rejected: out of range");
            return Err(EnrollmentError::MarksOutOfRange { marks, context: None });
        }

        let enrollment = &mut self.enrollments[slot];
        enrollment.apply_marks(marks, &self.scale);
        info!(grade = %enrollment.grade(), "Marks recorded");

        Ok(&self.enrollments[slot])
    }

    /// A student's enrollments in enrollment order. Call again to restart.
    pub fn enrollments_for<'a>(
        &'a self,
        student_id: &'a str,
    ) -> impl Iterator<Item = &'a Enrollment> + 'a {
        self.enrollments.iter().filter(move |e| e.student_id() == student_id)
    }

    /// Looks up one enrollment; the course code may be in any case.
    ///
    /// # Errors
    /// Returns [`EnrollmentError::NotFound`] when the pair is not enrolled.
    pub fn find(&self, student_id: &str, course_code: &str) -> Result<&Enrollment, EnrollmentError> {
        self.slot(student_id, course_code).map(|slot| &self.enrollments[slot])
    }

    /// Every enrollment in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Enrollment> + '_ {
        self.enrollments.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }

    /// Credits the student currently carries, saturating at `u32::MAX`. Codes the catalog no
    /// longer resolves count as zero.
    pub fn credits_for<C>(&self, courses: &C, student_id: &str) -> u32
    where
        C: CourseDirectory + ?Sized,
    {
        self.enrollments_for(student_id)
            .filter_map(|e| courses.course(e.course_code()))
            .map(ccrm_kernel::domain::Course::credits)
            .fold(0, u32::saturating_add)
    }

    fn slot(&self, student_id: &str, course_code: &str) -> Result<usize, EnrollmentError> {
        self.index.get(&pair_key(student_id, course_code)).copied().ok_or_else(|| {
            EnrollmentError::NotFound {
                student_id: student_id.to_owned(),
                course_code: course_code.to_owned(),
                context: None,
            }
        })
    }
}

fn pair_key(student_id: &str, course_code: &str) -> PairKey {
    (student_id.to_owned(), CourseKey::new(course_code))
}
