//! Write-back from the ledger to the student profiles.
//!
//! A course appears on a student profile only as the side effect of an enrollment. The
//! listing call demands a [`RosterGrant`], and only this crate can create one.

use ccrm_kernel::directory::StudentDirectory;

/// Outcome of listing a course on a student profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseListing {
    Added,
    AlreadyEnrolled,
}

/// Proof that the ledger is creating the enrollment behind a listing.
#[derive(Debug)]
pub struct RosterGrant(());

impl RosterGrant {
    pub(crate) const fn issue() -> Self {
        Self(())
    }
}

/// Student directories the ledger can list enrolled courses on.
pub trait CourseRoster: StudentDirectory {
    /// Lists `course_code` on the student's profile. `None` when the student is unknown.
    fn list_course(
        &mut self,
        grant: RosterGrant,
        student_id: &str,
        course_code: &str,
    ) -> Option<CourseListing>;
}
