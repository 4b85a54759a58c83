use crate::error::CourseError;
use ccrm_kernel::directory::CourseDirectory;
use ccrm_kernel::domain::{Course, CourseDraft, Semester};
use ccrm_kernel::key::{CourseKey, same_text};
use fxhash::FxHashMap;
use tracing::{info, instrument, warn};

/// Largest credit value a single course may carry.
pub const MAX_COURSE_CREDITS: u32 = 20;

/// Owns every [`Course`] record, indexed by [`CourseKey`].
#[derive(Debug, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    index: FxHashMap<CourseKey, usize>,
}

impl CourseCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a draft and catalogues it as an active course.
    ///
    /// # Errors
    /// - [`CourseError::InvalidField`] for a blank code, or credits outside
    ///   `1..=MAX_COURSE_CREDITS`.
    /// - [`CourseError::DuplicateCode`] if the code exists in any casing.
    #[instrument(skip(self, draft), fields(code = %draft.code))]
    pub fn add_course(&mut self, mut draft: CourseDraft) -> Result<&Course, CourseError> {
        draft.code = draft.code.trim().to_owned();
        validate(&draft)?;

        let key = CourseKey::new(&draft.code);
        if self.index.contains_key(&key) {
            warn!("Rejected duplicate course code");
            return Err(CourseError::DuplicateCode { code: draft.code, context: None });
        }

        let slot = self.courses.len();
        self.courses.push(draft.into());
        self.index.insert(key, slot);
        info!(total = self.courses.len(), "Course added to catalog");

        Ok(&self.courses[slot])
    }

    /// Case-insensitive lookup, active or not.
    ///
    /// # Errors
    /// Returns [`CourseError::NotFound`] if no course has this code.
    pub fn find_by_code(&self, code: &str) -> Result<&Course, CourseError> {
        self.slot(code).map(|slot| &self.courses[slot])
    }

    /// Active courses in insertion order. Call again to restart.
    pub fn list_active(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter().filter(|c| c.is_active())
    }

    /// Every course in insertion order, inactive ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Active courses taught by `instructor` (exact name, any case).
    #[must_use]
    pub fn search_by_instructor(&self, instructor: &str) -> Vec<&Course> {
        self.list_active().filter(|c| same_text(c.instructor(), instructor)).collect()
    }

    /// Active courses offered by `department` (exact name, any case).
    #[must_use]
    pub fn search_by_department(&self, department: &str) -> Vec<&Course> {
        self.list_active().filter(|c| same_text(c.department(), department)).collect()
    }

    /// Partially updates the mutable descriptive fields. `None` or blank input keeps the value.
    ///
    /// # Errors
    /// Returns [`CourseError::NotFound`] if no course has this code.
    #[instrument(skip(self, title, instructor, department))]
    pub fn update_details(
        &mut self,
        code: &str,
        title: Option<&str>,
        instructor: Option<&str>,
        department: Option<&str>,
    ) -> Result<&Course, CourseError> {
        let slot = self.slot(code)?;
        let course = &mut self.courses[slot];

        if let Some(title) = non_blank(title) {
            course.set_title(title);
        }
        if let Some(instructor) = non_blank(instructor) {
            course.set_instructor(instructor);
        }
        if let Some(department) = non_blank(department) {
            course.set_department(department);
        }
        info!("Course details updated");

        Ok(&self.courses[slot])
    }

    /// Flips the soft-delete flag. The course stays addressable by code.
    ///
    /// # Errors
    /// Returns [`CourseError::NotFound`] if no course has this code.
    #[instrument(skip(self))]
    pub fn set_active(&mut self, code: &str, active: bool) -> Result<(), CourseError> {
        let slot = self.slot(code)?;
        self.courses[slot].set_active(active);
        info!("Course status changed");
        Ok(())
    }

    fn slot(&self, code: &str) -> Result<usize, CourseError> {
        self.index
            .get(&CourseKey::new(code))
            .copied()
            .ok_or_else(|| CourseError::NotFound { code: code.to_owned(), context: None })
    }
}

impl CourseDirectory for CourseCatalog {
    fn course(&self, code: &str) -> Option<&Course> {
        self.find_by_code(code).ok()
    }
}

/// Parses operator-entered semester text, defaulting to FALL with a warning.
#[must_use]
pub fn parse_semester(raw: &str) -> Semester {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(input = raw, "Unrecognized semester, defaulting to FALL");
        Semester::Fall
    })
}

fn validate(draft: &CourseDraft) -> Result<(), CourseError> {
    if draft.code.is_empty() {
        return Err(CourseError::InvalidField {
            field: "code",
            message: "course code cannot be blank".into(),
            context: None,
        });
    }
    if !(1..=MAX_COURSE_CREDITS).contains(&draft.credits) {
        return Err(CourseError::InvalidField {
            field: "credits",
            message: format!("credits must be between 1 and {MAX_COURSE_CREDITS}").into(),
            context: None,
        });
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(code: &str, instructor: &str, department: &str) -> CourseDraft {
        CourseDraft::builder()
            .code(code)
            .title(format!("{code} title"))
            .credits(3)
            .instructor(instructor)
            .semester(Semester::Fall)
            .department(department)
            .build()
    }

    fn catalog() -> CourseCatalog {
        let mut catalog = CourseCatalog::new();
        catalog.add_course(draft("CS101", "Dr. Smith", "Computer Science")).unwrap();
        catalog.add_course(draft("CS201", "Dr. Smith", "Computer Science")).unwrap();
        catalog.add_course(draft("MATH201", "Prof. Johnson", "Mathematics")).unwrap();
        catalog
    }

    #[test]
    fn duplicate_codes_are_rejected_in_any_case() {
        let mut catalog = catalog();
        let err = catalog.add_course(draft("cs101", "Someone", "Elsewhere")).unwrap_err();

        assert!(matches!(err, CourseError::DuplicateCode { ref code, .. } if code == "cs101"));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find_by_code("CS101").unwrap().instructor(), "Dr. Smith");
    }

    #[test]
    fn lookup_ignores_case_and_keeps_display_spelling() {
        let mut catalog = CourseCatalog::new();
        catalog.add_course(draft(" Bio110 ", "Dr. Gray", "Biology")).unwrap();

        let course = catalog.find_by_code("BIO110").unwrap();
        assert_eq!(course.code(), "Bio110");
        assert!(catalog.find_by_code("bio110").is_ok());
        assert!(matches!(catalog.find_by_code("BIO111"), Err(CourseError::NotFound { .. })));
    }

    #[test]
    fn invalid_drafts_never_become_visible() {
        let mut catalog = CourseCatalog::new();
        let mut zero = draft("CHEM100", "Dr. White", "Chemistry");
        zero.credits = 0;

        assert!(matches!(
            catalog.add_course(zero),
            Err(CourseError::InvalidField { field: "credits", .. })
        ));
        let mut huge = draft("CHEM101", "Dr. White", "Chemistry");
        huge.credits = u32::MAX;
        assert!(matches!(
            catalog.add_course(huge),
            Err(CourseError::InvalidField { field: "credits", .. })
        ));
        assert!(matches!(
            catalog.add_course(draft("   ", "Dr. White", "Chemistry")),
            Err(CourseError::InvalidField { field: "code", .. })
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn searches_are_case_insensitive_and_skip_inactive() {
        let mut catalog = catalog();
        assert_eq!(catalog.search_by_instructor("dr. smith").len(), 2);
        assert_eq!(catalog.search_by_department("MATHEMATICS").len(), 1);
        assert!(catalog.search_by_instructor("Dr. Smith ").is_empty());

        catalog.set_active("cs201", false).unwrap();
        let codes: Vec<_> = catalog.search_by_instructor("Dr. Smith").into_iter().map(Course::code).collect();
        assert_eq!(codes, ["CS101"]);
        assert!(catalog.search_by_department("Physics").is_empty());
        assert!(!catalog.find_by_code("CS201").unwrap().is_active());
    }

    #[test]
    fn active_listing_keeps_insertion_order() {
        let mut catalog = catalog();
        catalog.set_active("CS101", false).unwrap();

        let codes: Vec<_> = catalog.list_active().map(Course::code).collect();
        assert_eq!(codes, ["CS201", "MATH201"]);
        assert_eq!(catalog.iter().count(), 3);
    }

    #[test]
    fn details_update_partially() {
        let mut catalog = catalog();
        let course =
            catalog.update_details("math201", None, Some("Dr. Noether"), Some(" ")).unwrap();

        assert_eq!(course.instructor(), "Dr. Noether");
        assert_eq!(course.department(), "Mathematics");
        assert_eq!(course.title(), "MATH201 title");
    }

    #[test]
    fn credit_bounds_are_inclusive() {
        let mut catalog = CourseCatalog::new();
        let mut one = draft("SEM100", "Dr. White", "Seminars");
        one.credits = 1;
        let mut max = draft("THESIS", "Dr. White", "Seminars");
        max.credits = MAX_COURSE_CREDITS;
        let mut over = draft("THESIS2", "Dr. White", "Seminars");
        over.credits = MAX_COURSE_CREDITS + 1;

        assert!(catalog.add_course(one).is_ok());
        assert_eq!(catalog.add_course(max).unwrap().credits(), MAX_COURSE_CREDITS);
        assert!(catalog.add_course(over).is_err());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn semester_text_falls_back_to_fall() {
        assert_eq!(parse_semester("summer"), Semester::Summer);
        assert_eq!(parse_semester("autumn"), Semester::Fall);
    }
}
