use crate::Reporting;
use fxhash::FxHashMap;
use serde::Serialize;

/// Catalog-wide counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatistics {
    /// Every catalogued course, inactive ones included.
    pub total_courses: usize,
    pub active_courses: usize,
    /// Active courses per department name.
    pub by_department: FxHashMap<String, usize>,
}

impl Reporting<'_> {
    /// Groups active courses by department and counts them. Keys are unordered.
    #[must_use]
    pub fn course_counts_by_department(&self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for course in self.courses.list_active() {
            *counts.entry(course.department().to_owned()).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn course_statistics(&self) -> CourseStatistics {
        CourseStatistics {
            total_courses: self.courses.len(),
            active_courses: self.courses.list_active().count(),
            by_department: self.course_counts_by_department(),
        }
    }
}
