use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use typed_builder::TypedBuilder;

/// Teaching term a course runs in.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    #[default]
    Fall,
}

impl Semester {
    /// Parses operator text, falling back to [`Semester::Fall`] when it does not name a term.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_default()
    }
}

impl FromStr for Semester {
    type Err = strum::ParseError;

    /// Strict, case-insensitive parse.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|term| term.to_string().eq_ignore_ascii_case(raw))
            .ok_or(strum::ParseError::VariantNotFound)
    }
}

impl From<&str> for Semester {
    fn from(raw: &str) -> Self {
        Self::parse_lenient(raw)
    }
}

/// Every field a course needs before the catalog accepts it.
///
/// All six setters are mandatory; `build()` does not exist until each one was called.
///
/// ```rust
/// use ccrm_domain::{CourseDraft, Semester};
///
/// let draft = CourseDraft::builder()
///     .code("CS101")
///     .title("Introduction to Programming")
///     .credits(3)
///     .instructor("Dr. Smith")
///     .semester("fall")
///     .department("Computer Science")
///     .build();
///
/// assert_eq!(draft.semester, Semester::Fall);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
pub struct CourseDraft {
    #[builder(setter(into))]
    pub code: String,
    #[builder(setter(into))]
    pub title: String,
    pub credits: u32,
    #[builder(setter(into))]
    pub instructor: String,
    /// Accepts a [`Semester`] or raw text, which is parsed leniently.
    #[builder(setter(into))]
    pub semester: Semester,
    #[builder(setter(into))]
    pub department: String,
}

/// A catalog course. Code and credits are fixed once the course exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    code: String,
    title: String,
    credits: u32,
    instructor: String,
    semester: Semester,
    department: String,
    active: bool,
}

impl From<CourseDraft> for Course {
    fn from(draft: CourseDraft) -> Self {
        let CourseDraft { code, title, credits, instructor, semester, department } = draft;
        Self { code, title, credits, instructor, semester, department, active: true }
    }
}

impl Course {
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub const fn semester(&self) -> Semester {
        self.semester
    }

    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_instructor(&mut self, instructor: impl Into<String>) {
        self.instructor = instructor.into();
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({} credits)", self.code, self.title, self.credits)
    }
}
