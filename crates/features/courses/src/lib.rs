//! Course catalog slice: validated course creation, case-insensitive lookup, filtered search.

mod catalog;
mod error;

pub use crate::catalog::{CourseCatalog, MAX_COURSE_CREDITS, parse_semester};
pub use crate::error::{CourseError, CourseErrorExt};
pub use ccrm_kernel::domain::{Course, CourseDraft, Semester};
