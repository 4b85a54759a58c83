//! # Domain Models
//!
//! This crate contains the record types of the campus: students, courses, enrollments,
//! and the grade scale that turns marks into letter grades.
//! Keep it lean: no I/O, no registries, no logging. Just data and the small pure
//! helpers that belong to it.

pub mod config;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod student;

pub use course::{Course, CourseDraft, Semester};
pub use enrollment::Enrollment;
pub use grade::{Grade, GradeScale, MARKS_RANGE};
pub use student::Student;
