//! Student registry slice: admission, profile updates, soft deactivation.

mod error;
mod registry;

pub use crate::error::{StudentError, StudentErrorExt};
pub use crate::registry::StudentRegistry;
pub use ccrm_enrollments::CourseListing;
