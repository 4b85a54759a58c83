//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, canonical record keys, and the
//! directory traits through which one slice resolves identifiers owned by another.
//!
//! ## Canonical course keys
//! ```rust
//! # use ccrm_kernel::key::CourseKey;
//! assert_eq!(CourseKey::new("cs101"), CourseKey::new("CS101"));
//! ```
pub mod config;
pub mod directory;
pub mod key;

pub use ccrm_domain as domain;
