//! Letter grades and the mark thresholds that produce them.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum_macros::{Display, IntoStaticStr};

/// Valid marks for a recorded enrollment.
pub const MARKS_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Letter grade with its grade-point value.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
pub enum Grade {
    A,
    B,
    C,
    D,
    /// Lowest grade; also the grade of an enrollment without marks.
    #[default]
    F,
}

impl Grade {
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    #[must_use]
    pub fn letter(self) -> &'static str {
        self.into()
    }
}

/// Ordered (descending) mark thresholds.
///
/// The first threshold a mark reaches decides the grade; marks below every
/// threshold fall through to [`Grade::F`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeScale {
    thresholds: &'static [(f64, Grade)],
}

impl GradeScale {
    /// The institution-wide scale: 90/80/70/60.
    pub const STANDARD: Self =
        Self { thresholds: &[(90.0, Grade::A), (80.0, Grade::B), (70.0, Grade::C), (60.0, Grade::D)] };

    /// Maps marks to a grade.
    ///
    /// Total on [`MARKS_RANGE`]. Callers validate the range first (see [`GradeScale::accepts`]);
    /// values above 100 still map to the top grade and negative values to `F`.
    #[must_use]
    pub fn grade_for(&self, marks: f64) -> Grade {
        self.thresholds
            .iter()
            .find(|(threshold, _)| marks >= *threshold)
            .map_or(Grade::F, |&(_, grade)| grade)
    }

    /// Whether `marks` can be recorded. Rejects `NaN`.
    #[must_use]
    pub fn accepts(&self, marks: f64) -> bool {
        MARKS_RANGE.contains(&marks)
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::STANDARD
    }
}
