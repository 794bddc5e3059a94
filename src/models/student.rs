//! Student model.
//!
//! A student is the unit being placed. Three ordinal attributes describe
//! how much support the student needs; a higher value always means a
//! harder placement.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClassroomId;

/// Unique student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when an ordinal attribute is outside its range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{attribute} must be between 1 and {max}, got {value}")]
pub struct OutOfRange {
    /// Attribute name.
    pub attribute: &'static str,
    /// Offending value.
    pub value: u8,
    /// Largest accepted value.
    pub max: u8,
}

macro_rules! ordinal {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, max = $max:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// Ordinal value as an integer.
            #[inline]
            pub fn value(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<u8> for $name {
            type Error = OutOfRange;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(OutOfRange {
                        attribute: $label,
                        value,
                        max: $max,
                    }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(v: $name) -> u8 {
                v as u8
            }
        }
    };
}

ordinal! {
    /// Academic performance, 1 (strong) to 5 (struggling).
    AcademicPerformance, "academic performance", max = 5 {
        /// Well above year level.
        Excellent = 1,
        /// Above year level.
        Good = 2,
        /// At year level.
        Average = 3,
        /// Below year level.
        BelowAverage = 4,
        /// Well below year level.
        Poor = 5,
    }
}

ordinal! {
    /// Classroom behaviour, 1 (exemplary) to 5 (very challenging).
    Behaviour, "behaviour", max = 5 {
        /// No concerns.
        Excellent = 1,
        /// Occasional minor issues.
        Good = 2,
        /// Needs regular redirection.
        Average = 3,
        /// Frequently disruptive.
        Challenging = 4,
        /// Requires a behaviour plan.
        VeryChallenging = 5,
    }
}

ordinal! {
    /// Learning difficulty, 1 (none) to 3 (significant).
    LearningDifficulty, "learning difficulty", max = 3 {
        /// No identified difficulty.
        None = 1,
        /// Mild, managed in class.
        Mild = 2,
        /// Significant, needs differentiated support.
        Significant = 3,
    }
}

/// Recognised gender markers.
///
/// The raw marker stays on [`Student`] as a string; only exact `"M"` and
/// `"F"` map to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Marker `"M"`.
    Male,
    /// Marker `"F"`.
    Female,
}

impl Gender {
    /// Parses a marker by exact match. Case and whitespace are significant.
    pub fn parse(marker: &str) -> Option<Self> {
        match marker {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }

    /// The canonical marker string.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

/// A student to be placed in a classroom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: StudentId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub surname: String,
    /// Raw gender marker, expected `"M"` or `"F"`.
    pub gender: String,
    /// Academic performance (1..=5).
    pub academic_performance: AcademicPerformance,
    /// Behaviour (1..=5).
    pub behaviour: Behaviour,
    /// Learning difficulty (1..=3).
    pub learning_difficulty: LearningDifficulty,
    /// Placement is fixed; the allocator must not move this student.
    #[serde(default)]
    pub locked_in_classroom: bool,
    /// Derived score. Recomputed by the allocator, never trusted as input.
    #[serde(default)]
    pub difficulty_rating: f64,
    /// Assigned classroom, `None` until allocated.
    #[serde(default)]
    pub classroom: Option<ClassroomId>,
}

impl Student {
    /// Creates an unlocked, unassigned student with the lowest-support
    /// attributes.
    pub fn new(id: i32, gender: impl Into<String>) -> Self {
        Self {
            id: StudentId(id),
            first_name: String::new(),
            surname: String::new(),
            gender: gender.into(),
            academic_performance: AcademicPerformance::Excellent,
            behaviour: Behaviour::Excellent,
            learning_difficulty: LearningDifficulty::None,
            locked_in_classroom: false,
            difficulty_rating: 0.0,
            classroom: None,
        }
    }

    /// Sets first name and surname.
    pub fn with_name(mut self, first_name: impl Into<String>, surname: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.surname = surname.into();
        self
    }

    /// Sets the three ordinal attributes.
    pub fn with_attributes(
        mut self,
        academic_performance: AcademicPerformance,
        behaviour: Behaviour,
        learning_difficulty: LearningDifficulty,
    ) -> Self {
        self.academic_performance = academic_performance;
        self.behaviour = behaviour;
        self.learning_difficulty = learning_difficulty;
        self
    }

    /// Fixes the student in the given classroom.
    pub fn locked_in(mut self, classroom: ClassroomId) -> Self {
        self.classroom = Some(classroom);
        self.locked_in_classroom = true;
        self
    }

    /// Parsed gender marker, `None` for anything other than `"M"`/`"F"`.
    pub fn gender(&self) -> Option<Gender> {
        Gender::parse(&self.gender)
    }

    /// Whether a classroom has been assigned.
    pub fn is_assigned(&self) -> bool {
        self.classroom.is_some()
    }

    /// "First Surname", trimmed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
            .trim()
            .to_string()
    }
}
