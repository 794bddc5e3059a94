//! Allocation domain models.
//!
//! Provides the core data types for describing an allocation problem
//! (students and classrooms) and its solution.
//!
//! # Relationships
//!
//! | Type | Role |
//! |------|------|
//! | Student | Unit being placed |
//! | Classroom | Placement target |
//! | ClassroomDirectory | Ordered classroom list with id lookup |
//! | Allocation | Placed students plus errors and warnings |

mod allocation;
mod classroom;
mod student;

pub use allocation::Allocation;
pub use classroom::{Classroom, ClassroomDirectory, ClassroomId};
pub use student::{
    AcademicPerformance, Behaviour, Gender, LearningDifficulty, OutOfRange, Student, StudentId,
};
