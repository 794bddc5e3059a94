//! Classroom allocation engine.
//!
//! Spreads academically difficult, behaviourally challenging, and
//! learning-differentiated students evenly across classrooms, keeping
//! male and female students in separate distribution pools.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Classroom`, `ClassroomDirectory`,
//!   `Allocation`
//! - **`scoring`**: Difficulty rating and stable sort, with explicit weights
//! - **`allocator`**: Gender partitioning, reversed round-robin distribution,
//!   and the `ClassroomAllocator` orchestrator
//! - **`store`**: Async storage collaborator traits and an in-memory store
//! - **`validation`**: Input integrity checks (duplicate IDs, locked students)
//! - **`report`**: Per-classroom distribution metrics
//! - **`config`**: TOML configuration for weights
//!
//! # Example
//!
//! ```
//! use class_allocator::allocator::ClassroomAllocator;
//! use class_allocator::models::{
//!     AcademicPerformance, Behaviour, Classroom, ClassroomDirectory, ClassroomId,
//!     LearningDifficulty, Student,
//! };
//!
//! let classrooms = ClassroomDirectory::new(vec![Classroom::new(1, "A"), Classroom::new(2, "B")]);
//! let hard = Student::new(1, "M").with_attributes(
//!     AcademicPerformance::Poor,
//!     Behaviour::VeryChallenging,
//!     LearningDifficulty::Significant,
//! );
//! let easy = Student::new(2, "M");
//!
//! let allocation = ClassroomAllocator::new().allocate(vec![easy, hard], &classrooms);
//! assert_eq!(allocation.students[0].classroom, Some(ClassroomId(1)));
//! assert_eq!(allocation.students[1].classroom, Some(ClassroomId(2)));
//! ```

pub mod allocator;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod scoring;
pub mod store;
pub mod validation;

pub use allocator::ClassroomAllocator;
pub use config::AllocatorConfig;
pub use error::{AllocationError, ConfigError, StoreError};
pub use models::{Allocation, Classroom, ClassroomDirectory, ClassroomId, Student, StudentId};
pub use report::AllocationReport;
