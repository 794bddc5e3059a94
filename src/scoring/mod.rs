//! Difficulty scoring.
//!
//! Rates each student from three ordinal attributes and orders students
//! ascending by that rating. The weights are an explicit configuration
//! value so callers and tests can vary them.
//!
//! # Usage
//!
//! ```
//! use class_allocator::models::Student;
//! use class_allocator::scoring::{DifficultyScorer, DifficultyWeights};
//!
//! let scorer = DifficultyScorer::new(DifficultyWeights::uniform());
//! let sorted = scorer.score_and_sort(vec![Student::new(1, "M"), Student::new(2, "F")]);
//! assert!((sorted[0].difficulty_rating - 3.0).abs() < 1e-10);
//! ```

mod scorer;
mod weights;

pub use scorer::{sort_by_difficulty, DifficultyScorer};
pub use weights::DifficultyWeights;
