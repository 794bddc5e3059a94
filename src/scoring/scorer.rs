//! Difficulty scorer and sorter.
//!
//! `rating = performance * w_perf + behaviour * w_beh + difficulty * w_diff`
//!
//! Pure and deterministic: the same student and weights always produce
//! the same rating.

use std::cmp::Ordering;

use super::DifficultyWeights;
use crate::models::Student;

/// Rates students by weighted sum of their ordinal attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DifficultyScorer {
    weights: DifficultyWeights,
}

impl DifficultyScorer {
    /// Creates a scorer with the given weights.
    pub fn new(weights: DifficultyWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    pub fn weights(&self) -> &DifficultyWeights {
        &self.weights
    }

    /// Computes a student's rating without modifying it.
    pub fn rate(&self, student: &Student) -> f64 {
        let w = &self.weights;
        student.academic_performance.value() as f64 * w.academic_performance
            + student.behaviour.value() as f64 * w.behaviour
            + student.learning_difficulty.value() as f64 * w.learning_difficulty
    }

    /// Computes and stores the rating on the student.
    pub fn score(&self, student: &mut Student) {
        student.difficulty_rating = self.rate(student);
    }

    /// Rates every student and returns them sorted ascending by rating.
    ///
    /// The sort is stable: equal ratings keep their input order.
    pub fn score_and_sort(&self, mut students: Vec<Student>) -> Vec<Student> {
        for s in students.iter_mut() {
            self.score(s);
        }
        sort_by_difficulty(&mut students);
        students
    }
}

/// Stable ascending sort on `difficulty_rating`.
pub fn sort_by_difficulty(students: &mut [Student]) {
    students.sort_by(|a, b| compare_rating(a.difficulty_rating, b.difficulty_rating));
}

fn compare_rating(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicPerformance, Behaviour, LearningDifficulty, StudentId};

    fn student(id: i32, ap: u8, b: u8, ld: u8) -> Student {
        Student::new(id, "M").with_attributes(
            AcademicPerformance::try_from(ap).unwrap(),
            Behaviour::try_from(b).unwrap(),
            LearningDifficulty::try_from(ld).unwrap(),
        )
    }

    #[test]
    fn test_rate_weighted_sum() {
        let scorer = DifficultyScorer::new(DifficultyWeights::new(1.0, 2.0, 3.0));
        let s = student(1, 4, 2, 3);
        // 4*1 + 2*2 + 3*3 = 17
        assert!((scorer.rate(&s) - 17.0).abs() < 1e-10);
    }

    #[test]
    fn test_rate_deterministic() {
        let scorer = DifficultyScorer::default();
        let s = student(1, 3, 5, 2);
        assert_eq!(scorer.rate(&s).to_bits(), scorer.rate(&s).to_bits());
    }

    #[test]
    fn test_rating_overwrites_input() {
        let scorer = DifficultyScorer::new(DifficultyWeights::uniform());
        let mut s = student(1, 1, 1, 1);
        s.difficulty_rating = 999.0;
        scorer.score(&mut s);
        assert!((s.difficulty_rating - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_weights_change_order() {
        let academic = student(1, 5, 1, 1);
        let behaviour = student(2, 1, 5, 1);

        let favour_beh = DifficultyScorer::new(DifficultyWeights::new(1.0, 10.0, 1.0));
        let sorted = favour_beh.score_and_sort(vec![behaviour.clone(), academic.clone()]);
        assert_eq!(sorted[1].id, StudentId(2));

        let favour_acad = DifficultyScorer::new(DifficultyWeights::new(10.0, 1.0, 1.0));
        let sorted = favour_acad.score_and_sort(vec![academic, behaviour]);
        assert_eq!(sorted[1].id, StudentId(1));
    }

    #[test]
    fn test_sort_ascending() {
        let scorer = DifficultyScorer::new(DifficultyWeights::uniform());
        let sorted = scorer.score_and_sort(vec![
            student(1, 5, 5, 3),
            student(2, 1, 1, 1),
            student(3, 3, 3, 2),
        ]);
        let ids: Vec<i32> = sorted.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_stable_on_ties() {
        let scorer = DifficultyScorer::new(DifficultyWeights::uniform());
        // 2+1+1 == 1+2+1 == 1+1+2
        let sorted = scorer.score_and_sort(vec![
            student(10, 2, 1, 1),
            student(11, 1, 2, 1),
            student(12, 1, 1, 2),
        ]);
        let ids: Vec<i32> = sorted.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn test_sort_empty() {
        let scorer = DifficultyScorer::default();
        assert!(scorer.score_and_sort(Vec::new()).is_empty());
    }
}
