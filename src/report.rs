//! Allocation quality metrics.
//!
//! Summarises how an allocation spread students over classrooms.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Per-classroom counts | Total, male, female students placed |
//! | Mean difficulty | Average rating of students in a classroom |
//! | Pool spread | max − min count of one pool across all classrooms |
//! | Difficulty gap | max − min mean difficulty across non-empty classrooms |
//! | Unplaced | Students with no classroom or an unknown classroom |

use serde::Serialize;

use crate::models::{Allocation, ClassroomId, Gender};

/// Per-classroom totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassroomStats {
    pub classroom: ClassroomId,
    pub name: String,
    pub total: usize,
    pub male: usize,
    pub female: usize,
    /// Sum of difficulty ratings.
    pub total_difficulty: f64,
}

impl ClassroomStats {
    /// Mean difficulty, 0.0 for an empty classroom.
    pub fn mean_difficulty(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.total_difficulty / self.total as f64
        }
    }

    fn count(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

/// Allocation performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationReport {
    /// One entry per classroom, in round-robin order.
    pub classrooms: Vec<ClassroomStats>,
    /// Count spread of the male pool.
    pub male_spread: usize,
    /// Count spread of the female pool.
    pub female_spread: usize,
    /// Largest gap between classroom mean difficulties.
    pub difficulty_gap: f64,
    /// Students without a known classroom.
    pub unplaced: usize,
}

impl AllocationReport {
    /// Computes the report from an allocation.
    pub fn calculate(allocation: &Allocation) -> Self {
        let mut classrooms: Vec<ClassroomStats> = allocation
            .classrooms
            .classrooms()
            .iter()
            .map(|c| ClassroomStats {
                classroom: c.id,
                name: c.name.clone(),
                total: 0,
                male: 0,
                female: 0,
                total_difficulty: 0.0,
            })
            .collect();

        let mut unplaced = 0;
        for s in &allocation.students {
            let stats = s
                .classroom
                .and_then(|id| classrooms.iter_mut().find(|c| c.classroom == id));
            let Some(stats) = stats else {
                unplaced += 1;
                continue;
            };
            stats.total += 1;
            stats.total_difficulty += s.difficulty_rating;
            match s.gender() {
                Some(Gender::Male) => stats.male += 1,
                Some(Gender::Female) => stats.female += 1,
                None => {}
            }
        }

        let male_spread = spread(&classrooms, Gender::Male);
        let female_spread = spread(&classrooms, Gender::Female);

        let means: Vec<f64> = classrooms
            .iter()
            .filter(|c| c.total > 0)
            .map(|c| c.mean_difficulty())
            .collect();
        let difficulty_gap = match (
            means.iter().copied().reduce(f64::max),
            means.iter().copied().reduce(f64::min),
        ) {
            (Some(max), Some(min)) => max - min,
            _ => 0.0,
        };

        Self {
            classrooms,
            male_spread,
            female_spread,
            difficulty_gap,
            unplaced,
        }
    }

    /// Whether each pool's count differs by at most one between classrooms.
    pub fn is_balanced(&self) -> bool {
        self.male_spread <= 1 && self.female_spread <= 1
    }

    /// Stats for one classroom.
    pub fn classroom(&self, id: ClassroomId) -> Option<&ClassroomStats> {
        self.classrooms.iter().find(|c| c.classroom == id)
    }
}

fn spread(classrooms: &[ClassroomStats], gender: Gender) -> usize {
    let counts = classrooms.iter().map(|c| c.count(gender));
    match (counts.clone().max(), counts.min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    }
}
