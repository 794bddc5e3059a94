//! Classroom allocator.
//!
//! # Algorithm
//!
//! 1. Drop students locked into a classroom.
//! 2. Rate each remaining student and sort ascending by rating (stable).
//! 3. Split into male and female pools; other markers are dropped.
//! 4. Distribute each pool by reversed round-robin.
//! 5. Concatenate male then female assignments.
//!
//! # Complexity
//! O(n log n) for n unlocked students.

use tracing::{debug, info, warn};

use super::distribute::distribute_pool;
use super::partition::GenderPools;
use crate::config::AllocatorConfig;
use crate::error::AllocationError;
use crate::models::{Allocation, ClassroomDirectory, Student};
use crate::scoring::{DifficultyScorer, DifficultyWeights};
use crate::store::{ClassroomStore, StudentStore};
use crate::validation::{validate_classrooms, validate_students};

/// Spreads students across classrooms by difficulty, per gender.
///
/// # Example
///
/// ```
/// use class_allocator::allocator::ClassroomAllocator;
/// use class_allocator::models::{Classroom, ClassroomDirectory, Student};
///
/// let classrooms = ClassroomDirectory::new(vec![Classroom::new(1, "A"), Classroom::new(2, "B")]);
/// let students = vec![Student::new(1, "M"), Student::new(2, "F")];
///
/// let allocation = ClassroomAllocator::new().allocate(students, &classrooms);
/// assert!(allocation.is_success());
/// assert_eq!(allocation.student_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassroomAllocator {
    scorer: DifficultyScorer,
}

impl ClassroomAllocator {
    /// Creates an allocator with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator from configuration.
    pub fn from_config(config: &AllocatorConfig) -> Self {
        Self::new().with_weights(config.weights)
    }

    /// Sets the difficulty weights.
    pub fn with_weights(mut self, weights: DifficultyWeights) -> Self {
        self.scorer = DifficultyScorer::new(weights);
        self
    }

    /// The scorer in use.
    pub fn scorer(&self) -> &DifficultyScorer {
        &self.scorer
    }

    /// Allocates students to classrooms without touching storage.
    ///
    /// Locked students are excluded from the result and left unchanged.
    /// An empty classroom list yields a failed allocation with no students.
    pub fn allocate(&self, students: Vec<Student>, classrooms: &ClassroomDirectory) -> Allocation {
        if classrooms.is_empty() {
            warn!("allocation aborted: no classrooms exist");
            return Allocation::failed(AllocationError::NoClassrooms.to_string());
        }

        let total = students.len();
        let unlocked: Vec<Student> = students
            .into_iter()
            .filter(|s| !s.locked_in_classroom)
            .collect();
        let locked = total - unlocked.len();

        let sorted = self.scorer.score_and_sort(unlocked);
        let pools = GenderPools::partition(sorted);

        let mut allocation = Allocation::new();
        allocation.classrooms = classrooms.clone();

        for s in &pools.unrecognised {
            warn!(student_id = %s.id, gender = %s.gender, "student dropped: unrecognised gender marker");
            allocation.add_warning(format!(
                "student {} dropped: unrecognised gender marker {:?}",
                s.id, s.gender
            ));
        }

        let (male_count, female_count) = (pools.male.len(), pools.female.len());
        for (label, pool) in [("M", pools.male), ("F", pools.female)] {
            let size = pool.len();
            match distribute_pool(pool, classrooms) {
                Ok(assigned) => {
                    debug!(pool = label, size, "pool distributed");
                    allocation.students.extend(assigned);
                }
                Err(e) => {
                    allocation.students.clear();
                    allocation.add_error(e.to_string());
                    return allocation;
                }
            }
        }

        info!(
            total,
            locked,
            male = male_count,
            female = female_count,
            dropped = pools.unrecognised.len(),
            classrooms = classrooms.len(),
            "students allocated"
        );
        allocation
    }

    /// Loads classrooms, allocates, and saves the placed students.
    ///
    /// Never fails outright: store errors become entries in
    /// [`Allocation::errors`]. If saving fails the computed students are
    /// still returned. Input validation problems are reported as warnings.
    pub async fn allocate_and_save<C, S>(
        &self,
        students: Vec<Student>,
        classroom_store: &C,
        student_store: &S,
    ) -> Allocation
    where
        C: ClassroomStore + ?Sized,
        S: StudentStore + ?Sized,
    {
        let classrooms = match classroom_store.list_classrooms().await {
            Ok(list) => ClassroomDirectory::new(list),
            Err(e) => {
                warn!(error = %e, "failed to load classrooms");
                return Allocation::failed(AllocationError::from(e).to_string());
            }
        };

        let mut findings: Vec<String> = Vec::new();
        if let Err(errors) = validate_classrooms(classrooms.classrooms()) {
            findings.extend(errors.into_iter().map(|e| e.message));
        }
        if let Err(errors) = validate_students(&students, &classrooms) {
            findings.extend(errors.into_iter().map(|e| e.message));
        }

        let mut allocation = self.allocate(students, &classrooms);
        findings.append(&mut allocation.warnings);
        allocation.warnings = findings;

        if allocation.is_success() && !allocation.students.is_empty() {
            if let Err(e) = student_store.update_students(&allocation.students).await {
                warn!(error = %e, count = allocation.students.len(), "failed to save allocation");
                allocation.add_error(AllocationError::from(e).to_string());
            }
        }

        allocation
    }
}
