//! Reversed round-robin distribution.
//!
//! A pool sorted ascending by difficulty is consumed from its last
//! element (hardest) to its first, while a cursor cycles through the
//! classrooms from index 0. Each pool gets a fresh cursor.
//!
//! Example with classrooms `[A, B]` and pool `[s1, s2, s3]`:
//! `s3 → A, s2 → B, s1 → A`, output `[s3, s2, s1]`.

use crate::error::AllocationError;
use crate::models::{ClassroomDirectory, Student};

/// Cycles positions `0..count`, wrapping back to 0.
#[derive(Debug, Clone)]
pub struct RoundRobinCursor {
    position: usize,
    count: usize,
}

impl RoundRobinCursor {
    /// Creates a cursor at position 0.
    pub fn new(count: usize) -> Self {
        Self { position: 0, count }
    }

    /// Returns the current position and advances.
    ///
    /// Returns `None` if count is zero.
    pub fn next_position(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        if self.position >= self.count {
            self.position = 0;
        }
        let current = self.position;
        self.position += 1;
        Some(current)
    }
}

/// Assigns every student in a pool to a classroom.
///
/// `pool` must be sorted ascending by difficulty. The returned students
/// are in assignment order, i.e. descending difficulty.
///
/// # Errors
/// [`AllocationError::NoClassrooms`] if `classrooms` is empty; the pool
/// is not touched in that case.
pub fn distribute_pool(
    pool: Vec<Student>,
    classrooms: &ClassroomDirectory,
) -> Result<Vec<Student>, AllocationError> {
    if classrooms.is_empty() {
        return Err(AllocationError::NoClassrooms);
    }

    let mut cursor = RoundRobinCursor::new(classrooms.len());
    let mut assigned = Vec::with_capacity(pool.len());

    for mut student in pool.into_iter().rev() {
        let classroom = cursor
            .next_position()
            .and_then(|p| classrooms.at(p))
            .ok_or(AllocationError::NoClassrooms)?;
        student.classroom = Some(classroom.id);
        assigned.push(student);
    }

    Ok(assigned)
}
