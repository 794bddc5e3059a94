//! Allocation (solution) model.
//!
//! An allocation is the ordered list of students the allocator placed,
//! together with any errors or warnings raised along the way. It is
//! returned even when errors are present so the caller can decide what
//! to do with a computed-but-unsaved result.

use serde::{Deserialize, Serialize};

use super::{ClassroomDirectory, ClassroomId, Gender, Student, StudentId};

/// Outcome of one allocation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Allocation {
    /// Placed students: male pool first, then female pool, each in
    /// descending difficulty.
    pub students: Vec<Student>,
    /// Classrooms the students were distributed over, in round-robin order.
    pub classrooms: ClassroomDirectory,
    /// Errors. Non-empty means the request did not fully succeed.
    pub errors: Vec<String>,
    /// Non-fatal findings (dropped students, validation notes).
    pub warnings: Vec<String>,
}

impl Allocation {
    /// Creates an empty allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a failed allocation carrying a single error.
    pub fn failed(error: impl Into<String>) -> Self {
        let mut a = Self::new();
        a.add_error(error);
        a
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// No errors were recorded.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of placed students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Finds the classroom assigned to a student.
    pub fn classroom_for(&self, student: StudentId) -> Option<ClassroomId> {
        self.students
            .iter()
            .find(|s| s.id == student)
            .and_then(|s| s.classroom)
    }

    /// Students placed in a classroom, in output order.
    pub fn students_in(&self, classroom: ClassroomId) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.classroom == Some(classroom))
            .collect()
    }

    /// Students of one pool, in output order.
    pub fn pool(&self, gender: Gender) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.gender() == Some(gender))
            .collect()
    }

    /// Student → classroom pairs in output order.
    pub fn assignments(&self) -> Vec<(StudentId, Option<ClassroomId>)> {
        self.students.iter().map(|s| (s.id, s.classroom)).collect()
    }
}
