//! Storage collaborators.
//!
//! The allocator never talks to a database. It reads classrooms and
//! writes placed students through these traits; the caller supplies the
//! implementation. [`MemoryStore`] is provided for tests and embedding.
//!
//! No transaction spans "list classrooms" and "update students": a
//! classroom removed between the two calls goes undetected.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Classroom, ClassroomId, Student, StudentId};

/// Classroom persistence.
#[async_trait]
pub trait ClassroomStore: Send + Sync {
    /// All classrooms in a stable order. The order is the round-robin order.
    async fn list_classrooms(&self) -> StoreResult<Vec<Classroom>>;

    /// Adds a classroom. Fails with `Conflict` if the id exists.
    async fn add_classroom(&self, classroom: Classroom) -> StoreResult<()>;

    /// Deletes a classroom. Students referencing it are left untouched.
    async fn delete_classroom(&self, id: ClassroomId) -> StoreResult<()>;
}

/// Student persistence.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn list_students(&self) -> StoreResult<Vec<Student>>;

    /// Returns `Ok(None)` when the id is unknown.
    async fn get_student(&self, id: StudentId) -> StoreResult<Option<Student>>;

    /// Adds a student. Fails with `Conflict` if the id exists.
    async fn add_student(&self, student: Student) -> StoreResult<()>;

    /// Adds many students, e.g. from a bulk import. All or nothing.
    async fn add_students(&self, students: Vec<Student>) -> StoreResult<()>;

    /// Replaces an existing student record.
    async fn update_student(&self, student: Student) -> StoreResult<()>;

    /// Replaces many existing student records. All or nothing.
    async fn update_students(&self, students: &[Student]) -> StoreResult<()>;

    async fn delete_student(&self, id: StudentId) -> StoreResult<()>;
}
