//! In-memory store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ClassroomStore, StudentStore};
use crate::error::{StoreError, StoreResult};
use crate::models::{Classroom, ClassroomId, Student, StudentId};

/// Store backed by process memory.
///
/// Classrooms keep insertion order. Students are listed by ascending id.
/// Writes can be made to fail with [`MemoryStore::set_fail_writes`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    classrooms: RwLock<Vec<Classroom>>,
    students: RwLock<BTreeMap<StudentId, Student>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with classrooms and students.
    ///
    /// Later duplicates replace earlier students with the same id.
    pub fn with_data(classrooms: Vec<Classroom>, students: Vec<Student>) -> Self {
        Self {
            classrooms: RwLock::new(classrooms),
            students: RwLock::new(students.into_iter().map(|s| (s.id, s)).collect()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent write fail with `Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ClassroomStore for MemoryStore {
    async fn list_classrooms(&self) -> StoreResult<Vec<Classroom>> {
        Ok(self.classrooms.read().await.clone())
    }

    async fn add_classroom(&self, classroom: Classroom) -> StoreResult<()> {
        self.check_writable()?;
        let mut classrooms = self.classrooms.write().await;
        if classrooms.iter().any(|c| c.id == classroom.id) {
            return Err(StoreError::Conflict(format!("classroom {}", classroom.id)));
        }
        debug!(classroom_id = %classroom.id, name = %classroom.name, "classroom added");
        classrooms.push(classroom);
        Ok(())
    }

    async fn delete_classroom(&self, id: ClassroomId) -> StoreResult<()> {
        self.check_writable()?;
        let mut classrooms = self.classrooms.write().await;
        let pos = classrooms
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::ClassroomNotFound(id))?;
        classrooms.remove(pos);
        debug!(classroom_id = %id, "classroom deleted");
        Ok(())
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn list_students(&self) -> StoreResult<Vec<Student>> {
        Ok(self.students.read().await.values().cloned().collect())
    }

    async fn get_student(&self, id: StudentId) -> StoreResult<Option<Student>> {
        Ok(self.students.read().await.get(&id).cloned())
    }

    async fn add_student(&self, student: Student) -> StoreResult<()> {
        self.add_students(vec![student]).await
    }

    async fn add_students(&self, students: Vec<Student>) -> StoreResult<()> {
        self.check_writable()?;
        let mut stored = self.students.write().await;
        let mut seen = std::collections::HashSet::new();
        for s in &students {
            if stored.contains_key(&s.id) || !seen.insert(s.id) {
                return Err(StoreError::Conflict(format!("student {}", s.id)));
            }
        }
        debug!(count = students.len(), "students added");
        stored.extend(students.into_iter().map(|s| (s.id, s)));
        Ok(())
    }

    async fn update_student(&self, student: Student) -> StoreResult<()> {
        self.update_students(std::slice::from_ref(&student)).await
    }

    async fn update_students(&self, students: &[Student]) -> StoreResult<()> {
        self.check_writable()?;
        let mut stored = self.students.write().await;
        if let Some(missing) = students.iter().find(|s| !stored.contains_key(&s.id)) {
            return Err(StoreError::StudentNotFound(missing.id));
        }
        for s in students {
            stored.insert(s.id, s.clone());
        }
        debug!(count = students.len(), "students updated");
        Ok(())
    }

    async fn delete_student(&self, id: StudentId) -> StoreResult<()> {
        self.check_writable()?;
        self.students
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::StudentNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_classroom_order_preserved() {
        let store = MemoryStore::new();
        store.add_classroom(Classroom::new(5, "E")).await.unwrap();
        store.add_classroom(Classroom::new(1, "A")).await.unwrap();

        let names: Vec<String> = store
            .list_classrooms()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["E", "A"]);
    }

    #[tokio::test]
    async fn test_classroom_conflict_and_delete() {
        let store = MemoryStore::with_data(vec![Classroom::new(1, "A")], vec![]);
        assert!(matches!(
            store.add_classroom(Classroom::new(1, "again")).await,
            Err(StoreError::Conflict(_))
        ));

        store.delete_classroom(ClassroomId(1)).await.unwrap();
        assert!(store.list_classrooms().await.unwrap().is_empty());
        assert_eq!(
            store.delete_classroom(ClassroomId(1)).await,
            Err(StoreError::ClassroomNotFound(ClassroomId(1)))
        );
    }

    #[tokio::test]
    async fn test_delete_classroom_does_not_cascade() {
        let student = Student::new(1, "M").locked_in(ClassroomId(1));
        let store = MemoryStore::with_data(vec![Classroom::new(1, "A")], vec![student]);

        store.delete_classroom(ClassroomId(1)).await.unwrap();
        let s = store.get_student(StudentId(1)).await.unwrap().unwrap();
        assert_eq!(s.classroom, Some(ClassroomId(1)));
    }

    #[tokio::test]
    async fn test_student_crud() {
        let store = MemoryStore::new();
        store.add_student(Student::new(2, "F")).await.unwrap();
        store.add_student(Student::new(1, "M")).await.unwrap();

        let ids: Vec<i32> = store
            .list_students()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2]);

        let mut s = store.get_student(StudentId(1)).await.unwrap().unwrap();
        s.classroom = Some(ClassroomId(9));
        store.update_student(s).await.unwrap();
        assert_eq!(
            store
                .get_student(StudentId(1))
                .await
                .unwrap()
                .unwrap()
                .classroom,
            Some(ClassroomId(9))
        );

        store.delete_student(StudentId(1)).await.unwrap();
        assert!(store.get_student(StudentId(1)).await.unwrap().is_none());
        assert_eq!(
            store.delete_student(StudentId(1)).await,
            Err(StoreError::StudentNotFound(StudentId(1)))
        );
    }

    #[tokio::test]
    async fn test_add_students_all_or_nothing() {
        let store = MemoryStore::with_data(vec![], vec![Student::new(1, "M")]);
        let result = store
            .add_students(vec![Student::new(2, "F"), Student::new(1, "M")])
            .await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert!(store.get_student(StudentId(2)).await.unwrap().is_none());

        let result = store
            .add_students(vec![Student::new(3, "F"), Student::new(3, "F")])
            .await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_students_unknown_id() {
        let store = MemoryStore::with_data(vec![], vec![Student::new(1, "M")]);
        let mut known = Student::new(1, "M");
        known.classroom = Some(ClassroomId(4));

        let result = store
            .update_students(&[known, Student::new(2, "F")])
            .await;
        assert_eq!(result, Err(StoreError::StudentNotFound(StudentId(2))));
        // Nothing applied.
        let s = store.get_student(StudentId(1)).await.unwrap().unwrap();
        assert_eq!(s.classroom, None);
    }

    #[tokio::test]
    async fn test_fail_writes() {
        let store = MemoryStore::with_data(vec![], vec![Student::new(1, "M")]);
        store.set_fail_writes(true);

        assert!(matches!(
            store.update_students(&[Student::new(1, "M")]).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.add_classroom(Classroom::new(1, "A")).await,
            Err(StoreError::Unavailable(_))
        ));
        // Reads still work.
        assert_eq!(store.list_students().await.unwrap().len(), 1);

        store.set_fail_writes(false);
        assert!(store.add_classroom(Classroom::new(1, "A")).await.is_ok());
    }
}
