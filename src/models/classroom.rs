//! Classroom model.
//!
//! Classrooms are the targets of allocation. Their order is significant:
//! round-robin distribution walks them in list order.
//!
//! Students refer to a classroom by [`ClassroomId`] only; details are
//! resolved through a [`ClassroomDirectory`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique classroom identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassroomId(pub i32);

impl fmt::Display for ClassroomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A classroom that students can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: ClassroomId,
    /// Display name.
    pub name: String,
}

impl Classroom {
    /// Creates a classroom.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: ClassroomId(id),
            name: name.into(),
        }
    }
}

/// Ordered classroom list with id lookup.
///
/// Keeps the order the store returned, which is the round-robin order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Classroom>", into = "Vec<Classroom>")]
pub struct ClassroomDirectory {
    classrooms: Vec<Classroom>,
    index: HashMap<ClassroomId, usize>,
}

impl ClassroomDirectory {
    /// Builds a directory. On duplicate ids the first occurrence wins
    /// for lookups; the list itself is kept as given.
    pub fn new(classrooms: Vec<Classroom>) -> Self {
        let mut index = HashMap::with_capacity(classrooms.len());
        for (i, c) in classrooms.iter().enumerate() {
            index.entry(c.id).or_insert(i);
        }
        Self { classrooms, index }
    }

    /// Classrooms in round-robin order.
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// Classroom at a round-robin position.
    pub fn at(&self, position: usize) -> Option<&Classroom> {
        self.classrooms.get(position)
    }

    /// Looks up a classroom by id.
    pub fn get(&self, id: ClassroomId) -> Option<&Classroom> {
        self.index.get(&id).map(|&i| &self.classrooms[i])
    }

    /// Whether the id is present.
    pub fn contains(&self, id: ClassroomId) -> bool {
        self.index.contains_key(&id)
    }

    /// Display name for an id.
    pub fn name_of(&self, id: ClassroomId) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.classrooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty()
    }
}

impl From<Vec<Classroom>> for ClassroomDirectory {
    fn from(classrooms: Vec<Classroom>) -> Self {
        Self::new(classrooms)
    }
}

impl From<ClassroomDirectory> for Vec<Classroom> {
    fn from(dir: ClassroomDirectory) -> Self {
        dir.classrooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_keeps_order() {
        let dir = ClassroomDirectory::new(vec![
            Classroom::new(20, "B"),
            Classroom::new(10, "A"),
        ]);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.at(0).unwrap().name, "B");
        assert_eq!(dir.at(1).unwrap().name, "A");
        assert!(dir.at(2).is_none());
    }

    #[test]
    fn test_directory_lookup() {
        let dir = ClassroomDirectory::from(vec![Classroom::new(1, "Room 1")]);
        assert!(dir.contains(ClassroomId(1)));
        assert!(!dir.contains(ClassroomId(2)));
        assert_eq!(dir.name_of(ClassroomId(1)), Some("Room 1"));
        assert_eq!(dir.name_of(ClassroomId(2)), None);
    }

    #[test]
    fn test_directory_duplicate_first_wins() {
        let dir = ClassroomDirectory::new(vec![
            Classroom::new(1, "first"),
            Classroom::new(1, "second"),
        ]);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.name_of(ClassroomId(1)), Some("first"));
    }

    #[test]
    fn test_empty_directory() {
        let dir = ClassroomDirectory::default();
        assert!(dir.is_empty());
        assert!(dir.get(ClassroomId(0)).is_none());
    }

    #[test]
    fn test_directory_serializes_as_list() {
        let dir = ClassroomDirectory::new(vec![Classroom::new(1, "A")]);
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json[0]["name"], "A");
        let back: ClassroomDirectory = serde_json::from_value(json).unwrap();
        assert_eq!(back.name_of(ClassroomId(1)), Some("A"));
    }
}
