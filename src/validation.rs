//! Input validation for allocation requests.
//!
//! Checks structural integrity of students and classrooms. Detects:
//! - Duplicate IDs
//! - Missing names
//! - Locked students without a valid classroom
//!
//! All problems are collected; validation never stops at the first one.

use crate::models::{Classroom, ClassroomDirectory, Student};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A required name is empty.
    MissingName,
    /// A locked student has no classroom.
    LockedWithoutClassroom,
    /// A student references a classroom that doesn't exist.
    UnknownClassroom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates classrooms.
///
/// Checks:
/// 1. No duplicate classroom IDs
/// 2. Every classroom has a non-blank name
pub fn validate_classrooms(classrooms: &[Classroom]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for c in classrooms {
        if !ids.insert(c.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", c.id),
            ));
        }
        if c.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Classroom {} has no name", c.id),
            ));
        }
    }

    finish(errors)
}

/// Validates students against the known classrooms.
///
/// Checks:
/// 1. No duplicate student IDs
/// 2. First name and surname are non-blank
/// 3. Locked students have a classroom
/// 4. Assigned classrooms exist in `classrooms`
pub fn validate_students(
    students: &[Student],
    classrooms: &ClassroomDirectory,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for s in students {
        if !ids.insert(s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }

        if s.first_name.trim().is_empty() || s.surname.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Student {} is missing a first name or surname", s.id),
            ));
        }

        match s.classroom {
            None if s.locked_in_classroom => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LockedWithoutClassroom,
                    format!("Student {} is locked but has no classroom", s.id),
                ));
            }
            Some(id) if !classrooms.contains(id) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownClassroom,
                    format!("Student {} references unknown classroom {}", s.id, id),
                ));
            }
            _ => {}
        }
    }

    finish(errors)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassroomId;

    fn sample_classrooms() -> Vec<Classroom> {
        vec![Classroom::new(1, "1A"), Classroom::new(2, "1B")]
    }

    fn named(id: i32, gender: &str) -> Student {
        Student::new(id, gender).with_name("First", "Last")
    }

    #[test]
    fn test_valid_input() {
        let dir = ClassroomDirectory::new(sample_classrooms());
        let students = vec![named(1, "M"), named(2, "F").locked_in(ClassroomId(2))];
        assert!(validate_classrooms(dir.classrooms()).is_ok());
        assert!(validate_students(&students, &dir).is_ok());
    }

    #[test]
    fn test_duplicate_classroom_id() {
        let errors =
            validate_classrooms(&[Classroom::new(1, "A"), Classroom::new(1, "B")]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("classroom")));
    }

    #[test]
    fn test_blank_classroom_name() {
        let errors = validate_classrooms(&[Classroom::new(1, "  ")]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingName);
    }

    #[test]
    fn test_duplicate_student_id() {
        let dir = ClassroomDirectory::new(sample_classrooms());
        let errors = validate_students(&[named(1, "M"), named(1, "F")], &dir).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_missing_name() {
        let dir = ClassroomDirectory::new(sample_classrooms());
        let errors = validate_students(&[Student::new(1, "M")], &dir).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingName);
    }

    #[test]
    fn test_locked_without_classroom() {
        let dir = ClassroomDirectory::new(sample_classrooms());
        let mut s = named(1, "M");
        s.locked_in_classroom = true;
        let errors = validate_students(&[s], &dir).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::LockedWithoutClassroom);
    }

    #[test]
    fn test_unknown_classroom() {
        let dir = ClassroomDirectory::new(sample_classrooms());
        let s = named(1, "F").locked_in(ClassroomId(99));
        let errors = validate_students(&[s], &dir).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::UnknownClassroom);
        assert!(errors[0].to_string().contains("99"));
    }

    #[test]
    fn test_multiple_errors() {
        let dir = ClassroomDirectory::default();
        let errors = validate_students(
            &[
                Student::new(1, "M"),
                Student::new(1, "M").locked_in(ClassroomId(1)),
            ],
            &dir,
        )
        .unwrap_err();
        // missing name x2, duplicate id, unknown classroom
        assert_eq!(errors.len(), 4);
    }
}
