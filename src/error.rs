//! Allocator error types.

use thiserror::Error;

use crate::models::{ClassroomId, StudentId};

/// Errors raised by a storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("classroom not found: {0}")]
    ClassroomNotFound(ClassroomId),

    #[error("duplicate id: {0}")]
    Conflict(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors that stop an allocation before distribution.
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("no classrooms exist")]
    NoClassrooms,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("weight `{name}` must be finite and positive, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type AllocationResult<T> = Result<T, AllocationError>;
