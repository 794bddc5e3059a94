//! Classroom allocation.
//!
//! Spreads difficult students evenly across classrooms while keeping
//! male and female students in separate pools.
//!
//! # Pipeline
//!
//! filter locked → score → stable sort → partition by gender →
//! reversed round-robin per pool → concatenate (male, then female).
//!
//! The allocator does not balance class sizes exactly, ignores
//! classroom capacity, and never persists anything on its own; see
//! [`ClassroomAllocator::allocate_and_save`] for the store-backed entry.

mod distribute;
mod engine;
mod partition;

pub use distribute::{distribute_pool, RoundRobinCursor};
pub use engine::ClassroomAllocator;
pub use partition::GenderPools;
