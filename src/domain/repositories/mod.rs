//! Repository trait definitions for the domain layer.
//!
//! The durable store is reached only through [`MappingRepository`]. The
//! PostgreSQL implementation lives in `crate::infrastructure::persistence`;
//! tests use `mockall` mocks or the in-memory fakes under `tests/common`.

pub mod mapping_repository;

pub use mapping_repository::{MappingRepository, StoreError, StoreResult};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
