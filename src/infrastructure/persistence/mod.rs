//! PostgreSQL repository implementations.
//!
//! - [`PgMappingRepository`] - Mapping storage, lookup and click counting

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
