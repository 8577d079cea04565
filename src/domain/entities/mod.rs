//! Core domain entities.
//!
//! - [`Mapping`] - A short code bound to a long URL, with its click count

pub mod mapping;

pub use mapping::Mapping;
