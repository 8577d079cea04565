//! Application layer services implementing business logic.
//!
//! Services consume the store and cache traits and give HTTP handlers and the
//! admin CLI a small API.
//!
//! # Available Services
//!
//! - [`services::registrar::Registrar`] - Mapping creation with collision-free short codes
//! - [`services::resolver::Resolver`] - Cache-first resolution with backfill and click counting

pub mod services;
