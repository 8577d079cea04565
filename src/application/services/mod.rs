//! Business logic services for the application layer.

pub mod registrar;
pub mod resolver;

pub use registrar::{DEFAULT_MAX_GENERATION_ATTEMPTS, Registrar};
pub use resolver::Resolver;
