//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{Registrar, Resolver};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::CodeGenerator;

/// Adapters and services built once at startup.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub registrar: Arc<Registrar>,
    pub resolver: Arc<Resolver>,
    pub repository: Arc<dyn MappingRepository>,
    pub cache: Arc<dyn CacheService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    /// Wires the services around the given adapters.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        cache: Arc<dyn CacheService>,
        generator: Arc<dyn CodeGenerator>,
        click_sender: mpsc::Sender<ClickEvent>,
        max_generation_attempts: usize,
    ) -> Self {
        let registrar = Arc::new(Registrar::new(
            repository.clone(),
            generator,
            max_generation_attempts,
        ));
        let resolver = Arc::new(Resolver::new(
            repository.clone(),
            cache.clone(),
            click_sender.clone(),
        ));

        Self {
            registrar,
            resolver,
            repository,
            cache,
            click_sender,
        }
    }
}
