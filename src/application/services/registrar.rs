//! Mapping creation and lookup service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved, validate_requested_code};
use crate::utils::url_normalizer::normalize_url;

/// Default bound on generated candidates per registration.
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for registering new mappings.
///
/// Normalizes and validates the long URL, settles the short code (requested or
/// generated) and persists the mapping. Registration never touches the cache.
pub struct Registrar {
    repository: Arc<dyn MappingRepository>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl Registrar {
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Registers `raw_url` under `requested_code`, or under a generated code.
    ///
    /// An empty requested code is treated as absent.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the normalized URL is not absolute with a host
    /// - [`AppError::Validation`] if the requested code is too long or has
    ///   characters outside `[0-9A-Za-z_-]`
    /// - [`AppError::CodeUnavailable`] if the requested code is reserved, taken, or
    ///   loses an insert race
    /// - [`AppError::GenerationExhausted`] if no unused code is found in time
    /// - [`AppError::StoreWriteFailed`] if the insert fails for any other reason
    /// - [`AppError::TransientAdapterFailure`] if an existence check fails
    pub async fn register(
        &self,
        requested_code: Option<String>,
        raw_url: &str,
    ) -> Result<Mapping, AppError> {
        let long_url = normalize_url(raw_url).map_err(|e| {
            debug!(url = raw_url, reason = %e, "Rejected long URL");
            AppError::InvalidUrl
        })?;

        let code = match requested_code.filter(|c| !c.is_empty()) {
            Some(code) => self.claim_requested(code).await?,
            None => self.generate_unique_code().await?,
        };

        let mapping = self
            .repository
            .insert(&code, &long_url)
            .await
            .map_err(|e| match e {
                StoreError::Conflict => {
                    warn!(code = %code, "Short code taken between check and insert");
                    AppError::CodeUnavailable
                }
                StoreError::Unavailable(cause) | StoreError::Backend(cause) => {
                    AppError::StoreWriteFailed(cause)
                }
            })?;

        info!(code = %mapping.short_code, "Mapping created");
        Ok(mapping)
    }

    /// Retrieves a mapping with its current click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    pub async fn get_mapping(&self, code: &str) -> Result<Mapping, AppError> {
        self.repository
            .lookup(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn claim_requested(&self, code: String) -> Result<String, AppError> {
        validate_requested_code(&code)?;

        if is_reserved(&code) || self.repository.exists(&code).await? {
            return Err(AppError::CodeUnavailable);
        }

        Ok(code)
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();

            if is_reserved(&candidate) {
                continue;
            }

            if !self.repository.exists(&candidate).await? {
                return Ok(candidate);
            }

            debug!(attempt, candidate = %candidate, "Generated code already in use");
        }

        Err(AppError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}
