//! Domain layer: entities, repository contracts and click processing.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Durable store contract
//! - [`click_event`] - Click counting event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. The resolver determines the URL for a short code
//! 2. A [`click_event::ClickEvent`] is pushed onto a bounded channel
//! 3. [`click_worker::run_click_worker`] increments the count with retries
//!
//! A lost click is acceptable; a slow redirect is not.

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
