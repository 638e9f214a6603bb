//! Domain layer containing business entities and logic.
//!
//! Entities, repository contracts and the click-counting pipeline, independent
//! of HTTP and of any particular database.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click counting event model
//! - [`click_worker`] - Background worker applying click increments
//!
//! # Click Processing Flow
//!
//! 1. A visitor resolves a slug
//! 2. [`click_event::ClickEvent`] is sent to a bounded channel
//! 3. [`click_worker::run_click_worker`] applies the increment with retry
//! 4. The store performs an atomic `click_count + 1`

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
