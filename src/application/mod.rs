//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::slug_allocator::SlugAllocator`] - Collision-free slug allocation
//! - [`services::redirect_service::RedirectService`] - Redirect CRUD and slug resolution
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
