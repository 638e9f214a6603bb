//! Repository trait definitions for the domain layer.
//!
//! These traits are the only doorway to persistent state. Concrete
//! implementations live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`RedirectRepository`] - Redirect records, slug lookups, click counters
//! - [`TokenRepository`] - API token authentication
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`. See
//! `tests/repository_*.rs` for integration tests against PostgreSQL.

pub mod redirect_repository;
pub mod token_repository;

pub use redirect_repository::RedirectRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use redirect_repository::MockRedirectRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
