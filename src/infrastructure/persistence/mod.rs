//! Repository implementations.
//!
//! Concrete implementations of domain repository traits. The PostgreSQL
//! repositories use SQLx's compile-time checked query macros; the in-memory
//! repository backs service tests, including degraded-store scenarios.
//!
//! # Repositories
//!
//! - [`PgRedirectRepository`] - Redirect storage, lookup and click counting
//! - [`PgTokenRepository`] - API token storage and validation
//! - [`InMemoryRedirectRepository`] - Process-local redirect storage with fault switches

pub mod memory_redirect_repository;
pub mod pg_redirect_repository;
pub mod pg_token_repository;

pub use memory_redirect_repository::InMemoryRedirectRepository;
pub use pg_redirect_repository::PgRedirectRepository;
pub use pg_token_repository::PgTokenRepository;
