//! Business logic services for the application layer.

pub mod auth_service;
pub mod redirect_service;
pub mod slug_allocator;

pub use auth_service::{AuthService, hash_token};
pub use redirect_service::{RedirectService, build_public_url};
pub use slug_allocator::SlugAllocator;
