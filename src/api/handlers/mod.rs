//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirects;
pub mod resolve;
pub mod sitemap;

pub use health::health_handler;
pub use redirects::{
    create_redirect_handler, delete_redirect_handler, get_redirect_handler,
    list_redirects_handler, update_redirect_handler,
};
pub use resolve::{preview_handler, resolve_handler};
pub use sitemap::sitemap_handler;
