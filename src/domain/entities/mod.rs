//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Redirect`] - A slug pointing at a target URL, with SEO preview metadata
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs per use:
//! - [`RedirectFields`] - Owner-supplied fields for creation
//! - [`NewRedirect`] - Fully resolved record handed to the store
//! - [`RedirectPatch`] - Partial update

pub mod redirect;

pub use redirect::{NewRedirect, Redirect, RedirectFields, RedirectPatch, sort_newest_first};
