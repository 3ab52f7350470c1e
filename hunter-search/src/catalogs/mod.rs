//! Upstream catalog implementations.
//!
//! Each module provides a struct implementing one of the
//! [`crate::catalog`] traits against a public JSON search API.

pub mod iconify;
pub mod itunes;

pub use iconify::IconifyCatalog;
pub use itunes::ITunesCatalog;
