//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored alias → destination URL mapping

pub mod url_mapping;

pub use url_mapping::UrlMapping;
