//! HTTP request handlers for API endpoints.
//!
//! Each handler extracts only the store capability it needs from the state.

pub mod delete;
pub mod redirect;
pub mod save;

pub use delete::{delete_handler, missing_alias_handler};
pub use redirect::redirect_handler;
pub use save::save_handler;
