//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod webinars;

pub use webinars::{change_seats, get_webinar, organize_webinar};
