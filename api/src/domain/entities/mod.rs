//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod user;
pub mod webinar;

pub use user::{User, UserId};
pub use webinar::{Webinar, WebinarId};
