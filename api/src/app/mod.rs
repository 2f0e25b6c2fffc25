//! Application layer
//!
//! Contains the webinar use cases.
//! Use cases coordinate between domain entities and ports; they are the only
//! place business rules are enforced.

pub mod change_seats;
pub mod organize_webinar;
pub mod webinar_policy;

pub use change_seats::{ChangeSeats, ChangeSeatsCommand};
pub use organize_webinar::{OrganizeWebinar, OrganizeWebinarCommand, OrganizeWebinarResult};
