//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod id_generator;
pub mod repositories;

pub use clock::Clock;
pub use id_generator::IdGenerator;
pub use repositories::WebinarRepository;
