//! In-memory adapters

pub mod webinar_repo;

pub use webinar_repo::InMemoryWebinarRepository;
