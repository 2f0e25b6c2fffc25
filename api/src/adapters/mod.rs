//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod postgres;
pub mod store;
pub mod system;

pub use memory::InMemoryWebinarRepository;
pub use postgres::{run_migrations, PostgresWebinarRepository};
pub use store::WebinarStore;
pub use system::{SystemClock, UuidGenerator};
