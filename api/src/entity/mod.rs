//! SeaORM entities
//!
//! Database models mirroring the `migrations/` schema. Domain code never sees
//! these types; adapters convert to and from `domain::entities`.

pub mod webinars;
