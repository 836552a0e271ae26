//! Domain layer: the entities persisted by the marketplace.

pub mod entities;
