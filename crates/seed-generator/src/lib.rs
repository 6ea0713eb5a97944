//! Record generator for the delivery-seed pipeline.
//!
//! This crate provides the `DataGenerator` which produces plausible food-delivery
//! records (users, restaurants, menu items, orders, reviews). The generator uses a
//! seeded RNG so that the same seed and inputs produce the same records.
//!
//! # Architecture
//!
//! ```text
//!   seed: u64
//!       │
//!       ▼
//! ┌──────────────────┐
//! │  DataGenerator   │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - issued emails │
//! └────────┬─────────┘
//!          │  foreign keys supplied by the caller
//!          ▼
//!   User / Restaurant / MenuItem / Order / Review
//! ```
//!
//! The generator never talks to storage. Identifiers of earlier records are passed
//! in by the caller, which is how referential integrity is threaded through the
//! pipeline.
//!
//! # Example
//!
//! ```rust
//! use seed_generator::DataGenerator;
//!
//! let mut generator = DataGenerator::new(42);
//! let restaurant = generator.restaurant();
//! assert!((1..=3).contains(&restaurant.categories.len()));
//! ```

pub mod catalog;
pub mod generator;
pub mod generators;
pub mod records;

// Re-exports for convenience
pub use catalog::{MenuCatalog, PricedItem};
pub use generator::{DataGenerator, GeneratorError, MAX_LINE_ITEMS, MAX_QUANTITY};
pub use records::{
    Location, MenuItem, Order, OrderLine, OrderStatus, OrderSummary, Restaurant, Review, User,
    CATEGORIES,
};
