//! Common types for delivery-seed populators.
//!
//! This crate provides the argument group shared by every storage backend: how
//! many records of each kind to generate, how to batch them, and where the
//! intermediate artifacts live.

pub mod args;

pub use args::CommonSeedArgs;
