//! Individual value generators used to build records.
//!
//! Every function takes the RNG explicitly so that generation stays deterministic
//! for a given seed.

pub mod numeric;
pub mod sample;
pub mod text;
pub mod timestamp;
