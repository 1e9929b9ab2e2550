//! Various unsorted geometrical and logical operators.

#[cfg(feature = "enhanced-determinism")]
mod fx_hasher;
pub mod hashmap;
pub mod hashset;
