//! Development store backing the validation seam.

pub mod in_memory;

pub use in_memory::{InMemoryStore, Table};
