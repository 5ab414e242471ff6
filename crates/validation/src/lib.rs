//! `clubadmin-validation` — cross-entity validation of proposed writes and the
//! gate that runs access evaluation and validation before the store persists.

pub mod errors;
pub mod gate;
pub mod rules;
pub mod store;
pub mod validator;

#[cfg(test)]
mod testing;

pub use errors::{ValidationError, ValidationErrors};
pub use gate::{WriteGate, WriteRejection};
pub use rules::team_type_matches_gender;
pub use store::{GenderGroup, Store, StoreError, StoreResult};
pub use validator::{WriteInput, validate};
