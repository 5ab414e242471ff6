//! `clubadmin-core` — domain foundation for club administration.
//!
//! This crate contains **pure domain** types: identifiers, collections, records
//! and proposed writes. Storage and session handling live elsewhere.

pub mod collection;
pub mod entity;
pub mod error;
pub mod id;
pub mod input;
pub mod record;

pub use collection::{Collection, Operation};
pub use entity::Entity;
pub use error::DomainError;
pub use id::{AthleteId, ClubId, RoleId, TeamId, UserId};
pub use input::{AthleteInput, ClubInput, RelationInput, TeamInput, UserInput};
pub use record::{Athlete, Club, Country, Gender, Team, TeamType, User, team_type_matches_gender};
