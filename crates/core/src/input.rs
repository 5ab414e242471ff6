//! Proposed writes.
//!
//! Every field is optional: `None` means "leave unchanged" on update and
//! "not provided" on create.

use serde::{Deserialize, Serialize};

use crate::{ClubId, Country, Gender, RoleId, TeamId, TeamType};

/// Proposed change to a to-one relationship.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationInput<Id> {
    Connect(Id),
    Disconnect,
}

impl<Id: Copy> RelationInput<Id> {
    /// Resolve the effective relation target.
    ///
    /// A proposed `Connect` wins, an explicit `Disconnect` clears the relation,
    /// and no proposal falls back to the existing target.
    pub fn resolve(proposed: Option<&RelationInput<Id>>, existing: Option<Id>) -> Option<Id> {
        match proposed {
            Some(RelationInput::Connect(id)) => Some(*id),
            Some(RelationInput::Disconnect) => None,
            None => existing,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubInput {
    pub club_name: Option<String>,
    pub club_number: Option<i64>,
    pub contact_email: Option<String>,
    pub address_name: Option<String>,
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<Country>,
    pub external: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInput {
    pub team_name: Option<String>,
    pub team_type: Option<TeamType>,
    pub club: Option<RelationInput<ClubId>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_year: Option<i32>,
    pub gender: Option<Gender>,
    pub disabled: Option<bool>,
    pub club: Option<RelationInput<ClubId>>,
    pub team: Option<RelationInput<TeamId>>,
}

/// Proposed user write. `password` is the cleartext as submitted; it is only
/// checked for presence and never stored by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<RelationInput<RoleId>>,
    pub club: Option<RelationInput<ClubId>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_proposed_connect() {
        let old = TeamId::new();
        let new = TeamId::new();
        let proposed = RelationInput::Connect(new);
        assert_eq!(RelationInput::resolve(Some(&proposed), Some(old)), Some(new));
    }

    #[test]
    fn resolve_disconnect_clears_existing() {
        let old = TeamId::new();
        let proposed: RelationInput<TeamId> = RelationInput::Disconnect;
        assert_eq!(RelationInput::resolve(Some(&proposed), Some(old)), None);
    }

    #[test]
    fn resolve_falls_back_to_existing() {
        let old = TeamId::new();
        assert_eq!(RelationInput::<TeamId>::resolve(None, Some(old)), Some(old));
        assert_eq!(RelationInput::<TeamId>::resolve(None, None), None);
    }
}
