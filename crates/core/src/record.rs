//! Collection records and their closed enumerations.
//!
//! Records are plain attribute bags owned by the store; this crate only reads
//! them to evaluate cross-entity invariants.

use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{AthleteId, ClubId, Collection, DomainError, Entity, RoleId, TeamId, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// Athlete gender.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

/// Team type. `Mixed` accepts athletes of any gender.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamType {
    Male,
    Female,
    Mixed,
}

impl TeamType {
    pub fn as_str(self) -> &'static str {
        match self {
            TeamType::Male => "MALE",
            TeamType::Female => "FEMALE",
            TeamType::Mixed => "MIXED",
        }
    }
}

/// Club country.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    #[default]
    At,
    De,
}

impl Country {
    pub fn as_str(self) -> &'static str {
        match self {
            Country::At => "AT",
            Country::De => "DE",
        }
    }
}

macro_rules! impl_tag_enum {
    ($t:ty, $kind:literal, [$($variant:expr),+ $(,)?]) => {
        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$($variant),+]
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| DomainError::invalid_value($kind, s))
            }
        }
    };
}

impl_tag_enum!(Gender, "gender", [Gender::Male, Gender::Female]);
impl_tag_enum!(TeamType, "teamType", [TeamType::Male, TeamType::Female, TeamType::Mixed]);
impl_tag_enum!(Country, "country", [Country::At, Country::De]);

/// Whether an athlete of `gender` may be a member of a team of `team_type`.
///
/// True iff the tags are equal or the team is `MIXED`.
pub fn team_type_matches_gender(team_type: TeamType, gender: Gender) -> bool {
    if team_type.as_str() == gender.as_str() {
        return true;
    }
    team_type == TeamType::Mixed
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub club_name: String,
    pub club_number: Option<i64>,
    pub contact_email: Option<String>,
    pub address_name: Option<String>,
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub country: Country,
    #[serde(default)]
    pub external: bool,
}

impl Club {
    pub fn new(id: ClubId, club_name: impl Into<String>) -> Self {
        Self {
            id,
            club_name: club_name.into(),
            club_number: None,
            contact_email: None,
            address_name: None,
            street: None,
            zip: None,
            city: None,
            country: Country::default(),
            external: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
    pub team_type: TeamType,
    pub club_id: Option<ClubId>,
}

impl Team {
    pub fn new(id: TeamId, team_name: impl Into<String>, team_type: TeamType) -> Self {
        Self {
            id,
            team_name: team_name.into(),
            team_type,
            club_id: None,
        }
    }

    pub fn in_club(mut self, club_id: ClubId) -> Self {
        self.club_id = Some(club_id);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: AthleteId,
    pub first_name: String,
    pub last_name: String,
    pub birth_year: i32,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub disabled: bool,
    pub club_id: Option<ClubId>,
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub version: u64,
    pub created_by: Option<String>,
    pub last_modified_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl Athlete {
    pub fn new(
        id: AthleteId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_year: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_year,
            gender: None,
            disabled: false,
            club_id: None,
            team_id: None,
            version: 0,
            created_by: None,
            last_modified_by: None,
            created_date: now,
            last_modified_date: now,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn on_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

/// User record. The password hash never enters this crate; only whether one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub has_password: bool,
    pub role_id: Option<RoleId>,
    pub club_id: Option<ClubId>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            has_password: true,
            role_id: None,
            club_id: None,
        }
    }
}

macro_rules! impl_entity {
    ($t:ty, $id:ty, $collection:expr) => {
        impl Entity for $t {
            type Id = $id;

            const COLLECTION: Collection = $collection;

            fn id(&self) -> &Self::Id {
                &self.id
            }
        }
    };
}

impl_entity!(Club, ClubId, Collection::Club);
impl_entity!(Team, TeamId, Collection::Team);
impl_entity!(Athlete, AthleteId, Collection::Athlete);
impl_entity!(User, UserId, Collection::User);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatibility_table() {
        assert!(team_type_matches_gender(TeamType::Male, Gender::Male));
        assert!(!team_type_matches_gender(TeamType::Male, Gender::Female));
        assert!(team_type_matches_gender(TeamType::Female, Gender::Female));
        assert!(!team_type_matches_gender(TeamType::Female, Gender::Male));
        assert!(team_type_matches_gender(TeamType::Mixed, Gender::Male));
        assert!(team_type_matches_gender(TeamType::Mixed, Gender::Female));
    }

    #[test]
    fn tags_parse_exactly() {
        assert_eq!("MIXED".parse::<TeamType>().unwrap(), TeamType::Mixed);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert!("Male".parse::<Gender>().is_err());
        assert!("MIXED".parse::<Gender>().is_err());
        assert!(" MALE".parse::<TeamType>().is_err());
    }

    #[test]
    fn tags_serialize_upper_case() {
        let json = serde_json::to_string(&TeamType::Female).unwrap();
        assert_eq!(json, "\"FEMALE\"");
        let gender: Gender = serde_json::from_str("\"MALE\"").unwrap();
        assert_eq!(gender, Gender::Male);
    }

    #[test]
    fn club_defaults_to_austria() {
        let club = Club::new(ClubId::new(), "test club");
        assert_eq!(club.country, Country::At);
        assert!(!club.external);
    }
}
