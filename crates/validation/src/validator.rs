use uuid::Uuid;

use clubadmin_auth::{Role, RoleInput};
use clubadmin_core::{
    Athlete, AthleteInput, Club, ClubInput, Collection, Team, TeamInput, User, UserInput,
};

use crate::rules;
use crate::store::{Store, StoreResult};
use crate::ValidationErrors;

/// A proposed write: the collection-specific fields plus the record being
/// changed (`None` on create).
#[derive(Debug, Clone, Copy)]
pub enum WriteInput<'a> {
    Club {
        proposed: &'a ClubInput,
        existing: Option<&'a Club>,
    },
    Team {
        proposed: &'a TeamInput,
        existing: Option<&'a Team>,
    },
    Athlete {
        proposed: &'a AthleteInput,
        existing: Option<&'a Athlete>,
    },
    User {
        proposed: &'a UserInput,
        existing: Option<&'a User>,
    },
    Role {
        proposed: &'a RoleInput,
        existing: Option<&'a Role>,
    },
}

impl WriteInput<'_> {
    pub fn collection(&self) -> Collection {
        match self {
            WriteInput::Club { .. } => Collection::Club,
            WriteInput::Team { .. } => Collection::Team,
            WriteInput::Athlete { .. } => Collection::Athlete,
            WriteInput::User { .. } => Collection::User,
            WriteInput::Role { .. } => Collection::Role,
        }
    }

    /// Id of the record being updated; `None` on create.
    pub fn existing_id(&self) -> Option<Uuid> {
        match self {
            WriteInput::Club { existing, .. } => existing.map(|r| r.id.into()),
            WriteInput::Team { existing, .. } => existing.map(|r| r.id.into()),
            WriteInput::Athlete { existing, .. } => existing.map(|r| r.id.into()),
            WriteInput::User { existing, .. } => existing.map(|r| r.id.into()),
            WriteInput::Role { existing, .. } => existing.map(|r| r.id.into()),
        }
    }

    pub fn is_create(&self) -> bool {
        self.existing_id().is_none()
    }
}

/// Run every rule configured for the write's collection.
///
/// Returns the accumulated messages (empty when the write may proceed). Rules
/// do not stop at the first violation; only a store failure aborts the run.
pub fn validate(write: &WriteInput<'_>, store: &dyn Store) -> StoreResult<ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let creating = write.is_create();

    match *write {
        WriteInput::Club { proposed, .. } => {
            rules::require_text(
                &mut errors,
                Collection::Club,
                "clubName",
                proposed.club_name.as_deref(),
                creating,
            );
        }
        WriteInput::Team { proposed, existing } => {
            rules::require_text(
                &mut errors,
                Collection::Team,
                "teamName",
                proposed.team_name.as_deref(),
                creating,
            );
            rules::require_present(
                &mut errors,
                Collection::Team,
                "teamType",
                proposed.team_type.as_ref(),
                creating,
            );
            rules::team_type_matches_members(proposed, existing, store, &mut errors)?;
        }
        WriteInput::Athlete { proposed, existing } => {
            rules::require_text(
                &mut errors,
                Collection::Athlete,
                "firstName",
                proposed.first_name.as_deref(),
                creating,
            );
            rules::require_text(
                &mut errors,
                Collection::Athlete,
                "lastName",
                proposed.last_name.as_deref(),
                creating,
            );
            rules::require_present(
                &mut errors,
                Collection::Athlete,
                "birthYear",
                proposed.birth_year.as_ref(),
                creating,
            );
            rules::birth_year_in_range(&mut errors, proposed.birth_year);
            rules::athlete_gender_matches_team(proposed, existing, store, &mut errors)?;
        }
        WriteInput::User { proposed, .. } => {
            rules::require_text(
                &mut errors,
                Collection::User,
                "email",
                proposed.email.as_deref(),
                creating,
            );
            rules::require_text(
                &mut errors,
                Collection::User,
                "password",
                proposed.password.as_deref(),
                creating,
            );
        }
        WriteInput::Role { .. } => {}
    }

    if !errors.is_empty() {
        tracing::debug!(
            collection = %write.collection(),
            count = errors.len(),
            "write failed validation"
        );
    }
    Ok(errors)
}
