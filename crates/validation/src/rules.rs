//! Validation rules. Each rule appends to the error list and never
//! short-circuits the others; only store failures abort.

use std::ops::RangeInclusive;

use clubadmin_core::{
    Athlete, AthleteInput, Collection, Gender, RelationInput, Team, TeamInput, TeamType,
};

use crate::store::{Store, StoreResult};
use crate::ValidationErrors;

pub use clubadmin_core::team_type_matches_gender;

pub const BIRTH_YEAR_RANGE: RangeInclusive<i32> = 1900..=2050;

/// An athlete's gender must be compatible with the type of the team it is on.
///
/// Runs when both the resolved gender and the resolved team are known. A team
/// that cannot be found makes the rule inapplicable.
pub fn athlete_gender_matches_team(
    proposed: &AthleteInput,
    existing: Option<&Athlete>,
    store: &dyn Store,
    errors: &mut ValidationErrors,
) -> StoreResult<()> {
    let gender = proposed.gender.or(existing.and_then(|a| a.gender));
    let team_id = RelationInput::resolve(proposed.team.as_ref(), existing.and_then(|a| a.team_id));
    let (Some(gender), Some(team_id)) = (gender, team_id) else {
        return Ok(());
    };

    let Some(team) = store.find_team(&team_id)? else {
        tracing::debug!(%team_id, "team not found, skipping gender check");
        return Ok(());
    };
    tracing::debug!(%team_id, team_type = %team.team_type, %gender, "checking athlete gender against team");

    if !team_type_matches_gender(team.team_type, gender) {
        errors.add_validation_error(
            Collection::Athlete,
            Some("gender"),
            format!(
                "The gender for athlete ({gender}) does not match to the teamType {} of team {}",
                team.team_type, team.team_name
            ),
        );
    }
    Ok(())
}

/// A team's type must stay compatible with every athlete already on the team.
///
/// Only applies to existing teams. Members without a gender only fit a MIXED
/// team. The first conflicting group in gender order is reported.
pub fn team_type_matches_members(
    proposed: &TeamInput,
    existing: Option<&Team>,
    store: &dyn Store,
    errors: &mut ValidationErrors,
) -> StoreResult<()> {
    let Some(existing) = existing else {
        return Ok(());
    };
    let team_type = proposed.team_type.unwrap_or(existing.team_type);

    let groups = store.group_athlete_genders(&existing.id)?;
    tracing::debug!(team_id = %existing.id, groups = groups.len(), "got team member genders");

    let mismatch = groups.iter().find(|g| match g.gender {
        Some(gender) => !team_type_matches_gender(team_type, gender),
        None => team_type != TeamType::Mixed,
    });

    if let Some(group) = mismatch {
        let gender = group.gender.map_or("null", Gender::as_str);
        errors.add_validation_error(
            Collection::Team,
            Some("teamType"),
            format!("There are athletes in the team with a non-matching gender {gender} for teamType {team_type}"),
        );
    }
    Ok(())
}

/// Required text: must be provided on create and must never be blank.
pub fn require_text(
    errors: &mut ValidationErrors,
    collection: Collection,
    field: &'static str,
    value: Option<&str>,
    creating: bool,
) {
    let missing = match value {
        Some(v) => v.trim().is_empty(),
        None => creating,
    };
    if missing {
        errors.add_validation_error(collection, Some(field), format!("{field} is required"));
    }
}

/// Required non-text value: must be provided on create.
pub fn require_present<T>(
    errors: &mut ValidationErrors,
    collection: Collection,
    field: &'static str,
    value: Option<&T>,
    creating: bool,
) {
    if creating && value.is_none() {
        errors.add_validation_error(collection, Some(field), format!("{field} is required"));
    }
}

pub fn birth_year_in_range(errors: &mut ValidationErrors, value: Option<i32>) {
    let Some(year) = value else {
        return;
    };
    if year < *BIRTH_YEAR_RANGE.start() {
        errors.add_validation_error(
            Collection::Athlete,
            Some("birthYear"),
            format!("birthYear must be greater than or equal to {}", BIRTH_YEAR_RANGE.start()),
        );
    } else if year > *BIRTH_YEAR_RANGE.end() {
        errors.add_validation_error(
            Collection::Athlete,
            Some("birthYear"),
            format!("birthYear must be less than or equal to {}", BIRTH_YEAR_RANGE.end()),
        );
    }
}
