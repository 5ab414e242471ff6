//! Read-only view of the external store used by validation rules.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use clubadmin_core::{Gender, Team, TeamId};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure, propagated to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One bucket of a group-by over athlete genders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct GenderGroup {
    /// `None` groups athletes without a gender.
    pub gender: Option<Gender>,
    pub count: usize,
}

/// Lookups the validation rules need.
///
/// A record that does not exist is `Ok(None)`, never an error.
pub trait Store: Send + Sync {
    /// Fetch one team by id.
    fn find_team(&self, id: &TeamId) -> StoreResult<Option<Team>>;

    /// Distinct genders among athletes currently on the team, ordered by gender
    /// (`None` first).
    fn group_athlete_genders(&self, team_id: &TeamId) -> StoreResult<Vec<GenderGroup>>;
}

impl<S> Store for Arc<S>
where
    S: Store + ?Sized,
{
    fn find_team(&self, id: &TeamId) -> StoreResult<Option<Team>> {
        (**self).find_team(id)
    }

    fn group_athlete_genders(&self, team_id: &TeamId) -> StoreResult<Vec<GenderGroup>> {
        (**self).group_athlete_genders(team_id)
    }
}
