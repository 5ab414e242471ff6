//! Test doubles for the store seam.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use clubadmin_core::{Athlete, Team, TeamId};

use crate::store::{GenderGroup, Store, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct FakeStore {
    teams: Vec<Team>,
    athletes: Vec<Athlete>,
    failing: bool,
    lookups: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    pub fn with_athlete(mut self, athlete: Athlete) -> Self {
        self.athletes.push(athlete);
        self
    }

    /// Every lookup fails as if the store were down.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn record(&self) -> StoreResult<()> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(StoreError::Unavailable("fake store is down".into()));
        }
        Ok(())
    }
}

impl Store for FakeStore {
    fn find_team(&self, id: &TeamId) -> StoreResult<Option<Team>> {
        self.record()?;
        Ok(self.teams.iter().find(|t| t.id == *id).cloned())
    }

    fn group_athlete_genders(&self, team_id: &TeamId) -> StoreResult<Vec<GenderGroup>> {
        self.record()?;
        let mut groups = BTreeMap::new();
        for athlete in self.athletes.iter().filter(|a| a.team_id == Some(*team_id)) {
            *groups.entry(athlete.gender).or_insert(0) += 1;
        }
        Ok(groups
            .into_iter()
            .map(|(gender, count)| GenderGroup { gender, count })
            .collect())
    }
}
