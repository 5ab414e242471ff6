use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use clubadmin_auth::Role;
use clubadmin_core::{Athlete, Club, Entity, Team, TeamId, User};
use clubadmin_validation::{GenderGroup, Store, StoreError, StoreResult};

/// One collection of records keyed by id.
#[derive(Debug)]
pub struct Table<R: Entity> {
    inner: RwLock<HashMap<R::Id, R>>,
}

impl<R: Entity> Default for Table<R> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<R> Table<R>
where
    R: Entity + Clone,
{
    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<R::Id, R>>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Storage(format!("{} table lock poisoned", R::COLLECTION)))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<R::Id, R>>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Storage(format!("{} table lock poisoned", R::COLLECTION)))
    }

    pub fn get(&self, id: &R::Id) -> StoreResult<Option<R>> {
        Ok(self.read()?.get(id).cloned())
    }

    /// Insert or replace by id; returns the previous record.
    pub fn upsert(&self, record: R) -> StoreResult<Option<R>> {
        let id = *record.id();
        Ok(self.write()?.insert(id, record))
    }

    pub fn remove(&self, id: &R::Id) -> StoreResult<Option<R>> {
        Ok(self.write()?.remove(id))
    }

    pub fn list(&self) -> StoreResult<Vec<R>> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Records matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&R) -> bool) -> StoreResult<Vec<R>> {
        Ok(self
            .read()?
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect())
    }

    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}

/// In-memory store for tests/dev.
///
/// Each table has its own lock; nothing spans tables, so a read in one table
/// may interleave with a write in another.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub clubs: Table<Club>,
    pub teams: Table<Team>,
    pub athletes: Table<Athlete>,
    pub users: Table<User>,
    pub roles: Table<Role>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemoryStore {
    fn find_team(&self, id: &TeamId) -> StoreResult<Option<Team>> {
        self.teams.get(id)
    }

    fn group_athlete_genders(&self, team_id: &TeamId) -> StoreResult<Vec<GenderGroup>> {
        let guard = self.athletes.read()?;
        let mut groups = BTreeMap::new();
        for athlete in guard.values().filter(|a| a.team_id == Some(*team_id)) {
            *groups.entry(athlete.gender).or_insert(0usize) += 1;
        }
        Ok(groups
            .into_iter()
            .map(|(gender, count)| GenderGroup { gender, count })
            .collect())
    }
}
