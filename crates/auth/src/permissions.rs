use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// A named capability granted through a role.
///
/// The set is closed: the same enumeration is the storage shape of a role (one
/// boolean flag per variant) and the input of every access predicate. Adding a
/// capability means adding a variant here and bumping [`PermissionSet::VERSION`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    CanManageClubs,
    CanManageUsers,
    CanReadAllAthletes,
    CanWriteAllAthletes,
    CanReadOwnClubAthletes,
    CanWriteOwnClubAthletes,
    CanEnterScores,
    CanEnterScoresWhenDone,
    CanManageContent,
}

impl Permission {
    pub const ALL: [Permission; 9] = [
        Permission::CanManageClubs,
        Permission::CanManageUsers,
        Permission::CanReadAllAthletes,
        Permission::CanWriteAllAthletes,
        Permission::CanReadOwnClubAthletes,
        Permission::CanWriteOwnClubAthletes,
        Permission::CanEnterScores,
        Permission::CanEnterScoresWhenDone,
        Permission::CanManageContent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Permission::CanManageClubs => "canManageClubs",
            Permission::CanManageUsers => "canManageUsers",
            Permission::CanReadAllAthletes => "canReadAllAthletes",
            Permission::CanWriteAllAthletes => "canWriteAllAthletes",
            Permission::CanReadOwnClubAthletes => "canReadOwnClubAthletes",
            Permission::CanWriteOwnClubAthletes => "canWriteOwnClubAthletes",
            Permission::CanEnterScores => "canEnterScores",
            Permission::CanEnterScoresWhenDone => "canEnterScoresWhenDone",
            Permission::CanManageContent => "canManageContent",
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AuthError::UnknownPermission(s.to_string()))
    }
}

/// The permissions granted to a role.
///
/// Serializes as an object with one boolean flag per [`Permission`]. Missing
/// flags deserialize as `false`; unknown keys are rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct PermissionSet {
    bits: u16,
}

impl PermissionSet {
    /// Version of the permission vocabulary.
    pub const VERSION: u32 = 1;

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Permission::ALL.into_iter().collect()
    }

    /// Build a set from `(name, granted)` pairs, rejecting unknown names.
    pub fn from_flags<I, S>(flags: I) -> Result<Self, AuthError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for (name, granted) in flags {
            let permission: Permission = name.as_ref().parse()?;
            if granted {
                set.insert(permission);
            }
        }
        Ok(set)
    }

    pub fn with(mut self, permission: Permission) -> Self {
        self.insert(permission);
        self
    }

    pub fn insert(&mut self, permission: Permission) {
        self.bits |= permission.bit();
    }

    pub fn remove(&mut self, permission: Permission) {
        self.bits &= !permission.bit();
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.bits & permission.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Granted permissions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        Permission::ALL.into_iter().filter(|p| self.contains(*p))
    }

    /// Every permission paired with whether it is granted.
    pub fn flags(&self) -> impl Iterator<Item = (Permission, bool)> + '_ {
        Permission::ALL.into_iter().map(|p| (p, self.contains(p)))
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        let mut set = Self::empty();
        for p in iter {
            set.insert(p);
        }
        set
    }
}

impl TryFrom<BTreeMap<String, bool>> for PermissionSet {
    type Error = AuthError;

    fn try_from(value: BTreeMap<String, bool>) -> Result<Self, Self::Error> {
        Self::from_flags(value)
    }
}

impl From<PermissionSet> for BTreeMap<String, bool> {
    fn from(value: PermissionSet) -> Self {
        value
            .flags()
            .map(|(p, granted)| (p.as_str().to_string(), granted))
            .collect()
    }
}
