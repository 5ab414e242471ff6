//! Collections (lists) and the operations requested against them.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A named set of records sharing a field schema.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Club,
    Team,
    Athlete,
    User,
    Role,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Club,
        Collection::Team,
        Collection::Athlete,
        Collection::User,
        Collection::Role,
    ];

    /// List key as used by the surrounding framework.
    pub fn list_key(self) -> &'static str {
        match self {
            Collection::Club => "Club",
            Collection::Team => "Team",
            Collection::Athlete => "Athlete",
            Collection::User => "User",
            Collection::Role => "Role",
        }
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.list_key())
    }
}

impl FromStr for Collection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.list_key() == s)
            .ok_or_else(|| DomainError::UnknownCollection(s.to_string()))
    }
}

/// Operation requested on a collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Query,
    Create,
    Update,
    Delete,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Operation::Query => "query",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keys_parse_back() {
        for c in Collection::ALL {
            assert_eq!(c.list_key().parse::<Collection>().unwrap(), c);
        }
    }

    #[test]
    fn list_keys_are_case_sensitive() {
        assert!("athlete".parse::<Collection>().is_err());
    }
}
