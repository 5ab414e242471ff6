use serde::{Deserialize, Serialize};

use clubadmin_core::{ClubId, Collection, UserId};

use crate::{AuthError, Permission, PermissionSet};

/// The authenticated caller, supplied per request by the session provider.
///
/// Never created or mutated by the evaluator; an unauthenticated request is
/// represented as `Option<&Session>::None` rather than an empty session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Session {
    /// The caller's own identity record.
    pub item_id: UserId,
    /// Collection the identity record belongs to.
    pub list_key: String,
    pub data: SessionData,
}

/// Snapshot of the caller's identity record taken when the session was issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionData {
    pub name: String,
    #[serde(default)]
    pub club: Option<ClubRef>,
    #[serde(default)]
    pub role: Option<PermissionSet>,
}

/// Reference to the caller's home club.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClubRef {
    pub id: ClubId,
}

impl Session {
    /// A signed-in user without role or home club.
    pub fn new(item_id: UserId, name: impl Into<String>) -> Self {
        Self {
            item_id,
            list_key: Collection::User.list_key().to_string(),
            data: SessionData {
                name: name.into(),
                club: None,
                role: None,
            },
        }
    }

    pub fn with_role(mut self, role: PermissionSet) -> Self {
        self.data.role = Some(role);
        self
    }

    pub fn with_home_club(mut self, club_id: ClubId) -> Self {
        self.data.club = Some(ClubRef { id: club_id });
        self
    }

    /// Parse the session payload handed over by the session provider.
    pub fn from_json(payload: &str) -> Result<Self, AuthError> {
        serde_json::from_str(payload).map_err(|e| AuthError::MalformedSession(e.to_string()))
    }

    /// Permissions granted through the embedded role (empty without a role).
    pub fn permissions(&self) -> PermissionSet {
        self.data.role.unwrap_or_default()
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.permissions().contains(permission)
    }

    pub fn home_club_id(&self) -> Option<ClubId> {
        self.data.club.map(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_payload() {
        let user = UserId::new();
        let club = ClubId::new();
        let payload = format!(
            r#"{{
                "itemId": "{user}",
                "listKey": "User",
                "data": {{
                    "name": "Alice",
                    "club": {{ "id": "{club}" }},
                    "role": {{ "canManageClubs": false, "canManageUsers": true }}
                }}
            }}"#
        );
        let session = Session::from_json(&payload).unwrap();
        assert_eq!(session.item_id, user);
        assert_eq!(session.home_club_id(), Some(club));
        assert!(session.can(Permission::CanManageUsers));
        assert!(!session.can(Permission::CanManageClubs));
    }

    #[test]
    fn unknown_permission_in_payload_is_rejected() {
        let payload = format!(
            r#"{{"itemId":"{}","listKey":"User","data":{{"name":"x","role":{{"canDoAnything":true}}}}}}"#,
            UserId::new()
        );
        let err = Session::from_json(&payload).unwrap_err();
        assert!(matches!(err, AuthError::MalformedSession(msg) if msg.contains("canDoAnything")));
    }

    #[test]
    fn missing_role_grants_nothing() {
        let session = Session::new(UserId::new(), "Bob");
        assert!(session.permissions().is_empty());
        assert_eq!(session.home_club_id(), None);
        assert_eq!(session.list_key, "User");
    }
}
