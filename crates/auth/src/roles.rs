use serde::{Deserialize, Serialize};

use clubadmin_core::{Collection, Entity, RoleId};

use crate::{Permission, PermissionSet};

/// Role record: a named permission set assigned to users.
///
/// The permission flags are stored inline next to the name, exactly in the
/// shape the session embeds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub permissions: PermissionSet,
}

impl Role {
    pub fn new(id: RoleId, name: impl Into<String>, permissions: PermissionSet) -> Self {
        Self {
            id,
            name: name.into(),
            permissions,
        }
    }

    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }
}

impl Entity for Role {
    type Id = RoleId;

    const COLLECTION: Collection = Collection::Role;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Proposed role write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInput {
    pub name: Option<String>,
    pub permissions: Option<PermissionSet>,
}
