//! Field-level access and presentation modes for the User list.
//!
//! Rendering is the Admin UI's business; these are only the predicates it asks.

use serde::{Deserialize, Serialize};

use clubadmin_core::UserId;

use crate::authorize::{can_manage_user, has_permission};
use crate::{Permission, Session};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMode {
    Edit,
    Read,
    Hidden,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserField {
    Name,
    Email,
    Password,
    Role,
    Club,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOperation {
    Read,
    Create,
    Update,
}

/// Whether `session` may perform `operation` on `field` of the user `item`.
///
/// `item` is `None` for a user that does not exist yet.
pub fn user_field_access(
    session: Option<&Session>,
    field: UserField,
    operation: FieldOperation,
    item: Option<&UserId>,
) -> bool {
    match (field, operation) {
        (UserField::Email, FieldOperation::Read) => {
            item.is_some_and(|id| can_manage_user(session, id))
        }
        (UserField::Role, _) => has_permission(session, Permission::CanManageUsers),
        _ => true,
    }
}

fn manages_users(session: Option<&Session>) -> bool {
    has_permission(session, Permission::CanManageUsers)
}

fn edit_self_or(session: Option<&Session>, item: &UserId, otherwise: FieldMode) -> FieldMode {
    if can_manage_user(session, item) {
        FieldMode::Edit
    } else {
        otherwise
    }
}

/// Mode of `field` on the item view of user `item`.
pub fn user_item_field_mode(session: Option<&Session>, field: UserField, item: &UserId) -> FieldMode {
    match field {
        UserField::Name => edit_self_or(session, item, FieldMode::Read),
        UserField::Email | UserField::Password => edit_self_or(session, item, FieldMode::Hidden),
        UserField::Role | UserField::Club => user_item_default_mode(session),
    }
}

/// Default item-view mode for fields without their own rule.
pub fn user_item_default_mode(session: Option<&Session>) -> FieldMode {
    if manages_users(session) {
        FieldMode::Edit
    } else {
        FieldMode::Hidden
    }
}

/// Default list-view column mode.
pub fn user_list_field_mode(session: Option<&Session>) -> FieldMode {
    if manages_users(session) {
        FieldMode::Read
    } else {
        FieldMode::Hidden
    }
}

pub fn hide_user_create(session: Option<&Session>) -> bool {
    !manages_users(session)
}

pub fn hide_user_delete(session: Option<&Session>) -> bool {
    !manages_users(session)
}
