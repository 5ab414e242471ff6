//! `clubadmin-auth` — pure access evaluation over a caller session.
//!
//! This crate is intentionally decoupled from transport and storage: the
//! session is handed in, decisions are returned as values.

pub mod authorize;
pub mod error;
pub mod fields;
pub mod permissions;
pub mod roles;
pub mod session;

pub use authorize::{
    AccessExplanation, AccessPolicy, ClubAdminPolicy, Decision, DecisionReason, RowFilter,
    can_manage_user, can_use_admin_ui, evaluate, explain, has_permission, is_signed_in,
};
pub use error::AuthError;
pub use fields::{FieldMode, FieldOperation, UserField};
pub use permissions::{Permission, PermissionSet};
pub use roles::{Role, RoleInput};
pub use session::{ClubRef, Session, SessionData};
