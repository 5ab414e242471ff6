use serde::Serialize;
use uuid::Uuid;

use clubadmin_core::{ClubId, Collection, Operation, UserId};

use crate::{Permission, PermissionSet, Session};

/// Row-level restriction attached to a filtered allow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFilter {
    /// Only the row whose id equals the value is visible/writable.
    IdEquals(Uuid),
}

impl RowFilter {
    pub fn id_equals(id: impl Into<Uuid>) -> Self {
        Self::IdEquals(id.into())
    }

    pub fn matches(&self, id: impl Into<Uuid>) -> bool {
        match self {
            RowFilter::IdEquals(expected) => *expected == id.into(),
        }
    }
}

/// Outcome of an access check.
///
/// `Deny` and `AllowFiltered` are not errors: the caller turns `Deny` into a
/// rejected request and applies the filter to its query or mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "filter", rename_all = "snake_case")]
pub enum Decision {
    Allow,
    Deny,
    AllowFiltered(RowFilter),
}

impl Decision {
    /// Whether the operation may proceed at all (possibly restricted).
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Decision::Deny)
    }

    /// Whether the row with `id` is reachable under this decision.
    pub fn permits_row(&self, id: impl Into<Uuid>) -> bool {
        match self {
            Decision::Allow => true,
            Decision::Deny => false,
            Decision::AllowFiltered(filter) => filter.matches(id),
        }
    }
}

/// Why a rule produced its decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionReason {
    /// No session was supplied.
    NotSignedIn,
    /// The caller holds the permission that grants unrestricted access.
    Granted { permission: Permission },
    /// The caller lacks the permission and no narrower rule applies.
    Missing { permission: Permission },
    /// Restricted to the caller's home club.
    HomeClub { club_id: ClubId },
    /// The caller has no home club to fall back to.
    NoHomeClub,
    /// Restricted to the caller's own identity record.
    OwnRecord { user_id: UserId },
    /// Anyone may create a user (self-registration).
    SelfRegistration,
    /// The collection defines no rule for this operation.
    Unrestricted,
}

impl core::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecisionReason::NotSignedIn => f.write_str("no session: caller is not signed in"),
            DecisionReason::Granted { permission } => {
                write!(f, "caller holds '{permission}'")
            }
            DecisionReason::Missing { permission } => {
                write!(f, "caller lacks '{permission}'")
            }
            DecisionReason::HomeClub { club_id } => {
                write!(f, "restricted to the caller's home club {club_id}")
            }
            DecisionReason::NoHomeClub => {
                f.write_str("caller lacks 'canManageClubs' and has no home club")
            }
            DecisionReason::OwnRecord { user_id } => {
                write!(f, "restricted to the caller's own record {user_id}")
            }
            DecisionReason::SelfRegistration => f.write_str("user creation is open for self-registration"),
            DecisionReason::Unrestricted => f.write_str("no access rule for this operation"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Predicates
// ─────────────────────────────────────────────────────────────────────────────

/// True iff a session is present.
pub fn is_signed_in(session: Option<&Session>) -> bool {
    session.is_some()
}

/// Permission check that is `false` for an absent session or role.
pub fn has_permission(session: Option<&Session>, permission: Permission) -> bool {
    session.is_some_and(|s| s.can(permission))
}

/// The Admin UI is reserved for sessions that carry a role.
pub fn can_use_admin_ui(session: Option<&Session>) -> bool {
    session.is_some_and(|s| s.data.role.is_some())
}

/// Item-level user management: user managers, or the user themselves.
pub fn can_manage_user(session: Option<&Session>, user_id: &UserId) -> bool {
    if has_permission(session, Permission::CanManageUsers) {
        return true;
    }
    session.is_some_and(|s| s.item_id == *user_id)
}

// ─────────────────────────────────────────────────────────────────────────────
// List rules
// ─────────────────────────────────────────────────────────────────────────────

/// Club query/update/delete: club managers see everything, everyone else only
/// their home club taken from the session's embedded `club.id`.
pub fn club_list_rule(session: Option<&Session>) -> (Decision, DecisionReason) {
    let Some(session) = session else {
        return (Decision::Deny, DecisionReason::NotSignedIn);
    };
    if session.can(Permission::CanManageClubs) {
        return (
            Decision::Allow,
            DecisionReason::Granted {
                permission: Permission::CanManageClubs,
            },
        );
    }
    match session.home_club_id() {
        Some(club_id) => (
            Decision::AllowFiltered(RowFilter::id_equals(club_id)),
            DecisionReason::HomeClub { club_id },
        ),
        None => (Decision::Deny, DecisionReason::NoHomeClub),
    }
}

/// User query/update/delete: user managers see everything, a signed-in caller
/// only their own record.
pub fn user_list_rule(session: Option<&Session>) -> (Decision, DecisionReason) {
    let Some(session) = session else {
        return (Decision::Deny, DecisionReason::NotSignedIn);
    };
    if session.can(Permission::CanManageUsers) {
        return (
            Decision::Allow,
            DecisionReason::Granted {
                permission: Permission::CanManageUsers,
            },
        );
    }
    (
        Decision::AllowFiltered(RowFilter::id_equals(session.item_id)),
        DecisionReason::OwnRecord {
            user_id: session.item_id,
        },
    )
}

/// Roles are managed by user managers only.
pub fn role_list_rule(session: Option<&Session>) -> (Decision, DecisionReason) {
    permission_rule(session, Permission::CanManageUsers)
}

fn permission_rule(session: Option<&Session>, permission: Permission) -> (Decision, DecisionReason) {
    match session {
        None => (Decision::Deny, DecisionReason::NotSignedIn),
        Some(s) if s.can(permission) => (Decision::Allow, DecisionReason::Granted { permission }),
        Some(_) => (Decision::Deny, DecisionReason::Missing { permission }),
    }
}

/// Evaluate the policy table and keep the reason alongside the decision.
pub fn decide(
    session: Option<&Session>,
    collection: Collection,
    operation: Operation,
) -> (Decision, DecisionReason) {
    let outcome = match (collection, operation) {
        (Collection::Club, Operation::Query | Operation::Update | Operation::Delete) => {
            club_list_rule(session)
        }
        (Collection::User, Operation::Create) => (Decision::Allow, DecisionReason::SelfRegistration),
        (Collection::User, _) => user_list_rule(session),
        (Collection::Role, _) => role_list_rule(session),
        (Collection::Club, Operation::Create) | (Collection::Team, _) | (Collection::Athlete, _) => {
            (Decision::Allow, DecisionReason::Unrestricted)
        }
    };

    tracing::debug!(
        collection = %collection,
        operation = %operation,
        decision = ?outcome.0,
        reason = %outcome.1,
        "access evaluated"
    );

    outcome
}

/// Decide whether `operation` on `collection` may proceed for `session`.
///
/// - No IO
/// - No panics; an absent session only ever yields `Deny` (or the
///   unconditional allows of the policy table)
pub fn evaluate(session: Option<&Session>, collection: Collection, operation: Operation) -> Decision {
    decide(session, collection, operation).0
}

/// Access policy seam used by the write gate.
pub trait AccessPolicy: Send + Sync {
    fn evaluate(&self, session: Option<&Session>, collection: Collection, operation: Operation) -> Decision;
}

/// The club administration policy table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClubAdminPolicy;

impl AccessPolicy for ClubAdminPolicy {
    fn evaluate(&self, session: Option<&Session>, collection: Collection, operation: Operation) -> Decision {
        evaluate(session, collection, operation)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Access Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of an access decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    pub collection: Collection,
    pub operation: Operation,
    pub decision: Decision,
    pub reason: DecisionReason,
    /// Human-readable form of `reason`.
    pub message: String,
    /// `None` when no session was supplied.
    pub session: Option<SessionState>,
}

/// Current state of the session being checked.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub item_id: UserId,
    pub list_key: String,
    pub home_club_id: Option<ClubId>,
    pub has_role: bool,
    pub granted_permissions: Vec<&'static str>,
    pub permission_version: u32,
}

impl SessionState {
    fn of(session: &Session) -> Self {
        Self {
            item_id: session.item_id,
            list_key: session.list_key.clone(),
            home_club_id: session.home_club_id(),
            has_role: session.data.role.is_some(),
            granted_permissions: session.permissions().iter().map(Permission::as_str).collect(),
            permission_version: PermissionSet::VERSION,
        }
    }
}

/// Explain why an access decision was made (or would be made).
pub fn explain(session: Option<&Session>, collection: Collection, operation: Operation) -> AccessExplanation {
    let (decision, reason) = decide(session, collection, operation);
    AccessExplanation {
        collection,
        operation,
        decision,
        reason,
        message: reason.to_string(),
        session: session.map(SessionState::of),
    }
}
