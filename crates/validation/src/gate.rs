//! Write gate: access evaluation followed by field validation.
//!
//! The gate never persists anything. A write that passes may be committed by
//! the store; nothing ties the reads done here to that commit.

use thiserror::Error;
use uuid::Uuid;

use clubadmin_auth::fields::user_field_access;
use clubadmin_auth::{AccessPolicy, ClubAdminPolicy, Decision, FieldOperation, Session, UserField};
use clubadmin_core::{Collection, Operation};

use crate::store::{Store, StoreError};
use crate::validator::{WriteInput, validate};
use crate::ValidationErrors;

/// Why a write was not allowed to reach the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WriteRejection {
    #[error("forbidden: {operation} on {collection}")]
    Forbidden {
        collection: Collection,
        operation: Operation,
    },

    #[error("forbidden: {collection}.{field} may not be written by this caller")]
    FieldForbidden {
        collection: Collection,
        field: &'static str,
    },

    #[error("{0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Runs the access policy and the validator for one request at a time.
///
/// Holds no per-request state, so one gate can serve concurrent requests.
#[derive(Debug, Default, Clone)]
pub struct WriteGate<P = ClubAdminPolicy> {
    policy: P,
}

impl WriteGate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: AccessPolicy> WriteGate<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Decision the caller applies to reads of `collection`.
    pub fn read_decision(&self, session: Option<&Session>, collection: Collection) -> Decision {
        self.policy.evaluate(session, collection, Operation::Query)
    }

    /// Check a create (no existing record) or update.
    pub fn check_write(
        &self,
        session: Option<&Session>,
        write: &WriteInput<'_>,
        store: &dyn Store,
    ) -> Result<(), WriteRejection> {
        let collection = write.collection();
        let operation = if write.is_create() {
            Operation::Create
        } else {
            Operation::Update
        };

        let decision = self.policy.evaluate(session, collection, operation);
        ensure_row_permitted(decision, collection, operation, write.existing_id())?;
        ensure_fields_writable(session, write, operation)?;

        let errors = validate(write, store)?;
        if errors.is_empty() {
            Ok(())
        } else {
            Err(WriteRejection::Invalid(errors))
        }
    }

    /// Check a delete. Deletes carry no field values, so only access applies.
    pub fn check_delete(
        &self,
        session: Option<&Session>,
        collection: Collection,
        id: impl Into<Uuid>,
    ) -> Result<(), WriteRejection> {
        let decision = self.policy.evaluate(session, collection, Operation::Delete);
        ensure_row_permitted(decision, collection, Operation::Delete, Some(id.into()))
    }
}

fn ensure_row_permitted(
    decision: Decision,
    collection: Collection,
    operation: Operation,
    row: Option<Uuid>,
) -> Result<(), WriteRejection> {
    let permitted = match (decision, row) {
        (Decision::Allow, _) => true,
        (Decision::Deny, _) => false,
        // A filtered allow cannot vouch for a row that does not exist yet.
        (Decision::AllowFiltered(_), None) => false,
        (Decision::AllowFiltered(filter), Some(id)) => filter.matches(id),
    };
    if permitted {
        Ok(())
    } else {
        Err(WriteRejection::Forbidden {
            collection,
            operation,
        })
    }
}

fn ensure_fields_writable(
    session: Option<&Session>,
    write: &WriteInput<'_>,
    operation: Operation,
) -> Result<(), WriteRejection> {
    let WriteInput::User { proposed, existing } = *write else {
        return Ok(());
    };
    let field_op = if operation == Operation::Create {
        FieldOperation::Create
    } else {
        FieldOperation::Update
    };
    let item = existing.map(|u| &u.id);
    if proposed.role.is_some() && !user_field_access(session, UserField::Role, field_op, item) {
        return Err(WriteRejection::FieldForbidden {
            collection: Collection::User,
            field: "role",
        });
    }
    Ok(())
}
