use thiserror::Error;

/// Failures while constructing sessions and permission sets.
///
/// Access decisions themselves never fail; they are values (see [`crate::Decision`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("unknown permission '{0}'")]
    UnknownPermission(String),

    #[error("malformed session payload: {0}")]
    MalformedSession(String),
}
