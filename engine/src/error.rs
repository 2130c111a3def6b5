use thiserror::Error;

/// Errors raised by warrior construction, mutation and combat resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombatError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("illegal state: {0}")]
    IllegalState(String),
}

impl CombatError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CombatError>;
