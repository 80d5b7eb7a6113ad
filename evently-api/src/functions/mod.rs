//! Privileged mutations exposed as HTTP functions. Each one is a linear
//! pipeline: authenticate, validate, resolve, call the backing procedure.
//! Any failing step ends the pipeline with a [`FunctionError`].

pub mod cancel_booking_admin;
pub mod delete_event_space;

use crate::database::StoreError;
use crate::helpers::space_resolver::ResolveError;

#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Ambiguous(String),
    #[error("{0}")]
    BackendFailure(String),
}

impl FunctionError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FunctionError::Unauthorized)
    }
}

impl From<ResolveError> for FunctionError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound(_) => FunctionError::NotFound(e.to_string()),
            ResolveError::Ambiguous(_) => FunctionError::Ambiguous(e.to_string()),
            ResolveError::Store(store) => store.into(),
        }
    }
}

impl From<StoreError> for FunctionError {
    fn from(e: StoreError) -> Self {
        FunctionError::BackendFailure(e.to_string())
    }
}
