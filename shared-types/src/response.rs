use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Success envelope shared by the administrative functions
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionSuccess<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> FunctionSuccess<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// Failure envelope; `error` carries the cause, `message` the operation that failed
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionFailure {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl FunctionFailure {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}
