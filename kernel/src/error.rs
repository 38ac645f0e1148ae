use std::fmt::Display;

use error_stack::Context;

/// Error taxonomy shared by every layer. The HTTP boundary owns the only
/// translation to wire statuses and codes.
#[derive(Debug)]
pub enum KernelError {
    NotFound {
        entity: &'static str,
        message: String,
    },
    DuplicateEntry {
        message: String,
    },
    InvalidArgument {
        message: String,
    },
    Unsupported {
        message: String,
    },
    Internal,
}

impl KernelError {
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            message: format!("{entity} with id {id} not found"),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound { message, .. } => write!(f, "{message}"),
            KernelError::DuplicateEntry { message } => write!(f, "{message}"),
            KernelError::InvalidArgument { message } => write!(f, "{message}"),
            KernelError::Unsupported { message } => write!(f, "{message}"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
