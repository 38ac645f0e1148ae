use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Stored email address. Pattern checking happens at the HTTP boundary,
/// uniqueness at the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}
