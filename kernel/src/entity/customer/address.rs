use serde::{Deserialize, Serialize};

/// Value object embedded in `Customer`. Carries no identity of its own, so
/// plain structural equality is correct here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}
