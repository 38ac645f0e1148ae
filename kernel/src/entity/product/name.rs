use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
