use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Description(String);

impl Description {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}
