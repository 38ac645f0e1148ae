mod id;
mod name;

pub use self::{id::*, name::*};
use crate::entity::Description;
use destructure::Destructure;
use std::hash::{Hash, Hasher};
use vodca::References;

/// A category owns its products: deleting one removes every product that
/// references it, inside a single transaction.
#[derive(Debug, Clone, Destructure, References)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
    description: Option<Description>,
}

impl Category {
    pub fn new(id: CategoryId, name: CategoryName, description: Option<Description>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
