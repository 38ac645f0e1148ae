mod id;
mod name;
mod price;
mod stock;

pub use self::{id::*, name::*, price::*, stock::*};
use crate::entity::{CategoryId, Description};
use destructure::Destructure;
use std::hash::{Hash, Hasher};
use vodca::References;

/// A product always references exactly one category. The reference is checked
/// against the store when a product is created or re-pointed.
#[derive(Debug, Clone, Destructure, References)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    description: Option<Description>,
    available_quantity: StockQuantity,
    price: ProductPrice,
    category_id: CategoryId,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: ProductName,
        description: Option<Description>,
        available_quantity: StockQuantity,
        price: ProductPrice,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            name,
            description,
            available_quantity,
            price,
            category_id,
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
