use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Units on hand, non-negative by boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct StockQuantity(i32);

impl StockQuantity {
    pub fn new(quantity: impl Into<i32>) -> Self {
        Self(quantity.into())
    }
}
