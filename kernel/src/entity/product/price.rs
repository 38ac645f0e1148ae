use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Monetary amount, non-negative by boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ProductPrice(Decimal);

impl ProductPrice {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }
}
