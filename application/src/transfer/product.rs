use kernel::prelude::entity::{CategoryId, ProductId};
use rust_decimal::Decimal;

pub struct CreateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub available_quantity: i32,
    pub price: Decimal,
    pub category_id: CategoryId,
}

pub struct UpdateProductDto {
    pub id: ProductId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available_quantity: Option<i32>,
    pub price: Option<Decimal>,
    pub category_id: Option<CategoryId>,
}

pub struct GetProductDto {
    pub id: ProductId,
}

pub struct ExistsProductDto {
    pub id: ProductId,
}

pub struct DeleteProductDto {
    pub id: ProductId,
}
