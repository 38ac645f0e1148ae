use crate::controller::Exhaust;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{
    CategoryId, Description, DestructProduct, Product, ProductId, ProductName, ProductPrice,
    StockQuantity,
};
use serde::Serialize;

#[derive(Debug)]
pub struct CreatedProductResponse {
    id: ProductId,
}

impl IntoResponse for CreatedProductResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.id.as_ref().to_string()).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    id: ProductId,
    name: ProductName,
    description: Option<Description>,
    available_quantity: StockQuantity,
    price: ProductPrice,
    category_id: CategoryId,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let DestructProduct {
            id,
            name,
            description,
            available_quantity,
            price,
            category_id,
        } = product.into_destruct();
        ProductResponse {
            id,
            name,
            description,
            available_quantity,
            price,
            category_id,
        }
    }
}

impl IntoResponse for ProductResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct ProductPresenter;

impl Exhaust<ProductId> for ProductPresenter {
    type To = CreatedProductResponse;
    fn emit(&self, input: ProductId) -> Self::To {
        CreatedProductResponse { id: input }
    }
}

impl Exhaust<Product> for ProductPresenter {
    type To = ProductResponse;
    fn emit(&self, input: Product) -> Self::To {
        ProductResponse::from(input)
    }
}

impl Exhaust<Vec<Product>> for ProductPresenter {
    type To = axum::Json<Vec<ProductResponse>>;
    fn emit(&self, input: Vec<Product>) -> Self::To {
        let result = input
            .into_iter()
            .map(ProductResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}

impl Exhaust<bool> for ProductPresenter {
    type To = axum::Json<bool>;
    fn emit(&self, input: bool) -> Self::To {
        axum::Json::from(input)
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use kernel::prelude::entity::{
        CategoryId, Product, ProductId, ProductName, ProductPrice, StockQuantity,
    };

    use super::ProductResponse;

    #[test]
    fn response_uses_camel_case_field_names() {
        let id = Uuid::new_v4();
        let category_id = Uuid::new_v4();
        let product = Product::new(
            ProductId::new(id),
            ProductName::new("Keyboard"),
            None,
            StockQuantity::new(3),
            ProductPrice::new(Decimal::new(19900, 2)),
            CategoryId::new(category_id),
        );
        let value =
            serde_json::to_value(ProductResponse::from(product)).expect("serializable response");
        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["name"], "Keyboard");
        assert_eq!(value["availableQuantity"], 3);
        assert_eq!(value["categoryId"], category_id.to_string());
        assert!(value["description"].is_null());
    }
}
