use crate::controller::Intake;
use crate::validate::{FieldViolation, Validate};
use application::transfer::{
    CreateProductDto, DeleteProductDto, ExistsProductDto, GetProductDto, UpdateProductDto,
};
use kernel::prelude::entity::{CategoryId, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    name: Option<String>,
    description: Option<String>,
    available_quantity: Option<i32>,
    price: Option<Decimal>,
    category_id: Option<Uuid>,
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if self.name.is_none() {
            violations.push(FieldViolation::new("name", "Name is required"));
        }
        match self.available_quantity {
            None => violations.push(FieldViolation::new(
                "availableQuantity",
                "Available quantity is required",
            )),
            Some(quantity) if quantity < 0 => violations.push(FieldViolation::new(
                "availableQuantity",
                "Available quantity must be zero or positive",
            )),
            Some(_) => {}
        }
        match self.price {
            None => violations.push(FieldViolation::new("price", "Price is required")),
            Some(price) if price < Decimal::ZERO => violations.push(FieldViolation::new(
                "price",
                "Price must be zero or positive",
            )),
            Some(_) => {}
        }
        if self.category_id.is_none() {
            violations.push(FieldViolation::new("categoryId", "Category id is required"));
        }
        violations
    }
}

/// The id travels in the body; every other field is an optional overwrite.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    available_quantity: Option<i32>,
    price: Option<Decimal>,
    category_id: Option<Uuid>,
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        match &self.id {
            None => violations.push(FieldViolation::new("id", "Id is required")),
            Some(raw) if Uuid::parse_str(raw).is_err() => {
                violations.push(FieldViolation::new("id", "Id is invalid"));
            }
            Some(_) => {}
        }
        if matches!(self.available_quantity, Some(quantity) if quantity < 0) {
            violations.push(FieldViolation::new(
                "availableQuantity",
                "Available quantity must be zero or positive",
            ));
        }
        if matches!(self.price, Some(price) if price < Decimal::ZERO) {
            violations.push(FieldViolation::new(
                "price",
                "Price must be zero or positive",
            ));
        }
        violations
    }
}

#[derive(Debug)]
pub struct GetProductRequest {
    id: Uuid,
}

impl GetProductRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct ExistsProductRequest {
    id: Uuid,
}

impl ExistsProductRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteProductRequest {
    id: Uuid,
}

impl DeleteProductRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct ProductTransformer;

impl Intake<CreateProductRequest> for ProductTransformer {
    type To = CreateProductDto;
    fn emit(&self, input: CreateProductRequest) -> Self::To {
        // Required fields were checked at the boundary.
        CreateProductDto {
            name: input.name.unwrap_or_default(),
            description: input.description,
            available_quantity: input.available_quantity.unwrap_or_default(),
            price: input.price.unwrap_or_default(),
            category_id: CategoryId::new(input.category_id.unwrap_or_default()),
        }
    }
}

impl Intake<UpdateProductRequest> for ProductTransformer {
    type To = UpdateProductDto;
    fn emit(&self, req: UpdateProductRequest) -> Self::To {
        // The id was checked at the boundary.
        let id = req
            .id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .unwrap_or_default();
        UpdateProductDto {
            id: ProductId::new(id),
            name: req.name,
            description: req.description,
            available_quantity: req.available_quantity,
            price: req.price,
            category_id: req.category_id.map(CategoryId::new),
        }
    }
}

impl Intake<GetProductRequest> for ProductTransformer {
    type To = GetProductDto;
    fn emit(&self, input: GetProductRequest) -> Self::To {
        GetProductDto {
            id: ProductId::new(input.id),
        }
    }
}

impl Intake<ExistsProductRequest> for ProductTransformer {
    type To = ExistsProductDto;
    fn emit(&self, input: ExistsProductRequest) -> Self::To {
        ExistsProductDto {
            id: ProductId::new(input.id),
        }
    }
}

impl Intake<DeleteProductRequest> for ProductTransformer {
    type To = DeleteProductDto;
    fn emit(&self, input: DeleteProductRequest) -> Self::To {
        DeleteProductDto {
            id: ProductId::new(input.id),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::controller::Intake;
    use crate::validate::Validate;

    use super::{CreateProductRequest, ProductTransformer, UpdateProductRequest};

    #[test]
    fn missing_fields_are_each_reported() {
        let request: CreateProductRequest =
            serde_json::from_value(json!({})).expect("empty request");
        let fields: Vec<_> = request.validate().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "availableQuantity", "price", "categoryId"]);
    }

    #[test]
    fn negative_quantity_and_price_are_rejected() {
        let request: CreateProductRequest = serde_json::from_value(json!({
            "name": "Keyboard",
            "availableQuantity": -1,
            "price": "-0.01",
            "categoryId": uuid::Uuid::new_v4(),
        }))
        .expect("request should deserialize");
        let fields: Vec<_> = request.validate().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["availableQuantity", "price"]);
    }

    #[test]
    fn valid_request_transforms_with_all_fields() {
        let category_id = uuid::Uuid::new_v4();
        let request: CreateProductRequest = serde_json::from_value(json!({
            "name": "Keyboard",
            "description": "Mechanical",
            "availableQuantity": 3,
            "price": "199.00",
            "categoryId": category_id,
        }))
        .expect("request should deserialize");
        assert!(request.validate().is_empty());

        let dto = ProductTransformer.emit(request);
        assert_eq!(dto.name, "Keyboard");
        assert_eq!(dto.available_quantity, 3);
        assert_eq!(dto.category_id.as_ref(), &category_id);
    }

    #[test]
    fn sparse_update_keeps_absent_fields_absent() {
        let id = uuid::Uuid::new_v4();
        let request: UpdateProductRequest =
            serde_json::from_value(json!({"id": id, "price": "10.00"})).expect("sparse update");
        assert!(request.validate().is_empty());

        let dto = ProductTransformer.emit(request);
        assert_eq!(dto.id.as_ref(), &id);
        assert!(dto.name.is_none());
        assert!(dto.price.is_some());
        assert!(dto.category_id.is_none());
    }

    #[test]
    fn update_without_id_is_rejected() {
        let request: UpdateProductRequest =
            serde_json::from_value(json!({"price": "10.00"})).expect("request");
        let fields: Vec<_> = request.validate().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["id"]);
    }
}
