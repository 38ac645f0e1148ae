use crate::controller::Intake;
use crate::validate::{FieldViolation, Validate};
use application::transfer::{
    CreateCategoryDto, DeleteCategoryDto, ExistsCategoryDto, GetCategoryDto, UpdateCategoryDto,
};
use kernel::prelude::entity::CategoryId;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    name: Option<String>,
    description: Option<String>,
}

impl Validate for CreateCategoryRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if self.name.is_none() {
            violations.push(FieldViolation::new("name", "Name is required"));
        }
        violations
    }
}

/// The id travels in the body; every other field is an optional overwrite.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
}

impl Validate for UpdateCategoryRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        match &self.id {
            None => violations.push(FieldViolation::new("id", "Id is required")),
            Some(raw) if Uuid::parse_str(raw).is_err() => {
                violations.push(FieldViolation::new("id", "Id is invalid"));
            }
            Some(_) => {}
        }
        violations
    }
}

#[derive(Debug)]
pub struct GetCategoryRequest {
    id: Uuid,
}

impl GetCategoryRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct ExistsCategoryRequest {
    id: Uuid,
}

impl ExistsCategoryRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteCategoryRequest {
    id: Uuid,
}

impl DeleteCategoryRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct CategoryTransformer;

impl Intake<CreateCategoryRequest> for CategoryTransformer {
    type To = CreateCategoryDto;
    fn emit(&self, input: CreateCategoryRequest) -> Self::To {
        CreateCategoryDto {
            name: input.name.unwrap_or_default(),
            description: input.description,
        }
    }
}

impl Intake<UpdateCategoryRequest> for CategoryTransformer {
    type To = UpdateCategoryDto;
    fn emit(&self, req: UpdateCategoryRequest) -> Self::To {
        // The id was checked at the boundary.
        let id = req
            .id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .unwrap_or_default();
        UpdateCategoryDto {
            id: CategoryId::new(id),
            name: req.name,
            description: req.description,
        }
    }
}

impl Intake<GetCategoryRequest> for CategoryTransformer {
    type To = GetCategoryDto;
    fn emit(&self, input: GetCategoryRequest) -> Self::To {
        GetCategoryDto {
            id: CategoryId::new(input.id),
        }
    }
}

impl Intake<ExistsCategoryRequest> for CategoryTransformer {
    type To = ExistsCategoryDto;
    fn emit(&self, input: ExistsCategoryRequest) -> Self::To {
        ExistsCategoryDto {
            id: CategoryId::new(input.id),
        }
    }
}

impl Intake<DeleteCategoryRequest> for CategoryTransformer {
    type To = DeleteCategoryDto;
    fn emit(&self, input: DeleteCategoryRequest) -> Self::To {
        DeleteCategoryDto {
            id: CategoryId::new(input.id),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::controller::Intake;
    use crate::validate::Validate;

    use super::{CategoryTransformer, CreateCategoryRequest};

    #[test]
    fn name_is_the_only_required_field() {
        let request: CreateCategoryRequest =
            serde_json::from_value(json!({})).expect("empty request");
        let fields: Vec<_> = request.validate().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name"]);
    }

    #[test]
    fn valid_request_transforms() {
        let request: CreateCategoryRequest =
            serde_json::from_value(json!({"name": "Peripherals"})).expect("request");
        assert!(request.validate().is_empty());

        let dto = CategoryTransformer.emit(request);
        assert_eq!(dto.name, "Peripherals");
        assert!(dto.description.is_none());
    }
}
