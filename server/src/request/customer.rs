use crate::controller::Intake;
use crate::validate::{email_pattern, zip_pattern, FieldViolation, Validate};
use application::transfer::{
    CreateCustomerDto, DeleteCustomerDto, ExistsCustomerDto, GetCustomerDto, UpdateCustomerDto,
};
use kernel::prelude::entity::{Address, CustomerId};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    address: Option<Address>,
}

impl Validate for CreateCustomerRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if self.first_name.is_none() {
            violations.push(FieldViolation::new("firstName", "First name is required"));
        }
        if self.last_name.is_none() {
            violations.push(FieldViolation::new("lastName", "Last name is required"));
        }
        match &self.email {
            None => violations.push(FieldViolation::new("email", "Email is required")),
            Some(email) if !email_pattern().is_match(email) => {
                violations.push(FieldViolation::new("email", "Email is invalid"));
            }
            Some(_) => {}
        }
        violations.extend(validate_address(&self.address));
        violations
    }
}

/// The id travels in the body; every other field is an optional overwrite.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    address: Option<Address>,
}

impl Validate for UpdateCustomerRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        match &self.id {
            None => violations.push(FieldViolation::new("id", "Id is required")),
            Some(raw) if Uuid::parse_str(raw).is_err() => {
                violations.push(FieldViolation::new("id", "Id is invalid"));
            }
            Some(_) => {}
        }
        if let Some(email) = &self.email {
            if !email_pattern().is_match(email) {
                violations.push(FieldViolation::new("email", "Email is invalid"));
            }
        }
        violations.extend(validate_address(&self.address));
        violations
    }
}

fn validate_address(address: &Option<Address>) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    if let Some(zip) = address.as_ref().and_then(|a| a.zip.as_ref()) {
        if !zip_pattern().is_match(zip) {
            violations.push(FieldViolation::new(
                "address.zip",
                "Zip code must match the 12345-678 format",
            ));
        }
    }
    violations
}

#[derive(Debug)]
pub struct GetCustomerRequest {
    id: Uuid,
}

impl GetCustomerRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct ExistsCustomerRequest {
    id: Uuid,
}

impl ExistsCustomerRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteCustomerRequest {
    id: Uuid,
}

impl DeleteCustomerRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct CustomerTransformer;

impl Intake<CreateCustomerRequest> for CustomerTransformer {
    type To = CreateCustomerDto;
    fn emit(&self, input: CreateCustomerRequest) -> Self::To {
        // Required fields were checked at the boundary.
        CreateCustomerDto {
            first_name: input.first_name.unwrap_or_default(),
            last_name: input.last_name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            address: input.address,
        }
    }
}

impl Intake<UpdateCustomerRequest> for CustomerTransformer {
    type To = UpdateCustomerDto;
    fn emit(&self, req: UpdateCustomerRequest) -> Self::To {
        // The id was checked at the boundary.
        let id = req
            .id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .unwrap_or_default();
        UpdateCustomerDto {
            id: CustomerId::new(id),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            address: req.address,
        }
    }
}

impl Intake<GetCustomerRequest> for CustomerTransformer {
    type To = GetCustomerDto;
    fn emit(&self, input: GetCustomerRequest) -> Self::To {
        GetCustomerDto {
            id: CustomerId::new(input.id),
        }
    }
}

impl Intake<ExistsCustomerRequest> for CustomerTransformer {
    type To = ExistsCustomerDto;
    fn emit(&self, input: ExistsCustomerRequest) -> Self::To {
        ExistsCustomerDto {
            id: CustomerId::new(input.id),
        }
    }
}

impl Intake<DeleteCustomerRequest> for CustomerTransformer {
    type To = DeleteCustomerDto;
    fn emit(&self, input: DeleteCustomerRequest) -> Self::To {
        DeleteCustomerDto {
            id: CustomerId::new(input.id),
        }
    }
}
