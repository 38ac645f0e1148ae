use crate::controller::Exhaust;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{
    Address, Customer, CustomerEmail, CustomerFirstName, CustomerId, CustomerLastName,
    DestructCustomer,
};
use serde::Serialize;

/// Creation answers with the bare id as the body.
#[derive(Debug)]
pub struct CreatedCustomerResponse {
    id: CustomerId,
}

impl IntoResponse for CreatedCustomerResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.id.as_ref().to_string()).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    id: CustomerId,
    first_name: CustomerFirstName,
    last_name: CustomerLastName,
    email: CustomerEmail,
    address: Option<Address>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        let DestructCustomer {
            id,
            firstname,
            lastname,
            email,
            address,
        } = customer.into_destruct();
        CustomerResponse {
            id,
            first_name: firstname,
            last_name: lastname,
            email,
            address,
        }
    }
}

impl IntoResponse for CustomerResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct CustomerPresenter;

impl Exhaust<CustomerId> for CustomerPresenter {
    type To = CreatedCustomerResponse;
    fn emit(&self, input: CustomerId) -> Self::To {
        CreatedCustomerResponse { id: input }
    }
}

impl Exhaust<Customer> for CustomerPresenter {
    type To = CustomerResponse;
    fn emit(&self, input: Customer) -> Self::To {
        CustomerResponse::from(input)
    }
}

impl Exhaust<Vec<Customer>> for CustomerPresenter {
    type To = axum::Json<Vec<CustomerResponse>>;
    fn emit(&self, input: Vec<Customer>) -> Self::To {
        let result = input
            .into_iter()
            .map(CustomerResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}

impl Exhaust<bool> for CustomerPresenter {
    type To = axum::Json<bool>;
    fn emit(&self, input: bool) -> Self::To {
        axum::Json::from(input)
    }
}
