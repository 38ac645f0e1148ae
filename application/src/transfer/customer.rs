use kernel::prelude::entity::{Address, CustomerId};

pub struct CreateCustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<Address>,
}

/// Partial update. `None` fields leave the stored value untouched, including
/// the individual address sub-fields.
pub struct UpdateCustomerDto {
    pub id: CustomerId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
}

pub struct GetCustomerDto {
    pub id: CustomerId,
}

pub struct ExistsCustomerDto {
    pub id: CustomerId,
}

pub struct DeleteCustomerDto {
    pub id: CustomerId,
}
