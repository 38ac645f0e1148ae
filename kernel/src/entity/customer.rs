mod address;
mod email;
mod id;
mod name;

pub use self::{address::*, email::*, id::*, name::*};
use destructure::Destructure;
use std::hash::{Hash, Hasher};
use vodca::References;

/// A customer record. Identity lives entirely in `id`; equality and hashing
/// ignore every other field.
#[derive(Debug, Clone, Destructure, References)]
pub struct Customer {
    id: CustomerId,
    firstname: CustomerFirstName,
    lastname: CustomerLastName,
    email: CustomerEmail,
    address: Option<Address>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        firstname: CustomerFirstName,
        lastname: CustomerLastName,
        email: CustomerEmail,
        address: Option<Address>,
    ) -> Self {
        Self {
            id,
            firstname,
            lastname,
            email,
            address,
        }
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn equality_is_defined_by_id_alone() {
        let id = CustomerId::new(Uuid::new_v4());
        let a = Customer::new(
            id.clone(),
            CustomerFirstName::new("Ana"),
            CustomerLastName::new("Lima"),
            CustomerEmail::new("ana@x.com"),
            None,
        );
        let b = Customer::new(
            id,
            CustomerFirstName::new("Bia"),
            CustomerLastName::new("Reis"),
            CustomerEmail::new("bia@x.com"),
            None,
        );
        assert_eq!(a, b);

        let c = Customer::new(
            CustomerId::new(Uuid::new_v4()),
            CustomerFirstName::new("Ana"),
            CustomerLastName::new("Lima"),
            CustomerEmail::new("ana@x.com"),
            None,
        );
        assert_ne!(a, c);
    }
}
