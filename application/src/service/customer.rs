use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{CustomerQuery, DependOnCustomerQuery};
use kernel::interface::update::{CustomerModifier, DependOnCustomerModifier};
use kernel::prelude::entity::{
    Customer, CustomerEmail, CustomerFirstName, CustomerId, CustomerLastName,
};
use kernel::KernelError;

use crate::transfer::{
    CreateCustomerDto, DeleteCustomerDto, ExistsCustomerDto, GetCustomerDto, UpdateCustomerDto,
};

const ENTITY: &str = "Customer";

#[async_trait::async_trait]
pub trait CreateCustomerService: 'static + Sync + Send + DependOnCustomerModifier {
    async fn create_customer(
        &self,
        dto: CreateCustomerDto,
    ) -> error_stack::Result<CustomerId, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CustomerId::new(Uuid::new_v4());
        let customer = Customer::new(
            id.clone(),
            CustomerFirstName::new(dto.first_name),
            CustomerLastName::new(dto.last_name),
            CustomerEmail::new(dto.email),
            dto.address,
        );

        self.customer_modifier()
            .create(&mut connection, &customer)
            .await?;
        connection.commit().await?;

        Ok(id)
    }
}

impl<T> CreateCustomerService for T where T: DependOnCustomerModifier {}

#[async_trait::async_trait]
pub trait UpdateCustomerService:
    'static + Sync + Send + DependOnCustomerQuery + DependOnCustomerModifier
{
    async fn update_customer(
        &self,
        dto: UpdateCustomerDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = dto.id.clone();
        let customer = self
            .customer_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, id.as_ref())))?;

        let merged = merge_customer(customer, dto);
        self.customer_modifier()
            .update(&mut connection, &merged)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> UpdateCustomerService for T where T: DependOnCustomerQuery + DependOnCustomerModifier {}

#[async_trait::async_trait]
pub trait GetAllCustomerService: 'static + Sync + Send + DependOnCustomerQuery {
    async fn get_all_customers(&self) -> error_stack::Result<Vec<Customer>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let customers = self.customer_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(customers)
    }
}

impl<T> GetAllCustomerService for T where T: DependOnCustomerQuery {}

#[async_trait::async_trait]
pub trait GetCustomerService: 'static + Sync + Send + DependOnCustomerQuery {
    async fn get_customer(
        &self,
        dto: GetCustomerDto,
    ) -> error_stack::Result<Customer, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let customer = self
            .customer_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, dto.id.as_ref())))?;
        connection.commit().await?;

        Ok(customer)
    }
}

impl<T> GetCustomerService for T where T: DependOnCustomerQuery {}

#[async_trait::async_trait]
pub trait ExistsCustomerService: 'static + Sync + Send + DependOnCustomerQuery {
    /// Presence check derived from `find_by_id` so the two can never disagree.
    async fn exists_customer(
        &self,
        dto: ExistsCustomerDto,
    ) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let found = self
            .customer_query()
            .find_by_id(&mut connection, &dto.id)
            .await?;
        connection.commit().await?;

        Ok(found.is_some())
    }
}

impl<T> ExistsCustomerService for T where T: DependOnCustomerQuery {}

#[async_trait::async_trait]
pub trait DeleteCustomerService:
    'static + Sync + Send + DependOnCustomerQuery + DependOnCustomerModifier
{
    async fn delete_customer(
        &self,
        dto: DeleteCustomerDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.customer_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, dto.id.as_ref())))?;

        self.customer_modifier()
            .delete(&mut connection, &dto.id)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteCustomerService for T where T: DependOnCustomerQuery + DependOnCustomerModifier {}

/// Overwrites only the fields the request actually carried. Nested address
/// sub-fields merge individually into the stored address.
fn merge_customer(customer: Customer, dto: UpdateCustomerDto) -> Customer {
    customer.reconstruct(|c| {
        if let Some(first_name) = dto.first_name {
            c.firstname = CustomerFirstName::new(first_name);
        }
        if let Some(last_name) = dto.last_name {
            c.lastname = CustomerLastName::new(last_name);
        }
        if let Some(email) = dto.email {
            c.email = CustomerEmail::new(email);
        }
        if let Some(patch) = dto.address {
            let mut address = c.address.take().unwrap_or_default();
            if patch.street.is_some() {
                address.street = patch.street;
            }
            if patch.city.is_some() {
                address.city = patch.city;
            }
            if patch.state.is_some() {
                address.state = patch.state;
            }
            if patch.zip.is_some() {
                address.zip = patch.zip;
            }
            if patch.country.is_some() {
                address.country = patch.country;
            }
            c.address = Some(address);
        }
    })
}

#[cfg(test)]
mod test {
    use super::{merge_customer, DeleteCustomerService, GetCustomerService, UpdateCustomerService};
    use crate::transfer::{DeleteCustomerDto, GetCustomerDto, UpdateCustomerDto};
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{CustomerQuery, DependOnCustomerQuery};
    use kernel::interface::update::{CustomerModifier, DependOnCustomerModifier};
    use kernel::prelude::entity::{
        Address, Customer, CustomerEmail, CustomerFirstName, CustomerId, CustomerLastName,
    };
    use kernel::KernelError;
    use uuid::Uuid;

    struct NoopTransaction;

    #[async_trait::async_trait]
    impl Transaction for NoopTransaction {
        async fn commit(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn roll_back(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    /// Store with no records at all, so every id-keyed lookup misses.
    struct EmptyStore;

    #[async_trait::async_trait]
    impl DatabaseConnection for EmptyStore {
        type Transaction = NoopTransaction;
        async fn transact(&self) -> error_stack::Result<NoopTransaction, KernelError> {
            Ok(NoopTransaction)
        }
    }

    struct EmptyCustomerRepository;

    #[async_trait::async_trait]
    impl CustomerQuery for EmptyCustomerRepository {
        type Transaction = NoopTransaction;

        async fn find_by_id(
            &self,
            _con: &mut NoopTransaction,
            _id: &CustomerId,
        ) -> error_stack::Result<Option<Customer>, KernelError> {
            Ok(None)
        }

        async fn find_all(
            &self,
            _con: &mut NoopTransaction,
        ) -> error_stack::Result<Vec<Customer>, KernelError> {
            Ok(Vec::new())
        }
    }

    #[async_trait::async_trait]
    impl CustomerModifier for EmptyCustomerRepository {
        type Transaction = NoopTransaction;

        async fn create(
            &self,
            _con: &mut NoopTransaction,
            _customer: &Customer,
        ) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn update(
            &self,
            _con: &mut NoopTransaction,
            _customer: &Customer,
        ) -> error_stack::Result<(), KernelError> {
            Ok(())
        }

        async fn delete(
            &self,
            _con: &mut NoopTransaction,
            _customer_id: &CustomerId,
        ) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    impl DependOnCustomerQuery for EmptyStore {
        type CustomerQuery = EmptyCustomerRepository;
        fn customer_query(&self) -> &Self::CustomerQuery {
            &EmptyCustomerRepository
        }
    }

    impl DependOnCustomerModifier for EmptyStore {
        type CustomerModifier = EmptyCustomerRepository;
        fn customer_modifier(&self) -> &Self::CustomerModifier {
            &EmptyCustomerRepository
        }
    }

    fn assert_customer_not_found(report: &error_stack::Report<KernelError>) {
        assert!(matches!(
            report.current_context(),
            KernelError::NotFound { entity, .. } if *entity == "Customer"
        ));
    }

    #[tokio::test]
    async fn get_on_missing_id_reports_not_found() {
        let id = CustomerId::new(Uuid::new_v4());
        let error = EmptyStore
            .get_customer(GetCustomerDto { id })
            .await
            .expect_err("missing id must not resolve");
        assert_customer_not_found(&error);
    }

    #[tokio::test]
    async fn update_on_missing_id_reports_not_found() {
        let dto = UpdateCustomerDto {
            id: CustomerId::new(Uuid::new_v4()),
            first_name: Some("Ana".to_string()),
            last_name: None,
            email: None,
            address: None,
        };
        let error = EmptyStore
            .update_customer(dto)
            .await
            .expect_err("missing id must not merge");
        assert_customer_not_found(&error);
    }

    #[tokio::test]
    async fn delete_on_missing_id_reports_not_found() {
        let id = CustomerId::new(Uuid::new_v4());
        let error = EmptyStore
            .delete_customer(DeleteCustomerDto { id })
            .await
            .expect_err("missing id must not silently no-op");
        assert_customer_not_found(&error);
    }

    fn stored() -> Customer {
        Customer::new(
            CustomerId::new(Uuid::new_v4()),
            CustomerFirstName::new("Ana"),
            CustomerLastName::new("Lima"),
            CustomerEmail::new("ana@x.com"),
            Some(Address {
                street: Some("Rua A".to_string()),
                city: Some("Sao Paulo".to_string()),
                state: Some("SP".to_string()),
                zip: Some("12345-678".to_string()),
                country: Some("Brasil".to_string()),
            }),
        )
    }

    fn patch_of(customer: &Customer) -> UpdateCustomerDto {
        UpdateCustomerDto {
            id: customer.id().clone(),
            first_name: None,
            last_name: None,
            email: None,
            address: None,
        }
    }

    #[test]
    fn email_only_update_changes_nothing_else() {
        let customer = stored();
        let before = customer.clone();
        let mut dto = patch_of(&customer);
        dto.email = Some("new@x.com".to_string());

        let merged = merge_customer(customer, dto);

        assert_eq!(merged.email().as_ref(), "new@x.com");
        assert_eq!(merged.firstname(), before.firstname());
        assert_eq!(merged.lastname(), before.lastname());
        assert_eq!(merged.address(), before.address());
    }

    #[test]
    fn address_subfields_merge_individually() {
        let customer = stored();
        let before = customer.clone();
        let mut dto = patch_of(&customer);
        dto.address = Some(Address {
            zip: Some("99999-000".to_string()),
            ..Address::default()
        });

        let merged = merge_customer(customer, dto);
        let address = merged.address().as_ref().unwrap();

        assert_eq!(address.zip.as_deref(), Some("99999-000"));
        let old = before.address().as_ref().unwrap();
        assert_eq!(address.street, old.street);
        assert_eq!(address.city, old.city);
        assert_eq!(address.state, old.state);
        assert_eq!(address.country, old.country);
    }

    #[test]
    fn absent_address_stays_absent() {
        let customer = Customer::new(
            CustomerId::new(Uuid::new_v4()),
            CustomerFirstName::new("Ana"),
            CustomerLastName::new("Lima"),
            CustomerEmail::new("ana@x.com"),
            None,
        );
        let dto = patch_of(&customer);

        let merged = merge_customer(customer, dto);
        assert!(merged.address().is_none());
    }

    #[test]
    fn address_patch_on_empty_customer_creates_address() {
        let customer = Customer::new(
            CustomerId::new(Uuid::new_v4()),
            CustomerFirstName::new("Ana"),
            CustomerLastName::new("Lima"),
            CustomerEmail::new("ana@x.com"),
            None,
        );
        let mut dto = patch_of(&customer);
        dto.address = Some(Address {
            street: Some("Rua B".to_string()),
            ..Address::default()
        });

        let merged = merge_customer(customer, dto);
        let address = merged.address().as_ref().unwrap();
        assert_eq!(address.street.as_deref(), Some("Rua B"));
        assert_eq!(address.city, None);
    }
}
