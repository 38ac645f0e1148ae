use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::CustomerQuery;
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::{
    Address, Customer, CustomerEmail, CustomerFirstName, CustomerId, CustomerLastName,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresCustomerRepository;

#[async_trait::async_trait]
impl CustomerQuery for PostgresCustomerRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        PgCustomerInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Customer>, KernelError> {
        PgCustomerInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl CustomerModifier for PostgresCustomerRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        PgCustomerInternal::create(con, customer).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        PgCustomerInternal::update(con, customer).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        customer_id: &CustomerId,
    ) -> error_stack::Result<(), KernelError> {
        PgCustomerInternal::delete(con, customer_id).await
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    firstname: String,
    lastname: String,
    email: String,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    country: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        // All address columns NULL means no address was ever supplied.
        let address = if row.street.is_none()
            && row.city.is_none()
            && row.state.is_none()
            && row.zip.is_none()
            && row.country.is_none()
        {
            None
        } else {
            Some(Address {
                street: row.street,
                city: row.city,
                state: row.state,
                zip: row.zip,
                country: row.country,
            })
        };
        Customer::new(
            CustomerId::new(row.id),
            CustomerFirstName::new(row.firstname),
            CustomerLastName::new(row.lastname),
            CustomerEmail::new(row.email),
            address,
        )
    }
}

pub(in crate::database) struct PgCustomerInternal;

impl PgCustomerInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            // language=postgresql
            r#"
            SELECT id, firstname, lastname, email, street, city, state, zip, country
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Customer::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Customer>, KernelError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            // language=postgresql
            r#"
            SELECT id, firstname, lastname, email, street, city, state, zip, country
            FROM customers
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        let address = customer.address().as_ref();
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO customers (id, firstname, lastname, email, street, city, state, zip, country)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(customer.id().as_ref())
        .bind(customer.firstname().as_ref())
        .bind(customer.lastname().as_ref())
        .bind(customer.email().as_ref())
        .bind(address.and_then(|a| a.street.as_deref()))
        .bind(address.and_then(|a| a.city.as_deref()))
        .bind(address.and_then(|a| a.state.as_deref()))
        .bind(address.and_then(|a| a.zip.as_deref()))
        .bind(address.and_then(|a| a.country.as_deref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        let address = customer.address().as_ref();
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE customers
            SET firstname = $2, lastname = $3, email = $4,
                street = $5, city = $6, state = $7, zip = $8, country = $9
            WHERE id = $1
            "#,
        )
        .bind(customer.id().as_ref())
        .bind(customer.firstname().as_ref())
        .bind(customer.lastname().as_ref())
        .bind(customer.email().as_ref())
        .bind(address.and_then(|a| a.street.as_deref()))
        .bind(address.and_then(|a| a.city.as_deref()))
        .bind(address.and_then(|a| a.state.as_deref()))
        .bind(address.and_then(|a| a.zip.as_deref()))
        .bind(address.and_then(|a| a.country.as_deref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        customer_id: &CustomerId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM customers
            WHERE id = $1
            "#,
        )
        .bind(customer_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::CustomerQuery;
    use kernel::interface::update::CustomerModifier;
    use kernel::prelude::entity::{
        Address, Customer, CustomerEmail, CustomerFirstName, CustomerId, CustomerLastName,
    };
    use kernel::KernelError;

    use crate::database::postgres::customer::PostgresCustomerRepository;
    use crate::database::postgres::PostgresDatabase;

    fn sample(id: &CustomerId) -> Customer {
        Customer::new(
            id.clone(),
            CustomerFirstName::new("Ana"),
            CustomerLastName::new("Lima"),
            CustomerEmail::new(format!("{}@example.com", Uuid::new_v4())),
            Some(Address {
                street: Some("Rua A".to_string()),
                city: Some("Sao Paulo".to_string()),
                state: Some("SP".to_string()),
                zip: Some("12345-678".to_string()),
                country: Some("Brasil".to_string()),
            }),
        )
    }

    // Runs inside one transaction that is never committed.
    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn crud_round_trip() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut connection = db.transact().await?;
        let id = CustomerId::new(Uuid::new_v4());
        let customer = sample(&id);

        PostgresCustomerRepository
            .create(&mut connection, &customer)
            .await?;

        let found = PostgresCustomerRepository
            .find_by_id(&mut connection, &id)
            .await?
            .expect("customer should exist after create");
        assert_eq!(found.firstname(), customer.firstname());
        assert_eq!(found.lastname(), customer.lastname());
        assert_eq!(found.email(), customer.email());
        assert_eq!(found.address(), customer.address());

        let updated = found.reconstruct(|c| c.firstname = CustomerFirstName::new("Bia"));
        PostgresCustomerRepository
            .update(&mut connection, &updated)
            .await?;
        let found = PostgresCustomerRepository
            .find_by_id(&mut connection, &id)
            .await?
            .expect("customer should exist after update");
        assert_eq!(found.firstname().as_ref(), "Bia");

        PostgresCustomerRepository
            .delete(&mut connection, &id)
            .await?;
        let found = PostgresCustomerRepository
            .find_by_id(&mut connection, &id)
            .await?;
        assert!(found.is_none());

        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn duplicate_email_is_reported_as_conflict() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut connection = db.transact().await?;
        let first = sample(&CustomerId::new(Uuid::new_v4()));
        let second = Customer::new(
            CustomerId::new(Uuid::new_v4()),
            CustomerFirstName::new("Bia"),
            CustomerLastName::new("Reis"),
            first.email().clone(),
            None,
        );

        PostgresCustomerRepository
            .create(&mut connection, &first)
            .await?;
        let error = PostgresCustomerRepository
            .create(&mut connection, &second)
            .await
            .expect_err("same email twice must conflict");
        assert!(matches!(
            error.current_context(),
            KernelError::DuplicateEntry { .. }
        ));

        Ok(())
    }
}
