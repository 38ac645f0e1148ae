use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::{Error, PgConnection, Pool, Postgres};
use tracing::{debug, error, warn};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnCategoryQuery, DependOnCustomerQuery, DependOnProductQuery};
use kernel::interface::update::{
    DependOnCategoryModifier, DependOnCustomerModifier, DependOnProductModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{category::*, customer::*, product::*};

mod category;
mod customer;
mod product;

static POSTGRES_URL: &str = "POSTGRES_URL";

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .change_context_lazy(|| KernelError::Internal)?;
        debug!("migrations applied");
        Ok(Self { pool })
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

impl DependOnCustomerQuery for PostgresDatabase {
    type CustomerQuery = PostgresCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &PostgresCustomerRepository
    }
}

impl DependOnCustomerModifier for PostgresDatabase {
    type CustomerModifier = PostgresCustomerRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &PostgresCustomerRepository
    }
}

impl DependOnProductQuery for PostgresDatabase {
    type ProductQuery = PostgresProductRepository;
    fn product_query(&self) -> &Self::ProductQuery {
        &PostgresProductRepository
    }
}

impl DependOnProductModifier for PostgresDatabase {
    type ProductModifier = PostgresProductRepository;
    fn product_modifier(&self) -> &Self::ProductModifier {
        &PostgresProductRepository
    }
}

impl DependOnCategoryQuery for PostgresDatabase {
    type CategoryQuery = PostgresCategoryRepository;
    fn category_query(&self) -> &Self::CategoryQuery {
        &PostgresCategoryRepository
    }
}

impl DependOnCategoryModifier for PostgresDatabase {
    type CategoryModifier = PostgresCategoryRepository;
    fn category_modifier(&self) -> &Self::CategoryModifier {
        &PostgresCategoryRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match &error {
            // 23505: unique_violation
            Error::Database(db) if db.code().as_deref() == Some("23505") => {
                let message = db.message().to_string();
                warn!("unique violation: {message}");
                Report::from(error).change_context(KernelError::DuplicateEntry { message })
            }
            _ => {
                error!("query failed: {error:?}");
                Report::from(error).change_context(KernelError::Internal)
            }
        })
    }
}
