use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Product, ProductId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ProductQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &ProductId,
    ) -> error_stack::Result<Option<Product>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Product>, KernelError>;
}

pub trait DependOnProductQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type ProductQuery: ProductQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn product_query(&self) -> &Self::ProductQuery;
}
