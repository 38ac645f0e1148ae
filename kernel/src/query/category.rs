use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Category, CategoryId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CategoryQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Category>, KernelError>;
}

pub trait DependOnCategoryQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CategoryQuery: CategoryQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn category_query(&self) -> &Self::CategoryQuery;
}
