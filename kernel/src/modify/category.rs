use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Category, CategoryId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CategoryModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        category: &Category,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        category: &Category,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        category_id: &CategoryId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCategoryModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CategoryModifier: CategoryModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn category_modifier(&self) -> &Self::CategoryModifier;
}
