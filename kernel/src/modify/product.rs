use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CategoryId, Product, ProductId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ProductModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        product: &Product,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        product: &Product,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        product_id: &ProductId,
    ) -> error_stack::Result<(), KernelError>;
    /// Removes every product owned by `category_id`. Runs ahead of the
    /// category delete so the two land in the same transaction.
    async fn delete_by_category(
        &self,
        con: &mut Self::Transaction,
        category_id: &CategoryId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnProductModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type ProductModifier: ProductModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn product_modifier(&self) -> &Self::ProductModifier;
}
