use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::CategoryQuery;
use kernel::interface::update::CategoryModifier;
use kernel::prelude::entity::{Category, CategoryId, CategoryName, Description};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresCategoryRepository;

#[async_trait::async_trait]
impl CategoryQuery for PostgresCategoryRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError> {
        PgCategoryInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Category>, KernelError> {
        PgCategoryInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl CategoryModifier for PostgresCategoryRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        PgCategoryInternal::create(con, category).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        PgCategoryInternal::update(con, category).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        category_id: &CategoryId,
    ) -> error_stack::Result<(), KernelError> {
        PgCategoryInternal::delete(con, category_id).await
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    description: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(
            CategoryId::new(row.id),
            CategoryName::new(row.name),
            row.description.map(Description::new),
        )
    }
}

pub(in crate::database) struct PgCategoryInternal;

impl PgCategoryInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            // language=postgresql
            r#"
            SELECT id, name, description
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Category::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Category>, KernelError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            // language=postgresql
            r#"
            SELECT id, name, description
            FROM categories
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO categories (id, name, description)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(category.id().as_ref())
        .bind(category.name().as_ref())
        .bind(category.description().as_ref().map(|d| d.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE categories
            SET name = $2, description = $3
            WHERE id = $1
            "#,
        )
        .bind(category.id().as_ref())
        .bind(category.name().as_ref())
        .bind(category.description().as_ref().map(|d| d.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        category_id: &CategoryId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(category_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::{CategoryQuery, ProductQuery};
    use kernel::interface::update::{CategoryModifier, ProductModifier};
    use kernel::prelude::entity::{
        Category, CategoryId, CategoryName, Product, ProductId, ProductName, ProductPrice,
        StockQuantity,
    };
    use kernel::KernelError;

    use crate::database::postgres::category::PostgresCategoryRepository;
    use crate::database::postgres::product::PostgresProductRepository;
    use crate::database::postgres::PostgresDatabase;

    // Mirrors the service-level cascade: products first, then the category.
    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn cascade_delete_leaves_no_orphan_products() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut connection = db.transact().await?;

        let category_id = CategoryId::new(Uuid::new_v4());
        let category = Category::new(category_id.clone(), CategoryName::new("Peripherals"), None);
        PostgresCategoryRepository
            .create(&mut connection, &category)
            .await?;

        let product_ids: Vec<ProductId> = (0..2).map(|_| ProductId::new(Uuid::new_v4())).collect();
        for id in &product_ids {
            let product = Product::new(
                id.clone(),
                ProductName::new("Keyboard"),
                None,
                StockQuantity::new(3),
                ProductPrice::new(Decimal::new(19900, 2)),
                category_id.clone(),
            );
            PostgresProductRepository
                .create(&mut connection, &product)
                .await?;
        }

        PostgresProductRepository
            .delete_by_category(&mut connection, &category_id)
            .await?;
        PostgresCategoryRepository
            .delete(&mut connection, &category_id)
            .await?;

        for id in &product_ids {
            let found = PostgresProductRepository
                .find_by_id(&mut connection, id)
                .await?;
            assert!(found.is_none());
        }
        let found = PostgresCategoryRepository
            .find_by_id(&mut connection, &category_id)
            .await?;
        assert!(found.is_none());

        Ok(())
    }
}
