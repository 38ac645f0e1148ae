use rust_decimal::Decimal;
use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::ProductQuery;
use kernel::interface::update::ProductModifier;
use kernel::prelude::entity::{
    CategoryId, Description, Product, ProductId, ProductName, ProductPrice, StockQuantity,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresProductRepository;

#[async_trait::async_trait]
impl ProductQuery for PostgresProductRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &ProductId,
    ) -> error_stack::Result<Option<Product>, KernelError> {
        PgProductInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Product>, KernelError> {
        PgProductInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl ProductModifier for PostgresProductRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        product: &Product,
    ) -> error_stack::Result<(), KernelError> {
        PgProductInternal::create(con, product).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        product: &Product,
    ) -> error_stack::Result<(), KernelError> {
        PgProductInternal::update(con, product).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        product_id: &ProductId,
    ) -> error_stack::Result<(), KernelError> {
        PgProductInternal::delete(con, product_id).await
    }

    async fn delete_by_category(
        &self,
        con: &mut PostgresTransaction,
        category_id: &CategoryId,
    ) -> error_stack::Result<(), KernelError> {
        PgProductInternal::delete_by_category(con, category_id).await
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    available_quantity: i32,
    price: Decimal,
    category_id: Uuid,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(
            ProductId::new(row.id),
            ProductName::new(row.name),
            row.description.map(Description::new),
            StockQuantity::new(row.available_quantity),
            ProductPrice::new(row.price),
            CategoryId::new(row.category_id),
        )
    }
}

pub(in crate::database) struct PgProductInternal;

impl PgProductInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &ProductId,
    ) -> error_stack::Result<Option<Product>, KernelError> {
        let row = sqlx::query_as::<_, ProductRow>(
            // language=postgresql
            r#"
            SELECT id, name, description, available_quantity, price, category_id
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Product::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Product>, KernelError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            // language=postgresql
            r#"
            SELECT id, name, description, available_quantity, price, category_id
            FROM products
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        product: &Product,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO products (id, name, description, available_quantity, price, category_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(product.id().as_ref())
        .bind(product.name().as_ref())
        .bind(product.description().as_ref().map(|d| d.as_ref()))
        .bind(product.available_quantity().as_ref())
        .bind(product.price().as_ref())
        .bind(product.category_id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        product: &Product,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE products
            SET name = $2, description = $3, available_quantity = $4, price = $5, category_id = $6
            WHERE id = $1
            "#,
        )
        .bind(product.id().as_ref())
        .bind(product.name().as_ref())
        .bind(product.description().as_ref().map(|d| d.as_ref()))
        .bind(product.available_quantity().as_ref())
        .bind(product.price().as_ref())
        .bind(product.category_id().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        product_id: &ProductId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete_by_category(
        con: &mut PgConnection,
        category_id: &CategoryId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM products
            WHERE category_id = $1
            "#,
        )
        .bind(category_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
