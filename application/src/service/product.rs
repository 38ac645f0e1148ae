use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    CategoryQuery, DependOnCategoryQuery, DependOnProductQuery, ProductQuery,
};
use kernel::interface::update::{DependOnProductModifier, ProductModifier};
use kernel::prelude::entity::{
    CategoryId, Description, Product, ProductId, ProductName, ProductPrice, StockQuantity,
};
use kernel::KernelError;

use crate::transfer::{
    CreateProductDto, DeleteProductDto, ExistsProductDto, GetProductDto, UpdateProductDto,
};

const ENTITY: &str = "Product";

#[async_trait::async_trait]
pub trait CreateProductService:
    'static + Sync + Send + DependOnProductModifier + DependOnCategoryQuery
{
    async fn create_product(
        &self,
        dto: CreateProductDto,
    ) -> error_stack::Result<ProductId, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        // Every product must point at a category that exists.
        self.category_query()
            .find_by_id(&mut connection, &dto.category_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::not_found("Category", dto.category_id.as_ref()))
            })?;

        let id = ProductId::new(Uuid::new_v4());
        let product = Product::new(
            id.clone(),
            ProductName::new(dto.name),
            dto.description.map(Description::new),
            StockQuantity::new(dto.available_quantity),
            ProductPrice::new(dto.price),
            dto.category_id,
        );

        self.product_modifier()
            .create(&mut connection, &product)
            .await?;
        connection.commit().await?;

        Ok(id)
    }
}

impl<T> CreateProductService for T where T: DependOnProductModifier + DependOnCategoryQuery {}

#[async_trait::async_trait]
pub trait UpdateProductService:
    'static + Sync + Send + DependOnProductQuery + DependOnProductModifier + DependOnCategoryQuery
{
    async fn update_product(&self, dto: UpdateProductDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = dto.id.clone();
        let product = self
            .product_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, id.as_ref())))?;

        if let Some(category_id) = &dto.category_id {
            self.category_query()
                .find_by_id(&mut connection, category_id)
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::not_found("Category", category_id.as_ref()))
                })?;
        }

        let merged = merge_product(product, dto);
        self.product_modifier()
            .update(&mut connection, &merged)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> UpdateProductService for T where
    T: DependOnProductQuery + DependOnProductModifier + DependOnCategoryQuery
{
}

#[async_trait::async_trait]
pub trait GetAllProductService: 'static + Sync + Send + DependOnProductQuery {
    async fn get_all_products(&self) -> error_stack::Result<Vec<Product>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let products = self.product_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(products)
    }
}

impl<T> GetAllProductService for T where T: DependOnProductQuery {}

#[async_trait::async_trait]
pub trait GetProductService: 'static + Sync + Send + DependOnProductQuery {
    async fn get_product(&self, dto: GetProductDto) -> error_stack::Result<Product, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let product = self
            .product_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, dto.id.as_ref())))?;
        connection.commit().await?;

        Ok(product)
    }
}

impl<T> GetProductService for T where T: DependOnProductQuery {}

#[async_trait::async_trait]
pub trait ExistsProductService: 'static + Sync + Send + DependOnProductQuery {
    async fn exists_product(
        &self,
        dto: ExistsProductDto,
    ) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let found = self
            .product_query()
            .find_by_id(&mut connection, &dto.id)
            .await?;
        connection.commit().await?;

        Ok(found.is_some())
    }
}

impl<T> ExistsProductService for T where T: DependOnProductQuery {}

#[async_trait::async_trait]
pub trait DeleteProductService:
    'static + Sync + Send + DependOnProductQuery + DependOnProductModifier
{
    async fn delete_product(&self, dto: DeleteProductDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.product_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, dto.id.as_ref())))?;

        self.product_modifier()
            .delete(&mut connection, &dto.id)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteProductService for T where T: DependOnProductQuery + DependOnProductModifier {}

fn merge_product(product: Product, dto: UpdateProductDto) -> Product {
    product.reconstruct(|p| {
        if let Some(name) = dto.name {
            p.name = ProductName::new(name);
        }
        if let Some(description) = dto.description {
            p.description = Some(Description::new(description));
        }
        if let Some(quantity) = dto.available_quantity {
            p.available_quantity = StockQuantity::new(quantity);
        }
        if let Some(price) = dto.price {
            p.price = ProductPrice::new(price);
        }
        if let Some(category_id) = dto.category_id {
            p.category_id = category_id;
        }
    })
}

#[cfg(test)]
mod test {
    use super::merge_product;
    use crate::transfer::UpdateProductDto;
    use kernel::prelude::entity::{
        CategoryId, Description, Product, ProductId, ProductName, ProductPrice, StockQuantity,
    };
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn stored() -> Product {
        Product::new(
            ProductId::new(Uuid::new_v4()),
            ProductName::new("Keyboard"),
            Some(Description::new("Tenkeyless")),
            StockQuantity::new(12),
            ProductPrice::new(Decimal::new(19900, 2)),
            CategoryId::new(Uuid::new_v4()),
        )
    }

    #[test]
    fn price_only_update_keeps_other_fields() {
        let product = stored();
        let before = product.clone();
        let dto = UpdateProductDto {
            id: product.id().clone(),
            name: None,
            description: None,
            available_quantity: None,
            price: Some(Decimal::new(24900, 2)),
            category_id: None,
        };

        let merged = merge_product(product, dto);

        assert_eq!(*merged.price().as_ref(), Decimal::new(24900, 2));
        assert_eq!(merged.name(), before.name());
        assert_eq!(merged.description(), before.description());
        assert_eq!(merged.available_quantity(), before.available_quantity());
        assert_eq!(merged.category_id(), before.category_id());
    }

    #[test]
    fn category_can_be_repointed() {
        let product = stored();
        let new_category = CategoryId::new(Uuid::new_v4());
        let dto = UpdateProductDto {
            id: product.id().clone(),
            name: None,
            description: None,
            available_quantity: None,
            price: None,
            category_id: Some(new_category.clone()),
        };

        let merged = merge_product(product, dto);
        assert_eq!(merged.category_id(), &new_category);
    }
}
