use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{CategoryQuery, DependOnCategoryQuery};
use kernel::interface::update::{
    CategoryModifier, DependOnCategoryModifier, DependOnProductModifier, ProductModifier,
};
use kernel::prelude::entity::{Category, CategoryId, CategoryName, Description};
use kernel::KernelError;

use crate::transfer::{
    CreateCategoryDto, DeleteCategoryDto, ExistsCategoryDto, GetCategoryDto, UpdateCategoryDto,
};

const ENTITY: &str = "Category";

#[async_trait::async_trait]
pub trait CreateCategoryService: 'static + Sync + Send + DependOnCategoryModifier {
    async fn create_category(
        &self,
        dto: CreateCategoryDto,
    ) -> error_stack::Result<CategoryId, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CategoryId::new(Uuid::new_v4());
        let category = Category::new(
            id.clone(),
            CategoryName::new(dto.name),
            dto.description.map(Description::new),
        );

        self.category_modifier()
            .create(&mut connection, &category)
            .await?;
        connection.commit().await?;

        Ok(id)
    }
}

impl<T> CreateCategoryService for T where T: DependOnCategoryModifier {}

#[async_trait::async_trait]
pub trait UpdateCategoryService:
    'static + Sync + Send + DependOnCategoryQuery + DependOnCategoryModifier
{
    async fn update_category(
        &self,
        dto: UpdateCategoryDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = dto.id.clone();
        let category = self
            .category_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, id.as_ref())))?;

        let merged = merge_category(category, dto);
        self.category_modifier()
            .update(&mut connection, &merged)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> UpdateCategoryService for T where T: DependOnCategoryQuery + DependOnCategoryModifier {}

#[async_trait::async_trait]
pub trait GetAllCategoryService: 'static + Sync + Send + DependOnCategoryQuery {
    async fn get_all_categories(&self) -> error_stack::Result<Vec<Category>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let categories = self.category_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(categories)
    }
}

impl<T> GetAllCategoryService for T where T: DependOnCategoryQuery {}

#[async_trait::async_trait]
pub trait GetCategoryService: 'static + Sync + Send + DependOnCategoryQuery {
    async fn get_category(
        &self,
        dto: GetCategoryDto,
    ) -> error_stack::Result<Category, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let category = self
            .category_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, dto.id.as_ref())))?;
        connection.commit().await?;

        Ok(category)
    }
}

impl<T> GetCategoryService for T where T: DependOnCategoryQuery {}

#[async_trait::async_trait]
pub trait ExistsCategoryService: 'static + Sync + Send + DependOnCategoryQuery {
    async fn exists_category(
        &self,
        dto: ExistsCategoryDto,
    ) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let found = self
            .category_query()
            .find_by_id(&mut connection, &dto.id)
            .await?;
        connection.commit().await?;

        Ok(found.is_some())
    }
}

impl<T> ExistsCategoryService for T where T: DependOnCategoryQuery {}

#[async_trait::async_trait]
pub trait DeleteCategoryService:
    'static + Sync + Send + DependOnCategoryQuery + DependOnCategoryModifier + DependOnProductModifier
{
    /// Owned products go first so no product is ever left pointing at a
    /// missing category. Both deletes share one transaction; any failure
    /// before the commit rolls the whole operation back.
    async fn delete_category(
        &self,
        dto: DeleteCategoryDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.category_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| Report::new(KernelError::not_found(ENTITY, dto.id.as_ref())))?;

        self.product_modifier()
            .delete_by_category(&mut connection, &dto.id)
            .await?;
        self.category_modifier()
            .delete(&mut connection, &dto.id)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteCategoryService for T where
    T: DependOnCategoryQuery + DependOnCategoryModifier + DependOnProductModifier
{
}

fn merge_category(category: Category, dto: UpdateCategoryDto) -> Category {
    category.reconstruct(|c| {
        if let Some(name) = dto.name {
            c.name = CategoryName::new(name);
        }
        if let Some(description) = dto.description {
            c.description = Some(Description::new(description));
        }
    })
}

#[cfg(test)]
mod test {
    use super::merge_category;
    use crate::transfer::UpdateCategoryDto;
    use kernel::prelude::entity::{Category, CategoryId, CategoryName, Description};
    use uuid::Uuid;

    #[test]
    fn name_only_update_keeps_description() {
        let category = Category::new(
            CategoryId::new(Uuid::new_v4()),
            CategoryName::new("Peripherals"),
            Some(Description::new("Input devices")),
        );
        let dto = UpdateCategoryDto {
            id: category.id().clone(),
            name: Some("Accessories".to_string()),
            description: None,
        };

        let merged = merge_category(category, dto);

        assert_eq!(merged.name().as_ref(), "Accessories");
        assert_eq!(
            merged.description().as_ref().map(|d| d.as_ref().as_str()),
            Some("Input devices")
        );
    }
}
