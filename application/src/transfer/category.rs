use kernel::prelude::entity::CategoryId;

pub struct CreateCategoryDto {
    pub name: String,
    pub description: Option<String>,
}

pub struct UpdateCategoryDto {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
}

pub struct GetCategoryDto {
    pub id: CategoryId,
}

pub struct ExistsCategoryDto {
    pub id: CategoryId,
}

pub struct DeleteCategoryDto {
    pub id: CategoryId,
}
