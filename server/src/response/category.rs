use crate::controller::Exhaust;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{Category, CategoryId, CategoryName, Description, DestructCategory};
use serde::Serialize;

#[derive(Debug)]
pub struct CreatedCategoryResponse {
    id: CategoryId,
}

impl IntoResponse for CreatedCategoryResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.id.as_ref().to_string()).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    id: CategoryId,
    name: CategoryName,
    description: Option<Description>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        let DestructCategory {
            id,
            name,
            description,
        } = category.into_destruct();
        CategoryResponse {
            id,
            name,
            description,
        }
    }
}

impl IntoResponse for CategoryResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct CategoryPresenter;

impl Exhaust<CategoryId> for CategoryPresenter {
    type To = CreatedCategoryResponse;
    fn emit(&self, input: CategoryId) -> Self::To {
        CreatedCategoryResponse { id: input }
    }
}

impl Exhaust<Category> for CategoryPresenter {
    type To = CategoryResponse;
    fn emit(&self, input: Category) -> Self::To {
        CategoryResponse::from(input)
    }
}

impl Exhaust<Vec<Category>> for CategoryPresenter {
    type To = axum::Json<Vec<CategoryResponse>>;
    fn emit(&self, input: Vec<Category>) -> Self::To {
        let result = input
            .into_iter()
            .map(CategoryResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}

impl Exhaust<bool> for CategoryPresenter {
    type To = axum::Json<bool>;
    fn emit(&self, input: bool) -> Self::To {
        axum::Json::from(input)
    }
}
