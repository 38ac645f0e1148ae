use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CategoryTransformer, CreateCategoryRequest, DeleteCategoryRequest, ExistsCategoryRequest,
    GetCategoryRequest, UpdateCategoryRequest,
};
use crate::response::CategoryPresenter;
use crate::route::parse_id;
use crate::validate::Valid;
use application::service::{
    CreateCategoryService, DeleteCategoryService, ExistsCategoryService, GetAllCategoryService,
    GetCategoryService, UpdateCategoryService,
};
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::Router;

pub trait CategoryRouter {
    fn route_category(self) -> Self;
}

impl CategoryRouter for Router<AppModule> {
    fn route_category(self) -> Self {
        self.route(
            "/api/v1/category",
            get(|State(handler): State<AppModule>, uri: Uri| async move {
                Controller::new((), CategoryPresenter)
                    .bypass(|| handler.database().get_all_categories())
                    .await
                    .map_err(|report| ErrorStatus::kernel(report, uri.path()))
            })
            .post(
                |State(handler): State<AppModule>,
                 uri: Uri,
                 Valid(req): Valid<CreateCategoryRequest>| async move {
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .intake(req)
                        .handle(|dto| handler.database().create_category(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            )
            .put(
                |State(handler): State<AppModule>,
                 uri: Uri,
                 Valid(req): Valid<UpdateCategoryRequest>| async move {
                    Controller::new(CategoryTransformer, ())
                        .intake(req)
                        .bypass(|dto| handler.database().update_category(dto))
                        .await
                        .map(|()| StatusCode::ACCEPTED)
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
        .route(
            "/api/v1/category/exits/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .intake(ExistsCategoryRequest::new(id))
                        .handle(|dto| handler.database().exists_category(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
        .route(
            "/api/v1/category/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .intake(GetCategoryRequest::new(id))
                        .handle(|dto| handler.database().get_category(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(CategoryTransformer, ())
                        .intake(DeleteCategoryRequest::new(id))
                        .bypass(|dto| handler.database().delete_category(dto))
                        .await
                        .map(|()| StatusCode::NO_CONTENT)
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
    }
}
