use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateProductRequest, DeleteProductRequest, ExistsProductRequest, GetProductRequest,
    ProductTransformer, UpdateProductRequest,
};
use crate::response::ProductPresenter;
use crate::route::parse_id;
use crate::validate::Valid;
use application::service::{
    CreateProductService, DeleteProductService, ExistsProductService, GetAllProductService,
    GetProductService, UpdateProductService,
};
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::Router;

pub trait ProductRouter {
    fn route_product(self) -> Self;
}

impl ProductRouter for Router<AppModule> {
    fn route_product(self) -> Self {
        self.route(
            "/api/v1/product",
            get(|State(handler): State<AppModule>, uri: Uri| async move {
                Controller::new((), ProductPresenter)
                    .bypass(|| handler.database().get_all_products())
                    .await
                    .map_err(|report| ErrorStatus::kernel(report, uri.path()))
            })
            .post(
                |State(handler): State<AppModule>,
                 uri: Uri,
                 Valid(req): Valid<CreateProductRequest>| async move {
                    Controller::new(ProductTransformer, ProductPresenter)
                        .intake(req)
                        .handle(|dto| handler.database().create_product(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            )
            .put(
                |State(handler): State<AppModule>,
                 uri: Uri,
                 Valid(req): Valid<UpdateProductRequest>| async move {
                    Controller::new(ProductTransformer, ())
                        .intake(req)
                        .bypass(|dto| handler.database().update_product(dto))
                        .await
                        .map(|()| StatusCode::ACCEPTED)
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
        .route(
            "/api/v1/product/exits/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(ProductTransformer, ProductPresenter)
                        .intake(ExistsProductRequest::new(id))
                        .handle(|dto| handler.database().exists_product(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
        .route(
            "/api/v1/product/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(ProductTransformer, ProductPresenter)
                        .intake(GetProductRequest::new(id))
                        .handle(|dto| handler.database().get_product(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(ProductTransformer, ())
                        .intake(DeleteProductRequest::new(id))
                        .bypass(|dto| handler.database().delete_product(dto))
                        .await
                        .map(|()| StatusCode::NO_CONTENT)
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
    }
}
