use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateCustomerRequest, CustomerTransformer, DeleteCustomerRequest, ExistsCustomerRequest,
    GetCustomerRequest, UpdateCustomerRequest,
};
use crate::response::CustomerPresenter;
use crate::route::parse_id;
use crate::validate::Valid;
use application::service::{
    CreateCustomerService, DeleteCustomerService, ExistsCustomerService, GetAllCustomerService,
    GetCustomerService, UpdateCustomerService,
};
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::Router;

pub trait CustomerRouter {
    fn route_customer(self) -> Self;
}

impl CustomerRouter for Router<AppModule> {
    fn route_customer(self) -> Self {
        self.route(
            "/api/v1/customer",
            get(|State(handler): State<AppModule>, uri: Uri| async move {
                Controller::new((), CustomerPresenter)
                    .bypass(|| handler.database().get_all_customers())
                    .await
                    .map_err(|report| ErrorStatus::kernel(report, uri.path()))
            })
            .post(
                |State(handler): State<AppModule>,
                 uri: Uri,
                 Valid(req): Valid<CreateCustomerRequest>| async move {
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .intake(req)
                        .handle(|dto| handler.database().create_customer(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            )
            .put(
                |State(handler): State<AppModule>,
                 uri: Uri,
                 Valid(req): Valid<UpdateCustomerRequest>| async move {
                    Controller::new(CustomerTransformer, ())
                        .intake(req)
                        .bypass(|dto| handler.database().update_customer(dto))
                        .await
                        .map(|()| StatusCode::ACCEPTED)
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
        .route(
            "/api/v1/customer/exits/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .intake(ExistsCustomerRequest::new(id))
                        .handle(|dto| handler.database().exists_customer(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
        .route(
            "/api/v1/customer/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .intake(GetCustomerRequest::new(id))
                        .handle(|dto| handler.database().get_customer(dto))
                        .await
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<String>, uri: Uri| async move {
                    let id = parse_id(&id, &uri)?;
                    Controller::new(CustomerTransformer, ())
                        .intake(DeleteCustomerRequest::new(id))
                        .bypass(|dto| handler.database().delete_customer(dto))
                        .await
                        .map(|()| StatusCode::NO_CONTENT)
                        .map_err(|report| ErrorStatus::kernel(report, uri.path()))
                },
            ),
        )
    }
}
