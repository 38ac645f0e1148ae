use axum::http::Uri;
use error_stack::Report;
use kernel::KernelError;
use uuid::Uuid;

use crate::error::ErrorStatus;

pub use self::{category::*, customer::*, product::*};

mod category;
mod customer;
mod product;

fn parse_id(raw: &str, uri: &Uri) -> Result<Uuid, ErrorStatus> {
    Uuid::parse_str(raw).map_err(|_| {
        ErrorStatus::kernel(
            Report::new(KernelError::invalid_argument(format!(
                "Invalid id: {raw}"
            ))),
            uri.path(),
        )
    })
}
