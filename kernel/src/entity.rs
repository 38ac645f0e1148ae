pub use self::{category::*, common::*, customer::*, product::*};

mod category;
mod common;
mod customer;
mod product;
