pub use self::{category::*, customer::*, product::*};

mod category;
mod customer;
mod product;
