pub mod fun_fact;
pub mod handler;
pub mod input;
pub mod predicates;

pub use crate::domain::model::{ApiRequest, ApiResponse, NumberProperties, NumericValue, Property};
pub use crate::utils::error::Result;
