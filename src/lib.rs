pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::handler::{evaluate, handle, handle_query};
pub use domain::model::{ApiRequest, ApiResponse, NumberProperties, NumericValue, Property};
pub use utils::error::{Fault, Result};
