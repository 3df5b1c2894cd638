pub mod auth_service;
pub mod http;
pub mod inventory_service;
pub mod order_service;
pub mod product_service;
pub mod report_service;
pub mod user_service;

pub use http::{ApiClient, ApiError};
