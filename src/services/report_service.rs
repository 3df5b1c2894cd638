use crate::models::{DemandForecast, PopularProduct};
use crate::services::http::{ApiClient, ApiError};

pub async fn most_popular_products() -> Result<Vec<PopularProduct>, ApiError> {
    let client = ApiClient::new();
    client.get("/report/most-popular-products").await
}

pub async fn predict_demand(product_id: i64) -> Result<DemandForecast, ApiError> {
    let client = ApiClient::new();
    client
        .get(&format!("/report/predict-demand/{}", product_id))
        .await
}
