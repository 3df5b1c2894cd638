use serde_json::Value;

use crate::models::{Category, NewProduct, NewPromotion, Product, Promotion, UploadReport};
use crate::services::http::{ApiClient, ApiError};

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let client = ApiClient::new();
    let products: Vec<Product> = client.get("/products").await?;
    log::info!("📦 Productos cargados: {}", products.len());
    Ok(products)
}

pub async fn fetch_product(id: i64) -> Result<Product, ApiError> {
    let client = ApiClient::new();
    client.get(&format!("/products/{}", id)).await
}

pub async fn create_product(new_product: &NewProduct) -> Result<Product, ApiError> {
    let client = ApiClient::new();
    client.post("/products", new_product).await
}

pub async fn update_product(id: i64, changes: &NewProduct) -> Result<Product, ApiError> {
    let client = ApiClient::new();
    client.put(&format!("/products/{}", id), changes).await
}

pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    let client = ApiClient::new();
    let _: Value = client.delete(&format!("/products/{}", id)).await?;
    Ok(())
}

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let client = ApiClient::new();
    client.get("/categories").await
}

/// Carga masiva de productos en CSV (cabecera + una fila por producto).
pub async fn upload_products_csv(csv: String) -> Result<UploadReport, ApiError> {
    let client = ApiClient::new();
    let report: UploadReport = client.post_csv("/upload-products", csv).await?;
    log::info!("📤 CSV subido: {} productos creados, {} errores",
        report.created, report.errors.len());
    Ok(report)
}

pub async fn create_promotion(promotion: &NewPromotion) -> Result<Promotion, ApiError> {
    let client = ApiClient::new();
    client.post("/promotions", promotion).await
}
