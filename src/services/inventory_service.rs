use serde_json::{json, Value};

use crate::models::{InventoryItem, NewInventory};
use crate::services::http::{ApiClient, ApiError};

pub async fn fetch_inventory() -> Result<Vec<InventoryItem>, ApiError> {
    let client = ApiClient::new();
    let items: Vec<InventoryItem> = client.get("/inventory").await?;
    log::info!("📊 Inventario cargado: {} registros", items.len());
    Ok(items)
}

pub async fn create_inventory(new_item: &NewInventory) -> Result<InventoryItem, ApiError> {
    let client = ApiClient::new();
    client.post("/inventory", new_item).await
}

pub async fn update_inventory(id: i64, capacity: i64) -> Result<InventoryItem, ApiError> {
    let client = ApiClient::new();
    client
        .put(&format!("/inventory/{}", id), &json!({ "capacity": capacity }))
        .await
}

pub async fn delete_inventory(id: i64) -> Result<(), ApiError> {
    let client = ApiClient::new();
    let _: Value = client.delete(&format!("/inventory/{}", id)).await?;
    Ok(())
}
