use serde_json::{json, Value};

use crate::models::{NewOrder, Order, ReturnRequest};
use crate::services::http::{ApiClient, ApiError};

pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    let client = ApiClient::new();
    let orders: Vec<Order> = client.get("/orders").await?;
    log::info!("🧾 Pedidos cargados: {}", orders.len());
    Ok(orders)
}

/// Cambia el estado de un pedido; devuelve el pedido confirmado por el
/// servidor (con totales recalculados) para reemplazar la fila local.
pub async fn update_order_status(id: i64, status: &str) -> Result<Order, ApiError> {
    let client = ApiClient::new();
    client
        .patch(&format!("/order/{}", id), &json!({ "status": status }))
        .await
}

pub async fn generate_invoice(order_id: i64) -> Result<(), ApiError> {
    let client = ApiClient::new();
    let _: Value = client
        .post_empty(&format!("/order/{}/invoice", order_id))
        .await?;
    log::info!("🧾 Factura generada para pedido {}", order_id);
    Ok(())
}

pub async fn fetch_returns() -> Result<Vec<ReturnRequest>, ApiError> {
    let client = ApiClient::new();
    client.get("/returns").await
}

pub async fn update_return_status(id: i64, status: &str) -> Result<ReturnRequest, ApiError> {
    let client = ApiClient::new();
    client
        .put(&format!("/return/{}/status", id), &json!({ "status": status }))
        .await
}

/// Checkout del carrito. El total mostrado después viene del `Order`
/// confirmado por el servidor, nunca del cálculo local.
pub async fn create_order(order: &NewOrder) -> Result<Order, ApiError> {
    let client = ApiClient::new();
    client.post("/create_order", order).await
}
