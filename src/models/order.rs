use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub customer_id: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    // Total confirmado por el servidor (incluye descuentos)
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub customer_email: Option<String>,
}

/// Estados que acepta `PATCH /order/:id`.
pub const ORDER_STATUSES: [&str; 5] = ["pending", "processing", "shipped", "delivered", "cancelled"];

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewOrder {
    pub items: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ReturnRequest {
    pub id: i64,
    pub order_id: i64,
    pub reason: String,
    pub status: String,
}

/// Acciones que acepta `PUT /return/:id/status`.
pub const RETURN_ACTIONS: [&str; 3] = ["approved", "refunded", "replaced"];

#[cfg(test)]
mod tests {
    // Las vistas del admin importan las tablas desde crate::models
    #[test]
    fn status_tables_visible_from_models_root() {
        assert!(crate::models::ORDER_STATUSES.contains(&"pending"));
        assert!(crate::models::RETURN_ACTIONS.contains(&"refunded"));
    }
}
