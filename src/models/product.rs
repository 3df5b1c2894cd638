use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub inventory_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock_level: i64,
    // Precio con promoción aplicada; lo calcula el servidor, nunca el cliente
    #[serde(default)]
    pub discounted_price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub promotion_id: Option<i64>,
}

impl Product {
    /// Precio a cobrar: el descontado del servidor si existe.
    pub fn effective_price(&self) -> f64 {
        self.discounted_price.unwrap_or(self.price)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct NewProduct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub stock_level: i64,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct Promotion {
    pub id: i64,
    pub product_id: i64,
    pub discount_percentage: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewPromotion {
    pub product_id: i64,
    pub discount_percentage: f64,
    pub start_date: String,
    pub end_date: String,
}

/// Resultado del upload CSV; el backend es dueño de la forma exacta.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct UploadReport {
    #[serde(default)]
    pub created: usize,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_price_prefers_server_discount() {
        let mut product = Product {
            id: 1,
            category_id: None,
            inventory_id: None,
            name: "Smartwatch Pro".to_string(),
            description: None,
            price: 199.99,
            stock_level: 10,
            discounted_price: None,
            image_url: None,
            promotion_id: None,
        };
        assert_eq!(product.effective_price(), 199.99);

        product.discounted_price = Some(149.99);
        assert_eq!(product.effective_price(), 149.99);
    }
}
