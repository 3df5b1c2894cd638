use serde::Deserialize;

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct PopularProduct {
    #[serde(default)]
    pub product_id: i64,
    pub name: String,
    #[serde(default)]
    pub units_sold: i64,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DemandForecast {
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub predicted_demand: f64,
}
