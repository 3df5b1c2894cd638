use serde_json::json;

use crate::models::{AccountUser, NewUser, RoleRecord};
use crate::services::http::{ApiClient, ApiError};

pub async fn register_user(new_user: &NewUser) -> Result<AccountUser, ApiError> {
    let client = ApiClient::new();
    let user: AccountUser = client.post("/register", new_user).await?;
    log::info!("👤 Usuario '{}' registrado con rol {}", user.username, new_user.role_id);
    Ok(user)
}

pub async fn create_role(name: &str) -> Result<RoleRecord, ApiError> {
    let client = ApiClient::new();
    client.post("/roles", &json!({ "name": name })).await
}
