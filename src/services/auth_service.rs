use serde_json::Value;

use crate::models::{Credentials, LoginResponse, SessionUser};
use crate::services::http::{clear_tokens, store_tokens, ApiClient, ApiError};

/// Envía credenciales y guarda los bearer tokens devueltos. La identidad
/// NO se deriva de aquí: el caller debe validar la sesión a continuación.
pub async fn sign_in(credentials: &Credentials) -> Result<(), ApiError> {
    let client = ApiClient::new();
    log::info!("🔐 Iniciando sesión para usuario: {}", credentials.username);

    let response: LoginResponse = client.post("/login", credentials).await?;
    store_tokens(&response);
    Ok(())
}

/// Introspección server-side de la sesión. Única fuente de `{id, role}`.
pub async fn validate_session() -> Result<SessionUser, ApiError> {
    let client = ApiClient::new();
    client.get("/validate-token").await
}

/// Invalida la sesión en el servidor (best effort) y limpia los tokens.
pub async fn sign_out() {
    let client = ApiClient::new();
    if let Err(e) = client.post_empty::<Value>("/logout").await {
        log::warn!("⚠️ Logout en servidor falló (se ignora): {}", e);
    }
    clear_tokens();
    log::info!("👋 Sesión cerrada");
}
