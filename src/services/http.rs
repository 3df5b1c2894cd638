// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Adjunta el bearer token a cada petición y reintenta UNA vez tras un
// refresh silencioso cuando llega un 401. Un segundo 401 expira la sesión.
// ============================================================================

use futures::future::{select, Either};
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::CONFIG;
use crate::models::{LoginResponse, RefreshResponse};
use crate::utils::{
    broadcast, load_from_storage, remove_from_storage, save_to_storage, SESSION_EXPIRED_EVENT,
    STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired or unauthorized")]
    Unauthorized,
    #[error("resource not found")]
    NotFound,
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
}

enum Payload {
    None,
    Json(serde_json::Value),
    Csv(String),
}

/// Decide si un status amerita el único reintento tras refresh.
pub(crate) fn should_refresh(status: u16, already_retried: bool) -> bool {
    status == 401 && !already_retried
}

pub fn stored_access_token() -> Option<String> {
    load_from_storage(STORAGE_KEY_ACCESS_TOKEN)
}

pub fn store_tokens(response: &LoginResponse) {
    if let Err(e) = save_to_storage(STORAGE_KEY_ACCESS_TOKEN, &response.access_token) {
        log::error!("❌ Error guardando access token: {}", e);
    }
    if let Some(refresh) = &response.refresh_token {
        if let Err(e) = save_to_storage(STORAGE_KEY_REFRESH_TOKEN, refresh) {
            log::error!("❌ Error guardando refresh token: {}", e);
        }
    }
}

pub fn clear_tokens() {
    remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
    remove_from_storage(STORAGE_KEY_REFRESH_TOKEN);
}

/// Limpia credenciales y avisa al AuthProvider vía evento de window.
fn expire_session() {
    clear_tokens();
    broadcast(SESSION_EXPIRED_EVENT);
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
            timeout_ms: CONFIG.network_timeout_seconds.saturating_mul(1000),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute_json(Method::GET, path, Payload::None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.execute_json(Method::POST, path, json_payload(body)?).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute_json(Method::POST, path, Payload::None).await
    }

    pub async fn post_csv<T: DeserializeOwned>(
        &self,
        path: &str,
        csv: String,
    ) -> Result<T, ApiError> {
        self.execute_json(Method::POST, path, Payload::Csv(csv)).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.execute_json(Method::PUT, path, json_payload(body)?).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.execute_json(Method::PATCH, path, json_payload(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute_json(Method::DELETE, path, Payload::None).await
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<T, ApiError> {
        let response = self.execute(method, path, &payload).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Ejecuta la petición con la política de la app: timeout, bearer token,
    /// y exactamente un reintento tras refresh si el servidor devuelve 401.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> Result<Response, ApiError> {
        let mut retried = false;
        loop {
            let response = self.perform(method.clone(), path, payload).await?;
            if response.ok() {
                return Ok(response);
            }

            let status = response.status();
            if should_refresh(status, retried) {
                retried = true;
                if self.refresh_session().await {
                    log::info!("🔄 Sesión refrescada, reintentando petición original: {}", path);
                    continue;
                }
                log::warn!("⚠️ Refresh fallido, expirando sesión");
                expire_session();
                return Err(ApiError::Unauthorized);
            }

            return Err(match status {
                401 | 419 => {
                    expire_session();
                    ApiError::Unauthorized
                }
                404 => ApiError::NotFound,
                _ => {
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    ApiError::Server { status, message }
                }
            });
        }
    }

    /// Una petición HTTP cruda, con bearer token y timeout.
    async fn perform(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = RequestBuilder::new(&url).method(method);

        if let Some(token) = stored_access_token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match payload {
            Payload::None => builder.build(),
            Payload::Json(value) => builder.json(value),
            Payload::Csv(text) => builder
                .header("Content-Type", "text/csv")
                .body(JsValue::from_str(text)),
        }
        .map_err(|e| ApiError::Network(format!("request build error: {}", e)))?;

        self.send_with_timeout(request).await
    }

    async fn send_with_timeout(&self, request: Request) -> Result<Response, ApiError> {
        let timeout = TimeoutFuture::new(self.timeout_ms);
        match select(Box::pin(request.send()), Box::pin(timeout)).await {
            Either::Left((result, _)) => {
                result.map_err(|e| ApiError::Network(e.to_string()))
            }
            Either::Right(_) => Err(ApiError::Timeout),
        }
    }

    /// Refresh silencioso con el refresh token. No pasa por `execute` para
    /// no reintentar recursivamente.
    async fn refresh_session(&self) -> bool {
        let Some(refresh_token) = load_from_storage::<String>(STORAGE_KEY_REFRESH_TOKEN) else {
            return false;
        };

        let url = format!("{}/refresh", self.base_url);
        let request = match RequestBuilder::new(&url)
            .method(Method::POST)
            .header("Authorization", &format!("Bearer {}", refresh_token))
            .build()
        {
            Ok(request) => request,
            Err(_) => return false,
        };

        let response = match self.send_with_timeout(request).await {
            Ok(response) if response.ok() => response,
            _ => return false,
        };

        match response.json::<RefreshResponse>().await {
            Ok(refreshed) => {
                if let Err(e) = save_to_storage(STORAGE_KEY_ACCESS_TOKEN, &refreshed.access_token) {
                    log::error!("❌ Error guardando access token refrescado: {}", e);
                    return false;
                }
                true
            }
            Err(e) => {
                log::error!("❌ Respuesta de refresh inválida: {}", e);
                false
            }
        }
    }
}

fn json_payload(body: &impl Serialize) -> Result<Payload, ApiError> {
    serde_json::to_value(body)
        .map(Payload::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refreshes_exactly_once_per_request() {
        // Primer 401 dispara el refresh
        assert!(should_refresh(401, false));
        // Un segundo 401 consecutivo ya no reintenta
        assert!(!should_refresh(401, true));
    }

    #[test]
    fn only_unauthorized_triggers_refresh() {
        assert!(!should_refresh(500, false));
        assert!(!should_refresh(404, false));
        assert!(!should_refresh(200, false));
    }
}
