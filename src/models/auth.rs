use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Identidad derivada que devuelve `GET /validate-token`. La sesión es
/// verificada por el servidor; el token local nunca se decodifica.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct SessionUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RefreshResponse {
    pub access_token: String,
}
