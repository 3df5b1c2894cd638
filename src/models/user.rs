use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AccountUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role_id: Option<u8>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role_id: u8,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RoleRecord {
    pub id: i64,
    pub name: String,
}
