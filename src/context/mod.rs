pub mod auth;

pub use auth::{use_auth, AuthHandle, AuthProvider};
