// ============================================================================
// STOREFRONT PWA - TIENDA ONLINE + CONSOLA DE ADMINISTRACIÓN (RUST + YEW)
// ============================================================================
// - views: páginas de la tienda y del admin (solo render + estado local)
// - components: shell de navegación, gate de acceso, toasts
// - services: SOLO comunicación HTTP con el backend REST
// - context/state: sesión process-wide con un único escritor
// - models: espejos serde del JSON del backend
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;
