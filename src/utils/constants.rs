/// Claves de localStorage y eventos globales de la app.
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "storefront_access_token";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "storefront_refresh_token";
pub const STORAGE_KEY_CART: &str = "storefront_cart";

/// Evento de window disparado por el API client cuando el refresh falla.
/// El AuthProvider lo escucha y fuerza el estado anónimo.
pub const SESSION_EXPIRED_EVENT: &str = "session-expired";

/// Evento de window disparado tras cada mutación del carrito. El badge
/// del header lo escucha para refrescarse sin esperar a una navegación.
pub const CART_UPDATED_EVENT: &str = "cart-updated";
