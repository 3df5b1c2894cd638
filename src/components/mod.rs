pub mod admin_sidebar;
pub mod require_auth;
pub mod store_nav;
pub mod toast;

pub use admin_sidebar::AdminSidebar;
pub use require_auth::RequireAuth;
pub use store_nav::StoreNav;
pub use toast::{use_toast, ToastProvider};
