pub mod admin;
pub mod cart;
pub mod home;
pub mod not_found;
pub mod product_details;
pub mod product_list;
pub mod sign_in;

pub use cart::CartView;
pub use home::Home;
pub use not_found::NotFound;
pub use product_details::ProductDetails;
pub use product_list::ProductList;
pub use sign_in::SignIn;
