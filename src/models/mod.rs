pub mod auth;
pub mod cart;
pub mod inventory;
pub mod order;
pub mod product;
pub mod report;
pub mod role;
pub mod user;

pub use auth::{Credentials, LoginResponse, RefreshResponse, SessionUser};
pub use cart::{Cart, CartItem};
pub use inventory::{InventoryItem, NewInventory};
pub use order::{NewOrder, Order, OrderLine, ReturnRequest, ORDER_STATUSES, RETURN_ACTIONS};
pub use product::{Category, NewProduct, NewPromotion, Product, Promotion, UploadReport};
pub use report::{DemandForecast, PopularProduct};
pub use role::Role;
pub use user::{AccountUser, NewUser, RoleRecord};
