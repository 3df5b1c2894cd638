pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod sales;
pub mod users;

pub use dashboard::Dashboard;
pub use inventory::AdminInventory;
pub use orders::AdminOrders;
pub use products::AdminProducts;
pub use sales::AdminSales;
pub use users::AdminUsers;
