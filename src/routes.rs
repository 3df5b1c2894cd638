use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::require_auth::RequireAuth;
use crate::models::Role;
use crate::views;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products")]
    Products,
    #[at("/products/:id")]
    ProductDetails { id: i64 },
    #[at("/cart")]
    Cart,
    #[at("/signin")]
    SignIn,
    #[at("/admin")]
    Admin,
    #[at("/admin/orders")]
    AdminOrders,
    #[at("/admin/products")]
    AdminProducts,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/inventory")]
    AdminInventory,
    #[at("/admin/sales")]
    AdminSales,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <views::Home /> },
        Route::Products => html! { <views::ProductList /> },
        Route::ProductDetails { id } => html! { <views::ProductDetails {id} /> },
        Route::Cart => html! { <views::CartView /> },
        Route::SignIn => html! { <views::SignIn /> },

        // Admin: todas las vistas pasan por el gate. El dashboard admite
        // cualquier rol autenticado; el resto restringe por allow-set.
        Route::Admin => html! {
            <RequireAuth>
                <views::admin::Dashboard />
            </RequireAuth>
        },
        Route::AdminOrders => html! {
            <RequireAuth roles={vec![Role::Admin, Role::OrderManager]}>
                <views::admin::AdminOrders />
            </RequireAuth>
        },
        Route::AdminProducts => html! {
            <RequireAuth roles={vec![Role::Admin, Role::ProductManager]}>
                <views::admin::AdminProducts />
            </RequireAuth>
        },
        Route::AdminUsers => html! {
            <RequireAuth roles={vec![Role::Admin]}>
                <views::admin::AdminUsers />
            </RequireAuth>
        },
        Route::AdminInventory => html! {
            <RequireAuth roles={vec![Role::Admin, Role::InventoryManager]}>
                <views::admin::AdminInventory />
            </RequireAuth>
        },
        Route::AdminSales => html! {
            <RequireAuth roles={vec![Role::Admin]}>
                <views::admin::AdminSales />
            </RequireAuth>
        },

        Route::NotFound => html! { <views::NotFound /> },
    }
}
