// ============================================================================
// ADMIN SIDEBAR - shell de navegación filtrado por rol
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_auth;
use crate::models::Role;
use crate::routes::Route;

pub struct NavEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
    pub allowed: &'static [Role],
}

/// Tabla estática de links del admin con su allow-set. Un link es visible
/// sii el rol de la sesión pertenece a su conjunto.
pub const ADMIN_LINKS: [NavEntry; 6] = [
    NavEntry {
        label: "Dashboard",
        icon: "📊",
        route: Route::Admin,
        allowed: &Role::ALL,
    },
    NavEntry {
        label: "Orders",
        icon: "🧾",
        route: Route::AdminOrders,
        allowed: &[Role::Admin, Role::OrderManager],
    },
    NavEntry {
        label: "Products",
        icon: "🏷️",
        route: Route::AdminProducts,
        allowed: &[Role::Admin, Role::ProductManager],
    },
    NavEntry {
        label: "Inventory",
        icon: "📦",
        route: Route::AdminInventory,
        allowed: &[Role::Admin, Role::InventoryManager],
    },
    NavEntry {
        label: "Users",
        icon: "👥",
        route: Route::AdminUsers,
        allowed: &[Role::Admin],
    },
    NavEntry {
        label: "Sales",
        icon: "💰",
        route: Route::AdminSales,
        allowed: &[Role::Admin],
    },
];

/// Función pura de {rol} → {links visibles}; se recalcula en cada render.
pub fn visible_links(role: Role) -> Vec<&'static NavEntry> {
    ADMIN_LINKS.iter().filter(|l| l.allowed.contains(&role)).collect()
}

#[function_component(AdminSidebar)]
pub fn admin_sidebar() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("AdminSidebar necesita un Router");
    let is_open = use_state(|| true);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(!*is_open))
    };

    let on_logout = {
        let sign_out = auth.sign_out.clone();
        Callback::from(move |_| {
            sign_out.emit(());
            navigator.replace(&Route::SignIn);
        })
    };

    // Sin rol resuelto no hay nada que mostrar (el gate ya filtra antes)
    let Some(role) = auth.phase.role() else {
        return html! {};
    };

    let links = visible_links(role);

    html! {
        <aside class={classes!("sidebar", if *is_open { "expanded" } else { "collapsed" })}>
            <div class="sidebar-header">
                <h2 class="brand">{"E-Commerce"}</h2>
                <button class="menu-button" onclick={toggle}>{"☰"}</button>
            </div>
            <nav class="nav-menu">
                {
                    links.iter().map(|entry| html! {
                        <Link<Route> to={entry.route.clone()} classes="nav-link">
                            <span class="nav-icon">{entry.icon}</span>
                            { if *is_open { html!{ <span class="nav-label">{entry.label}</span> } } else { html!{} } }
                        </Link<Route>>
                    }).collect::<Html>()
                }
            </nav>
            <div class="sidebar-footer">
                <span class="role-badge">{role.display_name()}</span>
                <button class="logout-button" onclick={on_logout}>
                    {"🚪"}{ if *is_open { " Logout" } else { "" } }
                </button>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Role) -> Vec<&'static str> {
        visible_links(role).iter().map(|l| l.label).collect()
    }

    #[test]
    fn admin_sees_every_link() {
        assert_eq!(
            labels(Role::Admin),
            vec!["Dashboard", "Orders", "Products", "Inventory", "Users", "Sales"]
        );
    }

    #[test]
    fn managers_see_dashboard_plus_their_area() {
        assert_eq!(labels(Role::OrderManager), vec!["Dashboard", "Orders"]);
        assert_eq!(labels(Role::ProductManager), vec!["Dashboard", "Products"]);
        assert_eq!(labels(Role::InventoryManager), vec!["Dashboard", "Inventory"]);
    }

    #[test]
    fn users_and_sales_are_admin_only() {
        for role in [Role::ProductManager, Role::OrderManager, Role::InventoryManager] {
            let visible = labels(role);
            assert!(!visible.contains(&"Users"));
            assert!(!visible.contains(&"Sales"));
        }
    }
}
