// ============================================================================
// ADMIN DASHBOARD - resumen operativo
// ============================================================================

use yew::prelude::*;

use crate::components::{use_toast, AdminSidebar};
use crate::context::use_auth;
use crate::models::{InventoryItem, Order, ReturnRequest};
use crate::services::{inventory_service, order_service};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let orders = use_state(Vec::<Order>::new);
    let inventory = use_state(Vec::<InventoryItem>::new);
    let returns = use_state(Vec::<ReturnRequest>::new);
    let toast = use_toast();

    {
        let orders = orders.clone();
        let inventory = inventory.clone();
        let returns = returns.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // Cada panel carga por separado; un fallo no tumba el resto
                match order_service::fetch_orders().await {
                    Ok(fetched) => orders.set(fetched),
                    Err(e) => toast.error(format!("Could not load orders: {}", e)),
                }
                match inventory_service::fetch_inventory().await {
                    Ok(fetched) => inventory.set(fetched),
                    Err(e) => toast.error(format!("Could not load inventory: {}", e)),
                }
                match order_service::fetch_returns().await {
                    Ok(fetched) => returns.set(fetched),
                    Err(e) => toast.error(format!("Could not load returns: {}", e)),
                }
            });
            || ()
        });
    }

    let pending_orders = orders.iter().filter(|o| o.status == "pending").count();
    let low_stock = inventory.iter().filter(|i| i.is_low()).count();
    let open_returns = returns.iter().filter(|r| r.status == "pending").count();

    let greeting = auth
        .phase
        .role()
        .map(|role| format!("Signed in as {}", role.display_name()))
        .unwrap_or_default();

    html! {
        <div class="admin-layout">
            <AdminSidebar />
            <main class="admin-content dashboard">
                <h1>{"Dashboard"}</h1>
                <p class="greeting">{greeting}</p>
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-value">{orders.len()}</span>
                        <span class="stat-label">{"Orders"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{pending_orders}</span>
                        <span class="stat-label">{"Pending orders"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{inventory.len()}</span>
                        <span class="stat-label">{"Inventory records"}</span>
                    </div>
                    <div class={classes!("stat-card", (low_stock > 0).then_some("alert"))}>
                        <span class="stat-value">{low_stock}</span>
                        <span class="stat-label">{"Low stock"}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{open_returns}</span>
                        <span class="stat-label">{"Open returns"}</span>
                    </div>
                </div>
                {
                    if low_stock > 0 {
                        html! {
                            <section class="low-stock-panel">
                                <h2>{"Low stock categories"}</h2>
                                <ul>
                                    {
                                        inventory.iter().filter(|i| i.is_low()).map(|item| html! {
                                            <li key={item.id}>
                                                {format!("Category {}: {} left (threshold {})",
                                                    item.category_id, item.capacity, item.threshold)}
                                            </li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }
            </main>
        </div>
    }
}
