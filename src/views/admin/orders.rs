// ============================================================================
// ADMIN ORDERS - gestión de pedidos y devoluciones
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{use_toast, AdminSidebar};
use crate::models::{Order, ReturnRequest, ORDER_STATUSES, RETURN_ACTIONS};
use crate::services::order_service;
use crate::utils::{format_date, format_price};

#[function_component(AdminOrders)]
pub fn admin_orders() -> Html {
    let orders = use_state(Vec::<Order>::new);
    let returns = use_state(Vec::<ReturnRequest>::new);
    let loading = use_state(|| true);
    let toast = use_toast();

    {
        let orders = orders.clone();
        let returns = returns.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match order_service::fetch_orders().await {
                    Ok(fetched) => orders.set(fetched),
                    Err(e) => toast.error(format!("Could not load orders: {}", e)),
                }
                match order_service::fetch_returns().await {
                    Ok(fetched) => returns.set(fetched),
                    Err(e) => toast.error(format!("Could not load returns: {}", e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_status_change = {
        let orders = orders.clone();
        let toast = toast.clone();
        Callback::from(move |(order_id, status): (i64, String)| {
            let orders = orders.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match order_service::update_order_status(order_id, &status).await {
                    // La fila local se reemplaza con la versión del servidor
                    Ok(updated) => {
                        let refreshed = orders
                            .iter()
                            .map(|o| if o.id == updated.id { updated.clone() } else { o.clone() })
                            .collect();
                        orders.set(refreshed);
                        toast.success(format!("Order #{} is now {}", order_id, status));
                    }
                    Err(e) => toast.error(format!("Could not update order #{}: {}", order_id, e)),
                }
            });
        })
    };

    let on_invoice = {
        let toast = toast.clone();
        Callback::from(move |order_id: i64| {
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match order_service::generate_invoice(order_id).await {
                    Ok(()) => toast.success(format!("Invoice generated for order #{}", order_id)),
                    Err(e) => toast.error(format!("Invoice failed: {}", e)),
                }
            });
        })
    };

    let on_return_action = {
        let returns = returns.clone();
        let toast = toast.clone();
        Callback::from(move |(return_id, action): (i64, String)| {
            let returns = returns.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match order_service::update_return_status(return_id, &action).await {
                    Ok(updated) => {
                        let refreshed = returns
                            .iter()
                            .map(|r| if r.id == updated.id { updated.clone() } else { r.clone() })
                            .collect();
                        returns.set(refreshed);
                        toast.success(format!("Return #{} marked {}", return_id, action));
                    }
                    Err(e) => toast.error(format!("Could not update return #{}: {}", return_id, e)),
                }
            });
        })
    };

    html! {
        <div class="admin-layout">
            <AdminSidebar />
            <main class="admin-content orders">
                <h1>{"Orders"}</h1>
                {
                    if *loading {
                        html! { <div class="spinner">{"Loading orders..."}</div> }
                    } else if orders.is_empty() {
                        html! { <p class="empty-state">{"No orders yet."}</p> }
                    } else {
                        html! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>{"#"}</th>
                                        <th>{"Date"}</th>
                                        <th>{"Customer"}</th>
                                        <th>{"Total"}</th>
                                        <th>{"Status"}</th>
                                        <th>{"Invoice"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {
                                        orders.iter().map(|order| {
                                            let select = {
                                                let on_status_change = on_status_change.clone();
                                                let id = order.id;
                                                Callback::from(move |e: Event| {
                                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                                    on_status_change.emit((id, select.value()));
                                                })
                                            };
                                            let invoice = {
                                                let on_invoice = on_invoice.clone();
                                                let id = order.id;
                                                Callback::from(move |_| on_invoice.emit(id))
                                            };
                                            html! {
                                                <tr key={order.id}>
                                                    <td>{order.id}</td>
                                                    <td>{format_date(order.created_at.as_deref())}</td>
                                                    <td>{order.customer_email.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                    <td>{format_price(order.total_amount)}</td>
                                                    <td>
                                                        <select onchange={select}>
                                                            {
                                                                ORDER_STATUSES.iter().map(|status| html! {
                                                                    <option value={*status}
                                                                            selected={order.status == *status}>
                                                                        {*status}
                                                                    </option>
                                                                }).collect::<Html>()
                                                            }
                                                        </select>
                                                    </td>
                                                    <td>
                                                        <button class="invoice-button" onclick={invoice}>{"🧾"}</button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect::<Html>()
                                    }
                                </tbody>
                            </table>
                        }
                    }
                }

                <h2>{"Returns"}</h2>
                {
                    if returns.is_empty() {
                        html! { <p class="empty-state">{"No return requests."}</p> }
                    } else {
                        html! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>{"#"}</th>
                                        <th>{"Order"}</th>
                                        <th>{"Reason"}</th>
                                        <th>{"Status"}</th>
                                        <th>{"Resolve"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {
                                        returns.iter().map(|request| {
                                            let id = request.id;
                                            let actions = RETURN_ACTIONS.iter().map(|action| {
                                                let on_return_action = on_return_action.clone();
                                                let action_str = action.to_string();
                                                let click = Callback::from(move |_| {
                                                    on_return_action.emit((id, action_str.clone()));
                                                });
                                                html! {
                                                    <button class="return-action" onclick={click}>{*action}</button>
                                                }
                                            }).collect::<Html>();
                                            html! {
                                                <tr key={request.id}>
                                                    <td>{request.id}</td>
                                                    <td>{request.order_id}</td>
                                                    <td>{&request.reason}</td>
                                                    <td>{&request.status}</td>
                                                    <td class="return-actions">{actions}</td>
                                                </tr>
                                            }
                                        }).collect::<Html>()
                                    }
                                </tbody>
                            </table>
                        }
                    }
                }
            </main>
        </div>
    }
}
