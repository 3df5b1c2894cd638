// ============================================================================
// CART - carrito local + checkout contra el servidor
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_toast, StoreNav};
use crate::models::{Cart, NewOrder, Order, OrderLine};
use crate::routes::Route;
use crate::services::order_service;
use crate::utils::format_price;

#[function_component(CartView)]
pub fn cart_view() -> Html {
    let cart = use_state(Cart::load);
    let placing = use_state(|| false);
    // Pedido confirmado por el servidor tras el checkout; su total manda
    let confirmed = use_state(|| None::<Order>);
    let toast = use_toast();

    let change_quantity = {
        let cart = cart.clone();
        Callback::from(move |(product_id, delta): (i64, i32)| {
            let mut updated = (*cart).clone();
            updated.change_quantity(product_id, delta);
            updated.save();
            cart.set(updated);
        })
    };

    let remove = {
        let cart = cart.clone();
        Callback::from(move |product_id: i64| {
            let mut updated = (*cart).clone();
            updated.remove(product_id);
            updated.save();
            cart.set(updated);
        })
    };

    let checkout = {
        let cart = cart.clone();
        let placing = placing.clone();
        let confirmed = confirmed.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            if cart.is_empty() || *placing {
                return;
            }
            let order = NewOrder {
                items: cart
                    .items
                    .iter()
                    .map(|item| OrderLine {
                        product_id: item.product_id,
                        quantity: item.quantity,
                    })
                    .collect(),
                customer_email: None,
            };
            placing.set(true);

            let cart = cart.clone();
            let placing = placing.clone();
            let confirmed = confirmed.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match order_service::create_order(&order).await {
                    Ok(placed) => {
                        log::info!("🛒 Pedido {} creado, total {}", placed.id, placed.total_amount);
                        Cart::clear();
                        cart.set(Cart::default());
                        confirmed.set(Some(placed));
                    }
                    Err(e) => toast.error(format!("Checkout failed: {}", e)),
                }
                placing.set(false);
            });
        })
    };

    html! {
        <div class="page cart-page">
            <StoreNav />
            <h1>{"Your Cart"}</h1>
            {
                if let Some(order) = &*confirmed {
                    html! {
                        <div class="order-confirmation">
                            <h2>{"Order placed!"}</h2>
                            <p>{format!("Order #{}", order.id)}</p>
                            // Total con descuentos según el servidor
                            <p class="total">{"Total charged: "}{format_price(order.total_amount)}</p>
                            <Link<Route> to={Route::Products} classes="cta-button">
                                {"Keep shopping"}
                            </Link<Route>>
                        </div>
                    }
                } else if cart.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"Your cart is empty."}</p>
                            <Link<Route> to={Route::Products} classes="cta-button">
                                {"Browse products"}
                            </Link<Route>>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <table class="cart-table">
                                <thead>
                                    <tr>
                                        <th>{"Product"}</th>
                                        <th>{"Unit price"}</th>
                                        <th>{"Quantity"}</th>
                                        <th>{"Subtotal"}</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {
                                        cart.items.iter().map(|item| {
                                            let decrement = {
                                                let change_quantity = change_quantity.clone();
                                                let id = item.product_id;
                                                Callback::from(move |_| change_quantity.emit((id, -1)))
                                            };
                                            let increment = {
                                                let change_quantity = change_quantity.clone();
                                                let id = item.product_id;
                                                Callback::from(move |_| change_quantity.emit((id, 1)))
                                            };
                                            let on_remove = {
                                                let remove = remove.clone();
                                                let id = item.product_id;
                                                Callback::from(move |_| remove.emit(id))
                                            };
                                            html! {
                                                <tr key={item.product_id}>
                                                    <td>{&item.name}</td>
                                                    <td>{format_price(item.unit_price)}</td>
                                                    <td class="quantity-stepper">
                                                        <button onclick={decrement}>{"−"}</button>
                                                        <span>{item.quantity}</span>
                                                        <button onclick={increment}>{"+"}</button>
                                                    </td>
                                                    <td>{format_price(item.line_total())}</td>
                                                    <td>
                                                        <button class="remove-button" onclick={on_remove}>{"🗑️"}</button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect::<Html>()
                                    }
                                </tbody>
                            </table>
                            <div class="cart-summary">
                                <p class="total">{"Estimated total: "}{format_price(cart.total())}</p>
                                <p class="hint">{"Final total is confirmed at checkout."}</p>
                                <button class="checkout-button" onclick={checkout} disabled={*placing}>
                                    { if *placing { "Placing order..." } else { "Checkout" } }
                                </button>
                            </div>
                        </>
                    }
                }
            }
        </div>
    }
}
