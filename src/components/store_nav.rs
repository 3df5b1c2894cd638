use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_auth;
use crate::models::Cart;
use crate::routes::Route;
use crate::state::AuthPhase;
use crate::utils::CART_UPDATED_EVENT;

/// Barra superior de la tienda pública. El badge del carrito se refresca
/// con el evento `cart-updated` que dispara cada mutación del carrito.
#[function_component(StoreNav)]
pub fn store_nav() -> Html {
    let auth = use_auth();
    let cart_count = use_state(|| Cart::load().count());

    {
        let cart_count = cart_count.clone();
        use_effect_with((), move |_| {
            let on_change = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                cart_count.set(Cart::load().count());
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = web_sys::window() {
                let _ = win.add_event_listener_with_callback(
                    CART_UPDATED_EVENT,
                    on_change.as_ref().unchecked_ref(),
                );
            }
            // El closure vive hasta el desmontaje, donde se quita el listener
            move || {
                if let Some(win) = web_sys::window() {
                    let _ = win.remove_event_listener_with_callback(
                        CART_UPDATED_EVENT,
                        on_change.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let session_link = match &auth.phase {
        AuthPhase::Authenticated(_) => html! {
            <Link<Route> to={Route::Admin} classes="nav-link">{"Admin"}</Link<Route>>
        },
        _ => html! {
            <Link<Route> to={Route::SignIn} classes="nav-link">{"Sign In"}</Link<Route>>
        },
    };

    html! {
        <header class="store-nav">
            <Link<Route> to={Route::Home} classes="brand">{"E-Commerce"}</Link<Route>>
            <nav class="store-links">
                <Link<Route> to={Route::Products} classes="nav-link">{"Products"}</Link<Route>>
                <Link<Route> to={Route::Cart} classes="nav-link">
                    {"Cart"}
                    { if *cart_count > 0 { html!{ <span class="cart-badge">{*cart_count}</span> } } else { html!{} } }
                </Link<Route>>
                { session_link }
            </nav>
        </header>
    }
}
