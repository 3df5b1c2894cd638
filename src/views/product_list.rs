// ============================================================================
// PRODUCT LIST - catálogo público
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_toast, StoreNav};
use crate::models::{Cart, Product};
use crate::routes::Route;
use crate::services::product_service;
use crate::utils::format_price;

#[function_component(ProductList)]
pub fn product_list() -> Html {
    let products = use_state(Vec::<Product>::new);
    let loading = use_state(|| true);
    let toast = use_toast();

    {
        let products = products.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::fetch_products().await {
                    Ok(fetched) => products.set(fetched),
                    Err(e) => toast.error(format!("Could not load products: {}", e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_add = {
        let toast = toast.clone();
        Callback::from(move |product: Product| {
            let mut cart = Cart::load();
            cart.add(&product);
            cart.save();
            toast.success(format!("{} added to cart", product.name));
        })
    };

    html! {
        <div class="page product-list-page">
            <StoreNav />
            <h1>{"Products"}</h1>
            {
                if *loading {
                    html! { <div class="spinner">{"Loading products..."}</div> }
                } else if products.is_empty() {
                    html! { <p class="empty-state">{"No products available."}</p> }
                } else {
                    html! {
                        <div class="product-grid">
                            {
                                products.iter().map(|product| {
                                    let on_add = {
                                        let on_add = on_add.clone();
                                        let product = product.clone();
                                        Callback::from(move |_| on_add.emit(product.clone()))
                                    };
                                    html! {
                                        <div key={product.id} class="product-card">
                                            <Link<Route> to={Route::ProductDetails { id: product.id }}>
                                                {
                                                    if let Some(url) = &product.image_url {
                                                        html! { <img src={url.clone()} alt={product.name.clone()} /> }
                                                    } else {
                                                        html! { <div class="image-placeholder">{"🛍️"}</div> }
                                                    }
                                                }
                                                <h3>{&product.name}</h3>
                                            </Link<Route>>
                                            <PriceTag product={product.clone()} />
                                            <button class="add-to-cart" onclick={on_add}>
                                                {"Add to Cart"}
                                            </button>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PriceTagProps {
    pub product: Product,
}

/// Precio con el original tachado cuando el servidor manda descuento.
#[function_component(PriceTag)]
pub fn price_tag(props: &PriceTagProps) -> Html {
    let product = &props.product;
    match product.discounted_price {
        Some(discounted) => html! {
            <p class="price">
                <span class="original-price">{format_price(product.price)}</span>
                <span class="discounted-price">{format_price(discounted)}</span>
            </p>
        },
        None => html! {
            <p class="price">{format_price(product.price)}</p>
        },
    }
}
