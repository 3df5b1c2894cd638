// ============================================================================
// PRODUCT DETAILS - ficha de producto
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{use_toast, StoreNav};
use crate::models::{Cart, Product};
use crate::routes::Route;
use crate::services::{product_service, ApiError};
use crate::utils::format_price;
use crate::views::product_list::PriceTag;

#[derive(Properties, PartialEq)]
pub struct ProductDetailsProps {
    pub id: i64,
}

#[function_component(ProductDetails)]
pub fn product_details(props: &ProductDetailsProps) -> Html {
    let product = use_state(|| None::<Product>);
    let loading = use_state(|| true);
    let navigator = use_navigator().expect("ProductDetails necesita un Router");
    let toast = use_toast();

    {
        let product = product.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        use_effect_with(props.id, move |&id| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::fetch_product(id).await {
                    Ok(fetched) => product.set(Some(fetched)),
                    // Un id desconocido no es una pantalla de error: de vuelta
                    // al catálogo
                    Err(ApiError::NotFound) => {
                        toast.info("That product no longer exists.");
                        navigator.replace(&Route::Products);
                    }
                    Err(e) => toast.error(format!("Could not load product: {}", e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_add = {
        let product = product.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            if let Some(product) = &*product {
                let mut cart = Cart::load();
                cart.add(product);
                cart.save();
                toast.success(format!("{} added to cart", product.name));
            }
        })
    };

    html! {
        <div class="page product-details-page">
            <StoreNav />
            {
                if *loading {
                    html! { <div class="spinner">{"Loading..."}</div> }
                } else if let Some(product) = &*product {
                    html! {
                        <div class="product-details">
                            {
                                if let Some(url) = &product.image_url {
                                    html! { <img class="details-image" src={url.clone()} alt={product.name.clone()} /> }
                                } else {
                                    html! { <div class="image-placeholder large">{"🛍️"}</div> }
                                }
                            }
                            <div class="details-body">
                                <h1>{&product.name}</h1>
                                <PriceTag product={product.clone()} />
                                {
                                    if let Some(description) = &product.description {
                                        html! { <p class="description">{description}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <p class="stock">
                                    { if product.stock_level > 0 {
                                        format!("{} in stock", product.stock_level)
                                    } else {
                                        "Out of stock".to_string()
                                    } }
                                </p>
                                <p class="unit-price">
                                    {"You pay: "}{format_price(product.effective_price())}
                                </p>
                                <button class="add-to-cart"
                                        onclick={on_add}
                                        disabled={product.stock_level <= 0}>
                                    {"Add to Cart"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
