// ============================================================================
// ADMIN PRODUCTS - CRUD de catálogo, carga CSV y promociones
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::{use_toast, AdminSidebar};
use crate::models::{Category, NewProduct, NewPromotion, Product};
use crate::services::product_service;
use crate::utils::format_price;

/// Estado del formulario de alta/edición. Los campos numéricos viven como
/// texto hasta el submit, igual que en el DOM.
#[derive(Clone, PartialEq, Default)]
struct ProductForm {
    editing_id: Option<i64>,
    name: String,
    description: String,
    price: String,
    category_id: String,
    image_url: String,
    stock_level: String,
}

impl ProductForm {
    fn from_product(product: &Product) -> Self {
        ProductForm {
            editing_id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            category_id: product.category_id.map(|id| id.to_string()).unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
            stock_level: product.stock_level.to_string(),
        }
    }

    fn parse(&self) -> Result<NewProduct, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required.".to_string());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number.".to_string())?;
        if price < 0.0 {
            return Err("Price cannot be negative.".to_string());
        }
        let category_id: i64 = self
            .category_id
            .trim()
            .parse()
            .map_err(|_| "Pick a category.".to_string())?;
        let stock_level: i64 = if self.stock_level.trim().is_empty() {
            0
        } else {
            self.stock_level
                .trim()
                .parse()
                .map_err(|_| "Stock must be a whole number.".to_string())?
        };

        Ok(NewProduct {
            name: self.name.trim().to_string(),
            description: {
                let trimmed = self.description.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            },
            price,
            category_id,
            image_url: {
                let trimmed = self.image_url.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            },
            stock_level,
        })
    }
}

#[function_component(AdminProducts)]
pub fn admin_products() -> Html {
    let products = use_state(Vec::<Product>::new);
    let categories = use_state(Vec::<Category>::new);
    let form = use_state(ProductForm::default);
    let csv_text = use_state(String::new);
    let promo_product = use_state(String::new);
    let promo_discount = use_state(String::new);
    let promo_start = use_state(String::new);
    let promo_end = use_state(String::new);
    let toast = use_toast();

    let reload = {
        let products = products.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let products = products.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::fetch_products().await {
                    Ok(fetched) => products.set(fetched),
                    Err(e) => toast.error(format!("Could not load products: {}", e)),
                }
            });
        })
    };

    {
        let categories = categories.clone();
        let reload = reload.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::fetch_categories().await {
                    Ok(fetched) => categories.set(fetched),
                    Err(e) => toast.error(format!("Could not load categories: {}", e)),
                }
            });
            || ()
        });
    }

    let text_field = |setter: Callback<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.emit(input.value());
        })
    };

    let set_form = |form: &UseStateHandle<ProductForm>, apply: fn(&mut ProductForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut updated = (*form).clone();
            apply(&mut updated, value);
            form.set(updated);
        })
    };

    let on_name = text_field(set_form(&form, |f, v| f.name = v));
    let on_description = text_field(set_form(&form, |f, v| f.description = v));
    let on_price = text_field(set_form(&form, |f, v| f.price = v));
    let on_image = text_field(set_form(&form, |f, v| f.image_url = v));
    let on_stock = text_field(set_form(&form, |f, v| f.stock_level = v));
    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*form).clone();
            updated.category_id = select.value();
            form.set(updated);
        })
    };

    let on_submit = {
        let form = form.clone();
        let reload = reload.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let parsed = match form.parse() {
                Ok(parsed) => parsed,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };
            let editing_id = form.editing_id;

            let form = form.clone();
            let reload = reload.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match editing_id {
                    Some(id) => product_service::update_product(id, &parsed).await,
                    None => product_service::create_product(&parsed).await,
                };
                match outcome {
                    Ok(saved) => {
                        toast.success(format!("{} saved", saved.name));
                        form.set(ProductForm::default());
                        reload.emit(());
                    }
                    Err(e) => toast.error(format!("Could not save product: {}", e)),
                }
            });
        })
    };

    let on_edit = {
        let form = form.clone();
        Callback::from(move |product: Product| {
            form.set(ProductForm::from_product(&product));
        })
    };

    let on_cancel_edit = {
        let form = form.clone();
        Callback::from(move |_| form.set(ProductForm::default()))
    };

    let on_delete = {
        let reload = reload.clone();
        let toast = toast.clone();
        Callback::from(move |(id, name): (i64, String)| {
            let reload = reload.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::delete_product(id).await {
                    Ok(()) => {
                        toast.success(format!("{} deleted", name));
                        reload.emit(());
                    }
                    Err(e) => toast.error(format!("Could not delete {}: {}", name, e)),
                }
            });
        })
    };

    let on_csv_input = {
        let csv_text = csv_text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            csv_text.set(area.value());
        })
    };

    let on_upload_csv = {
        let csv_text = csv_text.clone();
        let reload = reload.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let csv = (*csv_text).clone();
            if csv.trim().is_empty() {
                return;
            }
            let csv_text = csv_text.clone();
            let reload = reload.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::upload_products_csv(csv).await {
                    Ok(report) => {
                        if report.errors.is_empty() {
                            toast.success(format!("{} products imported", report.created));
                        } else {
                            toast.info(format!(
                                "{} imported, {} rows rejected",
                                report.created,
                                report.errors.len()
                            ));
                        }
                        csv_text.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => toast.error(format!("CSV upload failed: {}", e)),
                }
            });
        })
    };

    let on_create_promotion = {
        let promo_product = promo_product.clone();
        let promo_discount = promo_discount.clone();
        let promo_start = promo_start.clone();
        let promo_end = promo_end.clone();
        let reload = reload.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Ok(product_id), Ok(discount)) = (
                promo_product.trim().parse::<i64>(),
                promo_discount.trim().parse::<f64>(),
            ) else {
                toast.error("Pick a product and a discount percentage.");
                return;
            };
            if !(0.0..=100.0).contains(&discount) {
                toast.error("Discount must be between 0 and 100.");
                return;
            }
            let promotion = NewPromotion {
                product_id,
                discount_percentage: discount,
                start_date: (*promo_start).clone(),
                end_date: (*promo_end).clone(),
            };

            let reload = reload.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match product_service::create_promotion(&promotion).await {
                    Ok(created) => {
                        toast.success(format!(
                            "Promotion created: {}% off product {}",
                            created.discount_percentage, created.product_id
                        ));
                        // El servidor recalcula discounted_price; recargar refleja el precio nuevo
                        reload.emit(());
                    }
                    Err(e) => toast.error(format!("Could not create promotion: {}", e)),
                }
            });
        })
    };

    html! {
        <div class="admin-layout">
            <AdminSidebar />
            <main class="admin-content products">
                <h1>{"Products"}</h1>

                <form class="product-form" onsubmit={on_submit}>
                    <h2>{ if form.editing_id.is_some() { "Edit product" } else { "New product" } }</h2>
                    <input type="text" placeholder="Name" value={form.name.clone()} oninput={on_name} />
                    <input type="text" placeholder="Description" value={form.description.clone()} oninput={on_description} />
                    <input type="text" placeholder="Price" value={form.price.clone()} oninput={on_price} />
                    <select onchange={on_category}>
                        <option value="" selected={form.category_id.is_empty()}>{"Category..."}</option>
                        {
                            categories.iter().map(|category| html! {
                                <option value={category.id.to_string()}
                                        selected={form.category_id == category.id.to_string()}>
                                    {&category.name}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <input type="text" placeholder="Image URL" value={form.image_url.clone()} oninput={on_image} />
                    <input type="text" placeholder="Stock" value={form.stock_level.clone()} oninput={on_stock} />
                    <div class="form-actions">
                        <button type="submit">
                            { if form.editing_id.is_some() { "Save changes" } else { "Create" } }
                        </button>
                        {
                            if form.editing_id.is_some() {
                                html! { <button type="button" onclick={on_cancel_edit}>{"Cancel"}</button> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </form>

                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"Name"}</th>
                            <th>{"Price"}</th>
                            <th>{"Stock"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            products.iter().map(|product| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let product = product.clone();
                                    Callback::from(move |_| on_edit.emit(product.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = product.id;
                                    let name = product.name.clone();
                                    Callback::from(move |_| on_delete.emit((id, name.clone())))
                                };
                                html! {
                                    <tr key={product.id}>
                                        <td>{product.id}</td>
                                        <td>{&product.name}</td>
                                        <td>
                                            {format_price(product.price)}
                                            {
                                                if let Some(discounted) = product.discounted_price {
                                                    html! { <span class="discount-note">{format!(" → {}", format_price(discounted))}</span> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </td>
                                        <td>{product.stock_level}</td>
                                        <td>
                                            <button onclick={edit}>{"✏️"}</button>
                                            <button onclick={delete}>{"🗑️"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>

                <section class="csv-upload">
                    <h2>{"Bulk import (CSV)"}</h2>
                    <p class="hint">{"Header row plus one product per line: name,description,price,category_id,stock_level"}</p>
                    <textarea rows="6" value={(*csv_text).clone()} oninput={on_csv_input} />
                    <button onclick={on_upload_csv} disabled={csv_text.trim().is_empty()}>
                        {"Upload"}
                    </button>
                </section>

                <section class="promotion-form">
                    <h2>{"New promotion"}</h2>
                    <form onsubmit={on_create_promotion}>
                        <select onchange={{
                            let promo_product = promo_product.clone();
                            Callback::from(move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                promo_product.set(select.value());
                            })
                        }}>
                            <option value="" selected={promo_product.is_empty()}>{"Product..."}</option>
                            {
                                products.iter().map(|product| html! {
                                    <option value={product.id.to_string()}
                                            selected={*promo_product == product.id.to_string()}>
                                        {&product.name}
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <input type="text" placeholder="Discount %"
                               value={(*promo_discount).clone()}
                               oninput={text_field({
                                   let promo_discount = promo_discount.clone();
                                   Callback::from(move |v| promo_discount.set(v))
                               })} />
                        <input type="date"
                               value={(*promo_start).clone()}
                               oninput={text_field({
                                   let promo_start = promo_start.clone();
                                   Callback::from(move |v| promo_start.set(v))
                               })} />
                        <input type="date"
                               value={(*promo_end).clone()}
                               oninput={text_field({
                                   let promo_end = promo_end.clone();
                                   Callback::from(move |v| promo_end.set(v))
                               })} />
                        <button type="submit">{"Create promotion"}</button>
                    </form>
                </section>
            </main>
        </div>
    }
}
