// ============================================================================
// ADMIN INVENTORY - capacidades y umbrales por categoría
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{use_toast, AdminSidebar};
use crate::models::{Category, InventoryItem, NewInventory};
use crate::services::{inventory_service, product_service};

#[function_component(AdminInventory)]
pub fn admin_inventory() -> Html {
    let items = use_state(Vec::<InventoryItem>::new);
    let categories = use_state(Vec::<Category>::new);
    let form_category = use_state(String::new);
    let form_capacity = use_state(String::new);
    let form_threshold = use_state(String::new);
    // Edición inline de capacidad: (id, texto del input)
    let editing = use_state(|| None::<(i64, String)>);
    let toast = use_toast();

    let reload = {
        let items = items.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let items = items.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match inventory_service::fetch_inventory().await {
                    Ok(fetched) => items.set(fetched),
                    Err(e) => toast.error(format!("Could not load inventory: {}", e)),
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

    let category_name = {
        let categories = categories.clone();
        move |category_id: i64| -> String {
            categories
                .iter()
                .find(|c| c.id == category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("Category {}", category_id))
        }
    };

    let on_create = {
        let form_category = form_category.clone();
        let form_capacity = form_capacity.clone();
        let form_threshold = form_threshold.clone();
        let reload = reload.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Ok(category_id), Ok(capacity), Ok(threshold)) = (
                form_category.trim().parse::<i64>(),
                form_capacity.trim().parse::<i64>(),
                form_threshold.trim().parse::<i64>(),
            ) else {
                toast.error("Category, capacity and threshold are required.");
                return;
            };
            if capacity < 0 || threshold < 0 {
                toast.error("Capacity and threshold cannot be negative.");
                return;
            }
            let new_item = NewInventory { category_id, capacity, threshold };

            let form_category = form_category.clone();
            let form_capacity = form_capacity.clone();
            let form_threshold = form_threshold.clone();
            let reload = reload.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match inventory_service::create_inventory(&new_item).await {
                    Ok(_) => {
                        toast.success("Inventory record created");
                        form_category.set(String::new());
                        form_capacity.set(String::new());
                        form_threshold.set(String::new());
                        reload.emit(());
                    }
                    Err(e) => toast.error(format!("Could not create record: {}", e)),
                }
            });
        })
    };

    let on_save_capacity = {
        let items = items.clone();
        let editing = editing.clone();
        let toast = toast.clone();
        Callback::from(move |(id, raw): (i64, String)| {
            let Ok(capacity) = raw.trim().parse::<i64>() else {
                toast.error("Capacity must be a whole number.");
                return;
            };
            let items = items.clone();
            let editing = editing.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match inventory_service::update_inventory(id, capacity).await {
                    Ok(updated) => {
                        let refreshed = items
                            .iter()
                            .map(|i| if i.id == updated.id { updated.clone() } else { i.clone() })
                            .collect();
                        items.set(refreshed);
                        editing.set(None);
                        toast.success("Capacity updated");
                    }
                    Err(e) => toast.error(format!("Could not update capacity: {}", e)),
                }
            });
        })
    };

    let on_delete = {
        let reload = reload.clone();
        let toast = toast.clone();
        Callback::from(move |id: i64| {
            let reload = reload.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match inventory_service::delete_inventory(id).await {
                    Ok(()) => {
                        toast.success("Inventory record deleted");
                        reload.emit(());
                    }
                    Err(e) => toast.error(format!("Could not delete record: {}", e)),
                }
            });
        })
    };

    html! {
        <div class="admin-layout">
            <AdminSidebar />
            <main class="admin-content inventory">
                <h1>{"Inventory"}</h1>

                <form class="inventory-form" onsubmit={on_create}>
                    <h2>{"New record"}</h2>
                    <select onchange={{
                        let form_category = form_category.clone();
                        Callback::from(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            form_category.set(select.value());
                        })
                    }}>
                        <option value="" selected={form_category.is_empty()}>{"Category..."}</option>
                        {
                            categories.iter().map(|category| html! {
                                <option value={category.id.to_string()}
                                        selected={*form_category == category.id.to_string()}>
                                    {&category.name}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <input type="text" placeholder="Capacity"
                           value={(*form_capacity).clone()}
                           oninput={{
                               let form_capacity = form_capacity.clone();
                               Callback::from(move |e: InputEvent| {
                                   let input: HtmlInputElement = e.target_unchecked_into();
                                   form_capacity.set(input.value());
                               })
                           }} />
                    <input type="text" placeholder="Low-stock threshold"
                           value={(*form_threshold).clone()}
                           oninput={{
                               let form_threshold = form_threshold.clone();
                               Callback::from(move |e: InputEvent| {
                                   let input: HtmlInputElement = e.target_unchecked_into();
                                   form_threshold.set(input.value());
                               })
                           }} />
                    <button type="submit">{"Create"}</button>
                </form>

                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"Category"}</th>
                            <th>{"Capacity"}</th>
                            <th>{"Threshold"}</th>
                            <th>{"Status"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            items.iter().map(|item| {
                                let is_editing = matches!(&*editing, Some((id, _)) if *id == item.id);
                                let capacity_cell = if is_editing {
                                    let raw = editing
                                        .as_ref()
                                        .map(|(_, raw)| raw.clone())
                                        .unwrap_or_default();
                                    let on_input = {
                                        let editing = editing.clone();
                                        let id = item.id;
                                        Callback::from(move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            editing.set(Some((id, input.value())));
                                        })
                                    };
                                    let save = {
                                        let on_save_capacity = on_save_capacity.clone();
                                        let id = item.id;
                                        let raw = raw.clone();
                                        Callback::from(move |_| on_save_capacity.emit((id, raw.clone())))
                                    };
                                    let cancel = {
                                        let editing = editing.clone();
                                        Callback::from(move |_| editing.set(None))
                                    };
                                    html! {
                                        <>
                                            <input class="capacity-input" type="text"
                                                   value={raw} oninput={on_input} />
                                            <button onclick={save}>{"✔️"}</button>
                                            <button onclick={cancel}>{"✖️"}</button>
                                        </>
                                    }
                                } else {
                                    let start_edit = {
                                        let editing = editing.clone();
                                        let id = item.id;
                                        let current = item.capacity.to_string();
                                        Callback::from(move |_| editing.set(Some((id, current.clone()))))
                                    };
                                    html! {
                                        <>
                                            <span>{item.capacity}</span>
                                            <button onclick={start_edit}>{"✏️"}</button>
                                        </>
                                    }
                                };

                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = item.id;
                                    Callback::from(move |_| on_delete.emit(id))
                                };

                                html! {
                                    <tr key={item.id} class={classes!(item.is_low().then_some("low-stock"))}>
                                        <td>{item.id}</td>
                                        <td>{category_name(item.category_id)}</td>
                                        <td class="capacity-cell">{capacity_cell}</td>
                                        <td>{item.threshold}</td>
                                        <td>{ if item.is_low() { "⚠️ Low" } else { "OK" } }</td>
                                        <td>
                                            <button onclick={delete}>{"🗑️"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </main>
        </div>
    }
}
