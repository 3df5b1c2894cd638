// ============================================================================
// ADMIN SALES - reportes de ventas y previsión de demanda (solo Admin)
// ============================================================================

use std::collections::HashMap;

use yew::prelude::*;

use crate::components::{use_toast, AdminSidebar};
use crate::models::PopularProduct;
use crate::services::report_service;
use crate::utils::format_price;

#[function_component(AdminSales)]
pub fn admin_sales() -> Html {
    let popular = use_state(Vec::<PopularProduct>::new);
    let loading = use_state(|| true);
    // Previsiones ya pedidas, por producto
    let forecasts = use_state(HashMap::<i64, f64>::new);
    let toast = use_toast();

    {
        let popular = popular.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match report_service::most_popular_products().await {
                    Ok(fetched) => popular.set(fetched),
                    Err(e) => toast.error(format!("Could not load sales report: {}", e)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_forecast = {
        let forecasts = forecasts.clone();
        let toast = toast.clone();
        Callback::from(move |product_id: i64| {
            if forecasts.contains_key(&product_id) {
                return;
            }
            let forecasts = forecasts.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match report_service::predict_demand(product_id).await {
                    Ok(forecast) => {
                        log::info!("📈 Demanda prevista para {}: {}",
                            product_id, forecast.predicted_demand);
                        let mut updated = (*forecasts).clone();
                        updated.insert(product_id, forecast.predicted_demand);
                        forecasts.set(updated);
                    }
                    Err(e) => toast.error(format!("Forecast failed: {}", e)),
                }
            });
        })
    };

    let total_revenue: f64 = popular.iter().map(|p| p.revenue).sum();

    html! {
        <div class="admin-layout">
            <AdminSidebar />
            <main class="admin-content sales">
                <h1>{"Sales"}</h1>
                {
                    if *loading {
                        html! { <div class="spinner">{"Loading report..."}</div> }
                    } else if popular.is_empty() {
                        html! { <p class="empty-state">{"No sales recorded yet."}</p> }
                    } else {
                        html! {
                            <>
                                <p class="total-revenue">
                                    {"Revenue (top products): "}{format_price(total_revenue)}
                                </p>
                                <table class="admin-table">
                                    <thead>
                                        <tr>
                                            <th>{"Product"}</th>
                                            <th>{"Units sold"}</th>
                                            <th>{"Revenue"}</th>
                                            <th>{"Forecast"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {
                                            popular.iter().map(|entry| {
                                                let forecast_cell = match forecasts.get(&entry.product_id) {
                                                    Some(demand) => html! {
                                                        <span class="forecast-value">
                                                            {format!("{:.0} units/month", demand)}
                                                        </span>
                                                    },
                                                    None => {
                                                        let on_forecast = on_forecast.clone();
                                                        let id = entry.product_id;
                                                        let click = Callback::from(move |_| on_forecast.emit(id));
                                                        html! {
                                                            <button class="forecast-button" onclick={click}>
                                                                {"📈 Predict"}
                                                            </button>
                                                        }
                                                    }
                                                };
                                                html! {
                                                    <tr key={entry.product_id}>
                                                        <td>{&entry.name}</td>
                                                        <td>{entry.units_sold}</td>
                                                        <td>{format_price(entry.revenue)}</td>
                                                        <td>{forecast_cell}</td>
                                                    </tr>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </tbody>
                                </table>
                            </>
                        }
                    }
                }
            </main>
        </div>
    }
}
