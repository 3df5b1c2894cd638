use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StoreNav;
use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <StoreNav />
            <h1>{"404"}</h1>
            <p>{"That page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">{"Back to the store"}</Link<Route>>
        </div>
    }
}
