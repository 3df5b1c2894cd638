use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastProvider;
use crate::context::AuthProvider;
use crate::routes::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthProvider>
                    <Switch<Route> render={switch} />
                </AuthProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}
