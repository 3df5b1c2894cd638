// ============================================================================
// SIGN IN - formulario de acceso
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StoreNav;
use crate::context::use_auth;
use crate::models::Credentials;
use crate::routes::Route;
use crate::state::AuthPhase;

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("SignIn necesita un Router");
    let username = use_state(String::new);
    let password = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    // Con la sesión resuelta, esta pantalla no tiene nada que hacer
    {
        let navigator = navigator.clone();
        use_effect_with(auth.phase.clone(), move |phase| {
            if matches!(phase, AuthPhase::Authenticated(_)) {
                navigator.replace(&Route::Admin);
            }
            || ()
        });
    }

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let local_error = local_error.clone();
        let sign_in = auth.sign_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Validación local antes de tocar la red
            if username.trim().is_empty() || password.is_empty() {
                local_error.set(Some("Username and password are required.".to_string()));
                return;
            }
            local_error.set(None);
            sign_in.emit(Credentials {
                username: username.trim().to_string(),
                password: (*password).clone(),
            });
        })
    };

    let error_message = local_error.as_deref().or(auth.error.as_deref());

    html! {
        <div class="page sign-in-page">
            <StoreNav />
            <form class="sign-in-form" onsubmit={on_submit}>
                <h1>{"Sign In"}</h1>
                {
                    if let Some(message) = error_message {
                        html! { <div class="form-error">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                <label for="username">{"Username"}</label>
                <input id="username"
                       type="text"
                       value={(*username).clone()}
                       oninput={on_username}
                       disabled={auth.pending} />
                <label for="password">{"Password"}</label>
                <input id="password"
                       type="password"
                       value={(*password).clone()}
                       oninput={on_password}
                       disabled={auth.pending} />
                <button type="submit" disabled={auth.pending}>
                    { if auth.pending { "Signing in..." } else { "Sign In" } }
                </button>
            </form>
        </div>
    }
}
