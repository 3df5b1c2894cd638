// ============================================================================
// AUTH CONTEXT - DUEÑO ÚNICO DE LA SESIÓN
// ============================================================================
// El provider posee la SessionMachine (único escritor) y reparte snapshots
// de solo lectura de AuthPhase vía contexto. Modelo server-verified: el rol
// sale SIEMPRE de GET /validate-token, nunca de decodificar el token local.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::Credentials;
use crate::services::auth_service;
use crate::services::http::stored_access_token;
use crate::services::ApiError;
use crate::state::{AuthPhase, SessionMachine};
use crate::utils::SESSION_EXPIRED_EVENT;

#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    pub phase: AuthPhase,
    /// Mensaje de error del último sign-in fallido, para el formulario.
    pub error: Option<String>,
    /// `true` mientras hay un sign-in en vuelo.
    pub pending: bool,
    pub ensure_validated: Callback<()>,
    pub sign_in: Callback<Credentials>,
    pub sign_out: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let machine = use_mut_ref(SessionMachine::new);
    let phase = use_state(|| AuthPhase::Unknown);
    let error = use_state(|| None::<String>);
    let pending = use_state(|| false);

    let ensure_validated = {
        let machine = machine.clone();
        let phase = phase.clone();
        Callback::from(move |_| {
            ensure_validated(&machine, &phase);
        })
    };

    // Arranque: sin token guardado no hay nada que validar; con token,
    // una única introspección resuelve la fase.
    {
        let machine = machine.clone();
        let phase = phase.clone();
        use_effect_with((), move |_| {
            if stored_access_token().is_none() {
                let resolved = machine.borrow_mut().signed_out();
                phase.set(resolved);
            } else {
                self::ensure_validated(&machine, &phase);
            }
            || ()
        });
    }

    // El API client dispara este evento cuando el refresh silencioso falla
    {
        let machine = machine.clone();
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let on_expired = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                log::warn!("⚠️ Sesión expirada, volviendo a anónimo");
                let resolved = machine.borrow_mut().signed_out();
                phase.set(resolved);
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = web_sys::window() {
                let _ = win.add_event_listener_with_callback(
                    SESSION_EXPIRED_EVENT,
                    on_expired.as_ref().unchecked_ref(),
                );
            }
            // Listener global registrado una sola vez; mantener el closure vivo
            on_expired.forget();
            || ()
        });
    }

    let sign_in = {
        let machine = machine.clone();
        let phase = phase.clone();
        let error = error.clone();
        let pending = pending.clone();
        Callback::from(move |credentials: Credentials| {
            let machine = machine.clone();
            let phase = phase.clone();
            let error = error.clone();
            let pending = pending.clone();
            pending.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::sign_in(&credentials).await {
                    // El login solo entrega tokens; la fase no cambia hasta
                    // que la introspección confirma la identidad
                    Ok(()) => match auth_service::validate_session().await {
                        Ok(user) => {
                            log::info!("✅ Login exitoso: {} ({})",
                                credentials.username, user.role);
                            error.set(None);
                            let resolved = machine.borrow_mut().signed_in(user);
                            phase.set(resolved);
                        }
                        Err(e) => {
                            log::error!("❌ Validación tras login fallida: {}", e);
                            let resolved = machine.borrow_mut().signed_out();
                            phase.set(resolved);
                            error.set(Some("Session could not be validated.".to_string()));
                        }
                    },
                    Err(ApiError::Unauthorized) => {
                        log::warn!("⚠️ Credenciales inválidas para {}", credentials.username);
                        error.set(Some("Invalid username or password.".to_string()));
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                pending.set(false);
            });
        })
    };

    let sign_out = {
        let machine = machine.clone();
        let phase = phase.clone();
        Callback::from(move |_| {
            let machine = machine.clone();
            let phase = phase.clone();
            wasm_bindgen_futures::spawn_local(async move {
                auth_service::sign_out().await;
                let resolved = machine.borrow_mut().signed_out();
                phase.set(resolved);
            });
        })
    };

    let handle = AuthHandle {
        phase: (*phase).clone(),
        error: (*error).clone(),
        pending: *pending,
        ensure_validated,
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<AuthHandle>>
    }
}

fn ensure_validated(
    machine: &Rc<RefCell<SessionMachine>>,
    phase: &UseStateHandle<AuthPhase>,
) {
    // begin_validation deduplica: una sola introspección en vuelo
    if !machine.borrow_mut().begin_validation() {
        return;
    }

    log::info!("🔐 Validando sesión contra el backend...");
    let machine = machine.clone();
    let phase = phase.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = auth_service::validate_session().await;
        match &outcome {
            Ok(user) => log::info!("✅ Sesión válida, rol: {}", user.role),
            Err(e) => log::warn!("⚠️ Validación de sesión fallida: {}", e),
        }
        let resolved = machine.borrow_mut().finish_validation(outcome);
        phase.set(resolved);
    });
}

#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("use_auth debe usarse dentro de AuthProvider")
}
