// ============================================================================
// ACCESS GATE - render, placeholder o redirect según la sesión
// ============================================================================
// Conveniencia de UI, NO frontera de seguridad: el backend re-valida cada
// endpoint. El gate solo evita renderizar pantallas que el usuario no puede
// usar.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_auth;
use crate::models::Role;
use crate::routes::Route;
use crate::state::AuthPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Sesión sin resolver: placeholder neutro, sin redirect.
    Loading,
    /// Anónimo: REPLACE hacia el sign-in (no push, para no ciclar con back).
    RedirectSignIn,
    /// Autenticado pero sin rol aceptado: REPLACE hacia el home.
    RedirectHome,
    Render,
}

impl GateOutcome {
    /// Decisión pura del gate. `allowed = None` significa "cualquier rol
    /// autenticado"; un rol requerido único es un conjunto de un elemento.
    pub fn decide(phase: &AuthPhase, allowed: Option<&[Role]>) -> GateOutcome {
        match phase {
            AuthPhase::Unknown => GateOutcome::Loading,
            AuthPhase::Anonymous => GateOutcome::RedirectSignIn,
            AuthPhase::Authenticated(user) => match allowed {
                Some(set) if !set.contains(&user.role) => GateOutcome::RedirectHome,
                _ => GateOutcome::Render,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    /// Conjunto de roles aceptados; ausente = cualquier autenticado.
    /// Un conjunto vacío no acepta a nadie.
    #[prop_or_default]
    pub roles: Option<Vec<Role>>,
    pub children: Children,
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("RequireAuth necesita un Router");

    // Una validación por montaje del gate; el contexto deduplica
    {
        let ensure = auth.ensure_validated.clone();
        use_effect_with((), move |_| {
            ensure.emit(());
            || ()
        });
    }

    let outcome = GateOutcome::decide(&auth.phase, props.roles.as_deref());

    {
        let navigator = navigator.clone();
        use_effect_with(outcome, move |outcome| {
            match outcome {
                GateOutcome::RedirectSignIn => navigator.replace(&Route::SignIn),
                GateOutcome::RedirectHome => navigator.replace(&Route::Home),
                GateOutcome::Loading | GateOutcome::Render => {}
            }
            || ()
        });
    }

    match outcome {
        GateOutcome::Render => html! { <>{ props.children.clone() }</> },
        GateOutcome::Loading => html! {
            <div class="gate-loading">
                <div class="spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        },
        // Redirect en vuelo: jamás renderizar contenido protegido
        GateOutcome::RedirectSignIn | GateOutcome::RedirectHome => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionUser;

    fn authenticated(role: Role) -> AuthPhase {
        AuthPhase::Authenticated(SessionUser { id: 1, username: None, role })
    }

    #[test]
    fn unknown_never_redirects_nor_renders() {
        let outcome = GateOutcome::decide(&AuthPhase::Unknown, Some(&[Role::Admin]));
        assert_eq!(outcome, GateOutcome::Loading);

        let outcome = GateOutcome::decide(&AuthPhase::Unknown, None);
        assert_eq!(outcome, GateOutcome::Loading);
    }

    #[test]
    fn anonymous_redirects_to_sign_in() {
        let outcome = GateOutcome::decide(&AuthPhase::Anonymous, None);
        assert_eq!(outcome, GateOutcome::RedirectSignIn);
    }

    #[test]
    fn renders_iff_role_in_allowed_set() {
        let allowed = [Role::Admin, Role::OrderManager];
        for role in Role::ALL {
            let outcome = GateOutcome::decide(&authenticated(role), Some(&allowed));
            if allowed.contains(&role) {
                assert_eq!(outcome, GateOutcome::Render);
            } else {
                assert_eq!(outcome, GateOutcome::RedirectHome);
            }
        }
    }

    #[test]
    fn order_manager_scenario() {
        let allowed = [Role::Admin, Role::OrderManager];
        assert_eq!(
            GateOutcome::decide(&authenticated(Role::OrderManager), Some(&allowed)),
            GateOutcome::Render
        );
        assert_eq!(
            GateOutcome::decide(&authenticated(Role::ProductManager), Some(&allowed)),
            GateOutcome::RedirectHome
        );
    }

    #[test]
    fn empty_set_denies_every_role() {
        for role in Role::ALL {
            assert_eq!(
                GateOutcome::decide(&authenticated(role), Some(&[])),
                GateOutcome::RedirectHome
            );
        }
    }

    #[test]
    fn missing_set_accepts_any_authenticated_role() {
        for role in Role::ALL {
            assert_eq!(
                GateOutcome::decide(&authenticated(role), None),
                GateOutcome::Render
            );
        }
    }
}
