// ============================================================================
// TOASTS - notificaciones transitorias y descartables
// ============================================================================
// Todo error de red/servidor termina aquí (o en un redirect); nada crashea.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
            ToastLevel::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    push: Callback<(ToastLevel, String)>,
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Error, message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Info, message.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let push = {
        let list = list.clone();
        Callback::from(move |(level, message): (ToastLevel, String)| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            list.dispatch(ToastAction::Push(Toast { id, level, message }));

            // Auto-descartar
            let list = list.clone();
            Timeout::new(TOAST_DURATION_MS, move || {
                list.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let handle = ToastHandle { push };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            <div class="toast-container">
                {
                    list.toasts.iter().map(|toast| {
                        let dismiss = {
                            let list = list.clone();
                            let id = toast.id;
                            Callback::from(move |_| list.dispatch(ToastAction::Dismiss(id)))
                        };
                        html! {
                            <div key={toast.id} class={classes!("toast", toast.level.css_class())}>
                                <span class="toast-message">{&toast.message}</span>
                                <button class="toast-close" onclick={dismiss}>{"×"}</button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toast debe usarse dentro de ToastProvider")
}
