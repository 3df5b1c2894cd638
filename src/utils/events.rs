/// Difunde un evento global de window. Los suscriptores viven en
/// componentes montados; fuera del navegador es un no-op.
pub fn broadcast(event_name: &str) {
    if let Some(win) = web_sys::window() {
        if let Ok(event) = web_sys::CustomEvent::new(event_name) {
            let _ = win.dispatch_event(&event);
        }
    }
}
