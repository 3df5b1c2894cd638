use storefront::app::App;
use storefront::config::CONFIG;

fn main() {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
        log::info!("🛒 Storefront PWA arrancando...");
    }

    yew::Renderer::<App>::new().render();
}
