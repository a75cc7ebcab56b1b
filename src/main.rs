use activity_portal::components::App;
use activity_portal::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Activity Portal starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
