use email_scheduler_admin::config::CONFIG;
use email_scheduler_admin::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Email Scheduler Admin starting (backend: {}, debug logging: {})",
        CONFIG.backend_url(),
        CONFIG.is_logging_enabled()
    );

    yew::Renderer::<App>::new().render();
}
