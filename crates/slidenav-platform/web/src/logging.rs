/// Routes panics and `log` output to the browser console.
///
/// Call once from the page's entry point. Does nothing off wasm.
pub fn install_logging(level: log::Level) {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = level;
}
