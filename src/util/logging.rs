//! Console logging and panic reporting.

/// Install the panic hook and route the `log` facade to the browser console.
///
/// Debug builds log at `Debug`; release builds at `Info`. Safe to call more
/// than once.
pub fn init() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}
