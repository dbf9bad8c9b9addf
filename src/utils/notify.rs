use leptos::logging::warn;

/// Pops a blocking browser alert. Outside a browser this only logs.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = leptos::window().alert_with_message(message) {
            warn!("[NOTIFY] Alert failed: {:?}", err);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    warn!("[NOTIFY] No window to alert: {}", message);
}
