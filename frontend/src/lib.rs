//! Browser entry point for the modal login app.
//!
//! The server renders the route boundary cards as static HTML. Hydration is
//! what makes the error card live: its "Try again" button gets a click
//! handler, and its reporting effect starts sending each new error to the
//! console sink installed here.

use std::sync::Arc;

use app::sink::{ErrorSink, TracingSink, provide_error_sink};

/// Sink used by the error card once hydrated. Without `ssr`, [`TracingSink`]
/// writes to the browser console through `leptos::logging`.
fn browser_sink() -> Arc<dyn ErrorSink> {
    Arc::new(TracingSink)
}

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the router and its boundary views in the browser.
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("Hydrating modal login boundaries");
    leptos::mount::hydrate_body(|| {
        provide_error_sink(browser_sink());
        app::component()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use app::types::RenderError;

    #[test]
    /// `console_log` may already be installed by another test; it must not panic.
    fn test_console_log_initialization() {
        let _ = console_log::init_with_level(log::Level::Debug);
    }

    #[test]
    fn test_browser_sink_accepts_reports() {
        browser_sink().report(&RenderError::new("boom").with_digest("d1"));
    }
}
