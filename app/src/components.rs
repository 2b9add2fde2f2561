//! The boundary views the router mounts around route content.
//!
//! Each sub-module renders one fixed card: an error with a retry control, a
//! pulsing loading placeholder, or the unmatched-route page.

use crate::types::AppError;

pub mod error_view;
pub mod loading_view;
pub mod not_found_view;

/// Full-height, centred column every boundary card sits in.
const CENTERED: &str = "flex flex-col gap-4 justify-center items-center min-h-screen text-center";

/// On the server, sets the HTTP response status for `error`. No-op in the browser.
fn set_response_status(error: &AppError) {
    #[cfg(feature = "ssr")]
    {
        use leptos::prelude::use_context;
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(error.status_code());
        }
    }
    #[cfg(not(feature = "ssr"))]
    let _ = error;
}
