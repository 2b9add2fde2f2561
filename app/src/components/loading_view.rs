//! This module defines the `loading_view` component, shown by a suspense
//! boundary while a route's data is still loading.

use leptos::{html::div, prelude::*};

use super::CENTERED;

/// Renders two pulsing blocks shaped like a heading and a call-to-action.
pub fn component() -> impl IntoView {
    div().class(CENTERED).child(
        div().class("card").child(
            div().class("animate-pulse").child((
                div().class("mx-auto mb-4 w-3/4 h-8 bg-gray-300 rounded"),
                div().class("mx-auto w-1/2 h-12 bg-gray-300 rounded"),
            )),
        ),
    )
}
