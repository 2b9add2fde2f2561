//! This module defines the `not_found_view` component, the router fallback for
//! paths that match no route.
//!
//! On the server it also sets the response status to 404.

use leptos::{
    html::{div, h2, p},
    prelude::*,
};

use super::{CENTERED, set_response_status};
use crate::types::AppError;

pub const HEADING: &str = "Page Not Found";
pub const MESSAGE: &str = "Could not find requested resource";

pub fn component() -> impl IntoView {
    set_response_status(&AppError::NotFound);

    div().class(CENTERED).child(
        div().class("card").child((
            h2().class("mb-4 text-xl font-bold").child(HEADING),
            p().child(MESSAGE),
        )),
    )
}
