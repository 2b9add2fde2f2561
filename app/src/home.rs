//! Landing route. Its content sits inside the standard route boundaries.

use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

pub fn component() -> impl IntoView {
    (
        Title(TitleProps::builder().text("Modal Login").build()),
        div()
            .class("flex flex-col gap-4 justify-center items-center min-h-screen text-center")
            .child(div().class("card").child((
                h1().class("mb-4 text-xl font-bold").child("Modal Login"),
                p().child("Sign in to continue."),
            ))),
    )
}
