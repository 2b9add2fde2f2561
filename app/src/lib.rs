// Application shell, router and route boundary views
use crate::boundary::{NotFoundView, Renders as _, RouteBoundary};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod boundary;
pub mod components;
mod home;
pub mod sink;
pub mod types;
pub mod watch;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/modal-login.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Modal Login").build()),
        )),
        body().child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <main class="container mx-auto">
                <FlatRoutes fallback=|| NotFoundView::render(())>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RouteBoundary>{home::component()}</RouteBoundary> }
                    />
                </FlatRoutes>
            </main>
        </Router>
    }
}
