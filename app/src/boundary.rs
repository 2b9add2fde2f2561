//! Route conventions: which view the router mounts at each lifecycle point.
//!
//! Every boundary view implements [`Renders`]. The router never calls a
//! component module directly; it asks for the view registered for the
//! situation:
//!
//! | situation             | view             |
//! |-----------------------|------------------|
//! | error thrown in route | [`ErrorView`]    |
//! | route data pending    | [`LoadingView`]  |
//! | no route matched      | [`NotFoundView`] |

use std::hash::{DefaultHasher, Hash as _, Hasher as _};

use leptos::prelude::*;

use crate::{
    components::{error_view, loading_view, not_found_view},
    types::{ErrorReport, RenderError, Reset},
};

/// A view the host can mount from its props alone.
pub trait Renders {
    type Props;

    fn render(props: Self::Props) -> AnyView;
}

pub struct ErrorView;
pub struct LoadingView;
pub struct NotFoundView;

#[derive(Clone, Debug)]
pub struct ErrorProps {
    pub error: Signal<ErrorReport>,
    pub reset: Reset,
}

impl ErrorProps {
    /// Props for a single error that will not change while displayed.
    #[must_use]
    pub fn fixed(error: RenderError, reset: Reset) -> Self {
        Self {
            error: Signal::stored(ErrorReport::new(error)),
            reset,
        }
    }
}

impl Renders for ErrorView {
    type Props = ErrorProps;

    fn render(props: Self::Props) -> AnyView {
        error_view::component(props.error, props.reset).into_any()
    }
}

impl Renders for LoadingView {
    type Props = ();

    fn render((): Self::Props) -> AnyView {
        loading_view::component().into_any()
    }
}

impl Renders for NotFoundView {
    type Props = ();

    fn render((): Self::Props) -> AnyView {
        not_found_view::component().into_any()
    }
}

/// Short, stable identifier for an error message, used to match what the
/// user saw against the logs.
#[must_use]
pub fn digest(message: &str) -> String {
    let mut hasher = DefaultHasher::new();
    message.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

fn render_error(message: String) -> RenderError {
    let digest = digest(&message);
    RenderError::new(message).with_digest(digest)
}

/// Picks the error an error boundary should display out of everything it
/// collected. Returns `None` when nothing was collected.
#[must_use]
pub fn first_error(errors: Errors) -> Option<RenderError> {
    errors
        .into_iter()
        .next()
        .map(|(_id, error)| render_error(error.to_string()))
}

/// The report an error boundary is showing, tagged with the key of the error
/// it came from.
#[derive(Debug, PartialEq)]
pub struct Shown<K> {
    pub key: Option<K>,
    pub report: ErrorReport,
}

/// Keeps the previous report while the key is unchanged, so the error view
/// only sees a new identity when a different error arrives.
pub fn keep_or_replace<K: PartialEq>(
    previous: Option<&Shown<K>>,
    key: Option<K>,
    error: impl FnOnce() -> RenderError,
) -> Shown<K> {
    match previous {
        Some(previous) if previous.key == key => Shown {
            key,
            report: previous.report.clone(),
        },
        _ => Shown {
            key,
            report: ErrorReport::new(error()),
        },
    }
}

/// Follows the boundary's collected errors. A new [`ErrorReport`] is created
/// whenever the first error is replaced, including while the fallback is
/// already on screen.
#[must_use]
pub fn displayed_error(errors: ArcRwSignal<Errors>) -> Signal<ErrorReport> {
    let shown = ArcMemo::new(move |previous| {
        let (key, message) = match errors.get().into_iter().next() {
            Some((id, error)) => {
                let message = error.to_string();
                (Some((id, message.clone())), message)
            }
            None => (None, "Unknown error".to_owned()),
        };
        keep_or_replace(previous, key, || render_error(message))
    });
    Signal::derive(move || shown.with(|shown| shown.report.clone()))
}

fn error_fallback(errors: ArcRwSignal<Errors>) -> AnyView {
    let error = displayed_error(errors.clone());
    // Clearing the collected errors makes the boundary render its children again.
    let reset = Reset::new(move || errors.set(Errors::default()));
    ErrorView::render(ErrorProps { error, reset })
}

/// Wraps route content in the conventional boundaries: errors show
/// [`ErrorView`], pending loads show [`LoadingView`].
#[component]
pub fn RouteBoundary(children: ChildrenFn) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=error_fallback>
            <Suspense fallback=|| LoadingView::render(())>{children()}</Suspense>
        </ErrorBoundary>
    }
}
