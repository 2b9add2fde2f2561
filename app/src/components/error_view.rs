//! This module defines the `error_view` component, mounted by an error boundary
//! once a rendering or data-fetch error escapes its subtree.
//!
//! It reports the error to the installed [`ErrorSink`] once per distinct error
//! and offers a "Try again" button that hands control back to the host through
//! the [`Reset`] callback.

use leptos::{
    ev,
    html::{button, div, h2},
    prelude::*,
};

use super::{CENTERED, set_response_status};
use crate::{
    sink::{ErrorSink, use_error_sink},
    types::{AppError, ErrorReport, Reset},
    watch::Watcher,
};

pub const HEADING: &str = "Something went wrong!";
pub const RETRY_LABEL: &str = "Try again";

/// Sends `report` to `sink` if it is not the error `watcher` saw last.
///
/// Returns whether the sink was called.
pub fn report_on_change(watcher: &mut Watcher<ErrorReport>, report: ErrorReport, sink: &dyn ErrorSink) -> bool {
    watcher.observe(report, |report| sink.report(report.error()))
}

/// Handles one activation of the retry button.
pub fn retry(reset: &Reset) {
    leptos::logging::log!("Retrying failed route");
    reset.trigger();
}

/// Renders the error card.
///
/// # Arguments
///
/// * `error` - The error being displayed. Whenever its identity changes the new
///   error is reported again.
/// * `reset` - Invoked once per click on the retry button.
pub fn component(error: Signal<ErrorReport>, reset: Reset) -> impl IntoView {
    let sink = use_error_sink();
    let watcher = StoredValue::new(Watcher::new());

    // The server renders once and never runs effects, so it reports while building the view.
    #[cfg(feature = "ssr")]
    watcher.update_value(|watcher| {
        report_on_change(watcher, error.get_untracked(), sink.as_ref());
    });

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let report = error.get();
        watcher.update_value(|watcher| {
            report_on_change(watcher, report, sink.as_ref());
        });
    });

    set_response_status(&AppError::Render);

    div().class(CENTERED).child(
        div().class("card").child((
            h2().class("mb-4 text-xl font-bold").child(HEADING),
            button()
                .class("btn btn-primary")
                .on(ev::click, move |_| retry(&reset))
                .child(RETRY_LABEL),
        )),
    )
}
